// SPDX-License-Identifier: MPL-2.0
//! Final report submission and the dashboard feed.

use super::Endpoints;
use crate::location::Coordinate;
use crate::media;
use serde::Deserialize;
use std::fmt;

/// User-facing submission failure text. The underlying cause is recorded in
/// diagnostics but never shown at this stage.
pub const MSG_SUBMIT_FAILED: &str = "Failed to submit report. Please try again.";

/// Everything the persistence endpoint needs for one report.
#[derive(Debug, Clone)]
pub struct ReportPayload {
    pub image: Vec<u8>,
    pub file_name: String,
    pub animal: String,
    pub severity: String,
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub coord: Coordinate,
}

/// A submission failure. Displays as the single generic message; the raw
/// reason is kept for diagnostics only.
#[derive(Debug, Clone)]
pub struct SubmitError {
    pub reason: String,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MSG_SUBMIT_FAILED)
    }
}

/// Submits a completed report as a multipart request.
pub async fn submit_report(
    client: reqwest::Client,
    endpoints: Endpoints,
    payload: ReportPayload,
) -> Result<(), SubmitError> {
    let part = reqwest::multipart::Part::bytes(payload.image)
        .file_name(payload.file_name.clone())
        .mime_str(media::mime_type(&payload.file_name))
        .map_err(|e| SubmitError {
            reason: e.to_string(),
        })?;

    let form = reqwest::multipart::Form::new()
        .part("image", part)
        .text("animal", payload.animal)
        .text("severity", payload.severity)
        .text("description", payload.description)
        .text("contact_name", payload.contact_name)
        .text("contact_phone", payload.contact_phone)
        .text("contact_email", payload.contact_email)
        .text("lat", payload.coord.lat.to_string())
        .text("lng", payload.coord.lng.to_string());

    let response = client
        .post(endpoints.upload_report())
        .multipart(form)
        .send()
        .await
        .map_err(|e| SubmitError {
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        let reason = super::classify::error_detail(response).await;
        return Err(SubmitError { reason });
    }

    Ok(())
}

/// One row of the live rescue-request feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSummary {
    #[serde(default)]
    pub id: u64,
    pub animal: String,
    pub severity: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub status: String,
}

/// Fetch failure for the dashboard feed. Non-fatal; shown as a toast.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub reason: String,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not load rescue requests. Please try again.")
    }
}

/// Fetches the live rescue-request list.
pub async fn fetch_reports(
    client: reqwest::Client,
    endpoints: Endpoints,
) -> Result<Vec<ReportSummary>, FetchError> {
    let response = client
        .get(endpoints.reports())
        .send()
        .await
        .map_err(|e| FetchError {
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(FetchError {
            reason: format!("HTTP status {}", response.status()),
        });
    }

    response.json().await.map_err(|e| FetchError {
        reason: e.to_string(),
    })
}
