// SPDX-License-Identifier: MPL-2.0
//! The AI classification call and its mapping onto the report draft.
//!
//! The call is fired the moment a photo is selected and never blocks form
//! interaction. On any failure no draft field is touched; the user fills the
//! fields manually. The classifier speaks a three-level severity vocabulary
//! (Low/Moderate/Critical) that is translated into the form's four-level
//! one; `High` is form-only and never produced here.

use super::Endpoints;
use crate::location::Coordinate;
use crate::media;
use crate::report::{DraftUpdate, Severity};
use serde::Deserialize;
use std::fmt;

/// A parsed classification response.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub animal: String,
    pub severity_raw: String,
    pub score: f64,
    pub description: Option<String>,
}

/// Classification failures. All of them are advisory: the form stays
/// editable and submittable with manually entered fields.
#[derive(Debug, Clone)]
pub enum ClassifyError {
    /// The server could not be reached at all.
    Unreachable,
    /// Transport-level failure other than connection refusal.
    Network(String),
    /// Non-2xx status; carries the server-supplied detail.
    Server(String),
    /// 2xx body that lacks the required `animal` field or is not JSON.
    MalformedResponse,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::Unreachable => write!(
                f,
                "Cannot connect to server. Please check that the rescue service is running."
            ),
            ClassifyError::Network(msg) => write!(f, "Network error: {msg}. Please try again."),
            ClassifyError::Server(detail) => write!(f, "Analysis failed: {detail}"),
            ClassifyError::MalformedResponse => {
                write!(f, "The analysis service returned an unexpected response.")
            }
        }
    }
}

#[derive(Deserialize)]
struct ClassifyResponse {
    animal: String,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    description: Option<String>,
}

/// Sends the photo and the current coordinate snapshot to the classifier.
pub async fn classify(
    client: reqwest::Client,
    endpoints: Endpoints,
    image: Vec<u8>,
    file_name: String,
    coord: Coordinate,
) -> Result<Classification, ClassifyError> {
    let part = reqwest::multipart::Part::bytes(image)
        .file_name(file_name.clone())
        .mime_str(media::mime_type(&file_name))
        .map_err(|e| ClassifyError::Network(e.to_string()))?;

    let form = reqwest::multipart::Form::new()
        .part("image", part)
        .text("lat", coord.lat.to_string())
        .text("lng", coord.lng.to_string());

    let response = client
        .post(endpoints.upload_report())
        .multipart(form)
        .send()
        .await
        .map_err(classify_transport_error)?;

    if !response.status().is_success() {
        return Err(ClassifyError::Server(error_detail(response).await));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClassifyError::Network(e.to_string()))?;
    let parsed: ClassifyResponse =
        serde_json::from_str(&body).map_err(|_| ClassifyError::MalformedResponse)?;

    Ok(Classification {
        animal: parsed.animal,
        severity_raw: parsed.severity.unwrap_or_default(),
        score: parsed.score.unwrap_or_default(),
        description: parsed.description,
    })
}

fn classify_transport_error(err: reqwest::Error) -> ClassifyError {
    if err.is_connect() {
        ClassifyError::Unreachable
    } else {
        ClassifyError::Network(err.to_string())
    }
}

/// Extracts a human-readable detail from a non-2xx response: JSON
/// `detail`/`message` fields first, plain body text second, the status code
/// as a last resort.
pub(crate) async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        for key in ["detail", "message"] {
            if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        format!("Server error ({status})")
    } else {
        trimmed.to_string()
    }
}

/// Translates the classifier's severity vocabulary into the form's.
///
/// Anything outside the known vocabulary maps to `None`, forcing manual
/// selection. `High` is intentionally absent: the classifier cannot produce
/// it.
#[must_use]
pub fn map_severity(raw: &str) -> Option<Severity> {
    match raw {
        "Critical" => Some(Severity::Critical),
        "Moderate" => Some(Severity::Medium),
        "Low" => Some(Severity::Low),
        _ => None,
    }
}

/// Builds the draft prefill for a classification result.
///
/// Uses the server-provided description when present, otherwise synthesizes
/// one from the raw classification.
#[must_use]
pub fn prefill(classification: &Classification) -> DraftUpdate {
    let description = match &classification.description {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => synthesize_description(classification),
    };

    DraftUpdate::Prefill {
        animal_type: classification.animal.clone(),
        severity: map_severity(&classification.severity_raw),
        description,
    }
}

fn synthesize_description(classification: &Classification) -> String {
    format!(
        "Detected {} with {} severity (AI score: {}). Immediate attention required.",
        classification.animal, classification.severity_raw, classification.score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(severity: &str) -> Classification {
        Classification {
            animal: "Dog".into(),
            severity_raw: severity.into(),
            score: 0.87,
            description: None,
        }
    }

    #[test]
    fn severity_mapping_is_a_fixed_table() {
        assert_eq!(map_severity("Critical"), Some(Severity::Critical));
        assert_eq!(map_severity("Moderate"), Some(Severity::Medium));
        assert_eq!(map_severity("Low"), Some(Severity::Low));
    }

    #[test]
    fn unknown_severity_maps_to_none() {
        assert_eq!(map_severity("High"), None);
        assert_eq!(map_severity("moderate"), None);
        assert_eq!(map_severity(""), None);
        assert_eq!(map_severity("Severe"), None);
    }

    #[test]
    fn synthesized_description_names_animal_severity_and_score() {
        let text = synthesize_description(&classification("Moderate"));
        assert_eq!(
            text,
            "Detected Dog with Moderate severity (AI score: 0.87). Immediate attention required."
        );
    }

    #[test]
    fn prefill_prefers_server_description() {
        let mut c = classification("Moderate");
        c.description = Some("Visible leg wound".into());

        match prefill(&c) {
            DraftUpdate::Prefill { description, .. } => {
                assert_eq!(description, "Visible leg wound");
            }
            other => panic!("expected Prefill, got {other:?}"),
        }
    }

    #[test]
    fn prefill_synthesizes_when_description_is_blank() {
        let mut c = classification("Critical");
        c.description = Some("   ".into());

        match prefill(&c) {
            DraftUpdate::Prefill {
                severity,
                description,
                ..
            } => {
                assert_eq!(severity, Some(Severity::Critical));
                assert!(description.contains("Detected Dog"));
                assert!(description.contains("Critical"));
            }
            other => panic!("expected Prefill, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_error_message_names_the_connection() {
        let message = ClassifyError::Unreachable.to_string();
        assert!(message.contains("Cannot connect to server"));
    }

    #[test]
    fn server_error_message_carries_detail() {
        let message = ClassifyError::Server("image too large".into()).to_string();
        assert!(message.contains("image too large"));
    }

    #[test]
    fn response_body_without_animal_field_is_malformed() {
        let body = r#"{"severity": "Low", "score": 0.5}"#;
        let parsed: Result<ClassifyResponse, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn response_body_with_animal_only_parses() {
        let body = r#"{"animal": "Cat"}"#;
        let parsed: ClassifyResponse =
            serde_json::from_str(body).expect("animal-only body should parse");
        assert_eq!(parsed.animal, "Cat");
        assert!(parsed.severity.is_none());
        assert!(parsed.score.is_none());
    }
}
