// SPDX-License-Identifier: MPL-2.0
//! HTTP client plumbing for the rescue server.
//!
//! The server exposes a single `POST /upload-report` endpoint serving two
//! payload shapes: the classification probe (image plus coordinates) and the
//! final report submission. `GET /reports` backs the dashboard.

pub mod classify;
pub mod submit;

pub use classify::{classify, map_severity, prefill, Classification, ClassifyError};
pub use submit::{
    fetch_reports, submit_report, FetchError, ReportPayload, ReportSummary, SubmitError,
};

const USER_AGENT: &str = concat!("PawsRescue/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
}

/// Resolved server endpoints derived from the configured base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    #[must_use]
    pub fn upload_report(&self) -> String {
        format!("{}/upload-report", self.base)
    }

    #[must_use]
    pub fn reports(&self) -> String {
        format!("{}/reports", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_paths_onto_base() {
        let endpoints = Endpoints::new("http://localhost:8000");
        assert_eq!(
            endpoints.upload_report(),
            "http://localhost:8000/upload-report"
        );
        assert_eq!(endpoints.reports(), "http://localhost:8000/reports");
    }

    #[test]
    fn endpoints_strip_trailing_slashes() {
        let endpoints = Endpoints::new("http://rescue.example:9000//");
        assert_eq!(
            endpoints.upload_report(),
            "http://rescue.example:9000/upload-report"
        );
    }
}
