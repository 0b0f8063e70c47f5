// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{Classification, ClassifyError, FetchError, ReportSummary, SubmitError};
use crate::error::Error;
use crate::location::LocationState;
use crate::media::ImageData;
use crate::ui::dashboard;
use crate::ui::form;
use crate::ui::navbar;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Form(form::Message),
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// The startup location lookup settled (device position or fallback).
    LocationSettled(LocationState),
    /// Result from the photo picker dialog.
    PhotoDialogResult(Option<PathBuf>),
    /// Result from decoding the selected photo for preview.
    ///
    /// Tagged with the classification sequence number active when the photo
    /// was picked, so results for replaced photos are dropped.
    PhotoLoaded {
        seq: u64,
        result: Result<ImageData, Error>,
    },
    /// Result from the AI classification call, tagged like [`Message::PhotoLoaded`].
    ClassificationCompleted {
        seq: u64,
        result: Result<Classification, ClassifyError>,
    },
    /// Result from submitting the report.
    SubmissionCompleted(Result<(), SubmitError>),
    /// The success banner display window ended.
    SuccessDisplayElapsed,
    /// Result from fetching the dashboard feed.
    DashboardLoaded(Result<Vec<ReportSummary>, FetchError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional server base URL override (takes precedence over the config).
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
