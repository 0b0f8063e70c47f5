// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! One entrypoint translates every [`Message`] into state changes and side
//! effects. The photo-selection path is the busiest: it bumps the
//! classification sequence number, snapshots the coordinate, and fires the
//! preview decode and the classification call as independent tasks so
//! neither blocks the other.

use super::{App, Message, Screen};
use crate::api;
use crate::diagnostics::EventKind;
use crate::media::{self, ImageData, PHOTO_EXTENSIONS};
use crate::report::{self, DraftUpdate, SubmissionState};
use crate::ui::dashboard;
use crate::ui::form;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::PathBuf;

const MSG_NOT_A_PHOTO: &str = "Please choose a photo file (JPG, PNG, WEBP, or BMP).";
const MSG_PHOTO_UNREADABLE: &str = "Could not read the selected file.";
const MSG_PHOTO_UNDECODABLE: &str = "The selected file could not be read as an image.";
const MSG_ANALYSIS_DONE: &str = "Photo analyzed. Details filled in below.";
const MSG_SUBMITTED: &str = "🐾 Rescue request submitted!";

/// Processes a message and returns any follow-up task.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => match navbar::update(message) {
            navbar::Event::OpenReport => {
                app.screen = Screen::Report;
                Task::none()
            }
            navbar::Event::OpenDashboard => {
                app.screen = Screen::Dashboard;
                app.dashboard_reports = None;
                fetch_dashboard(app)
            }
            navbar::Event::OpenAbout => {
                app.screen = Screen::About;
                Task::none()
            }
        },

        Message::Form(message) => handle_form(app, message),

        Message::Dashboard(dashboard::Message::Refresh) => {
            app.dashboard_reports = None;
            fetch_dashboard(app)
        }

        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }

        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }

        Message::LocationSettled(state) => {
            if matches!(
                state,
                crate::location::LocationState::Resolved {
                    origin: crate::location::LocationOrigin::Default,
                    ..
                }
            ) {
                app.diagnostics.log(
                    EventKind::Geolocation,
                    "device position unavailable; using default coordinate",
                );
            }
            app.location.settle(state);
            Task::none()
        }

        Message::PhotoDialogResult(path) => handle_photo_picked(app, path),

        Message::PhotoLoaded { seq, result } => {
            // A later photo selection supersedes this decode.
            if seq != app.classification_seq {
                return Task::none();
            }
            match result {
                Ok(image) => app.draft.apply(DraftUpdate::Image(image)),
                Err(error) => {
                    app.diagnostics.log(EventKind::Media, error.to_string());
                    app.notifications
                        .push(Notification::error(MSG_PHOTO_UNDECODABLE));
                }
            }
            Task::none()
        }

        Message::ClassificationCompleted { seq, result } => {
            // Only responses for the current photo may touch the draft.
            if seq != app.classification_seq {
                return Task::none();
            }
            if app.submission == SubmissionState::Analyzing {
                app.submission = SubmissionState::Idle;
            }
            match result {
                Ok(classification) => {
                    app.draft.apply(api::prefill(&classification));
                    app.notifications
                        .push(Notification::success(MSG_ANALYSIS_DONE));
                }
                Err(error) => {
                    app.notifications.push(
                        Notification::error(error.to_string())
                            .with_kind(EventKind::Classification),
                    );
                }
            }
            Task::none()
        }

        Message::SubmissionCompleted(result) => match result {
            Ok(()) => {
                app.submission = SubmissionState::Succeeded;
                app.draft.clear();
                app.form_error = None;
                app.notifications.push(Notification::success(MSG_SUBMITTED));

                let display = app.success_display;
                Task::perform(
                    async move { tokio::time::sleep(display).await },
                    |()| Message::SuccessDisplayElapsed,
                )
            }
            Err(error) => {
                app.diagnostics
                    .log(EventKind::Submission, error.reason.clone());
                app.submission = SubmissionState::Failed(error.reason);
                app.notifications
                    .push(Notification::error(api::submit::MSG_SUBMIT_FAILED));
                Task::none()
            }
        },

        Message::SuccessDisplayElapsed => {
            if app.submission == SubmissionState::Succeeded {
                app.submission = SubmissionState::Idle;
            }
            Task::none()
        }

        Message::DashboardLoaded(result) => {
            match result {
                Ok(reports) => app.dashboard_reports = Some(reports),
                Err(error) => {
                    app.diagnostics
                        .log(EventKind::Dashboard, error.reason.clone());
                    app.notifications.push(Notification::error(error.to_string()));
                    if app.dashboard_reports.is_none() {
                        app.dashboard_reports = Some(Vec::new());
                    }
                }
            }
            Task::none()
        }
    }
}

fn handle_form(app: &mut App, message: form::Message) -> Task<Message> {
    match message {
        form::Message::PickPhoto => {
            // The draft must stay stable while a submission is in flight.
            if app.submission == SubmissionState::Submitting {
                return Task::none();
            }
            Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Photos", PHOTO_EXTENSIONS)
                        .set_title("Choose a photo of the animal")
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::PhotoDialogResult,
            )
        }
        form::Message::AnimalTypeChanged(value) => {
            app.draft.apply(DraftUpdate::AnimalType(value));
            Task::none()
        }
        form::Message::SeverityPicked(value) => {
            app.draft.apply(DraftUpdate::Severity(value));
            Task::none()
        }
        form::Message::DescriptionChanged(value) => {
            app.draft.apply(DraftUpdate::Description(value));
            Task::none()
        }
        form::Message::ContactNameChanged(value) => {
            app.draft.apply(DraftUpdate::ContactName(value));
            Task::none()
        }
        form::Message::ContactPhoneChanged(value) => {
            app.draft.apply(DraftUpdate::ContactPhone(value));
            Task::none()
        }
        form::Message::ContactEmailChanged(value) => {
            app.draft.apply(DraftUpdate::ContactEmail(value));
            Task::none()
        }
        form::Message::Submit => handle_submit(app),
    }
}

/// Validates the selected path, reads the file, and fires the preview decode
/// and the classification call as one batch.
fn handle_photo_picked(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    if app.submission == SubmissionState::Submitting {
        return Task::none();
    }

    if !media::is_photo_path(&path) {
        app.notifications
            .push(Notification::warning(MSG_NOT_A_PHOTO).with_kind(EventKind::Media));
        return Task::none();
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("photo")
        .to_string();

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) => {
            app.diagnostics.log(EventKind::Media, error.to_string());
            app.notifications
                .push(Notification::error(MSG_PHOTO_UNREADABLE));
            return Task::none();
        }
    };

    app.classification_seq += 1;
    let seq = app.classification_seq;
    // Snapshot: the classification uses whatever coordinate is known right
    // now, falling back to the default before the lookup settles.
    let coord = app.location.coordinate().unwrap_or(app.default_coord);
    app.submission = SubmissionState::Analyzing;
    app.form_error = None;

    let decode = {
        let bytes = bytes.clone();
        let file_name = file_name.clone();
        Task::perform(
            async move { ImageData::from_bytes(bytes, file_name) },
            move |result| Message::PhotoLoaded { seq, result },
        )
    };
    let classify = Task::perform(
        api::classify(
            app.client.clone(),
            app.endpoints.clone(),
            bytes,
            file_name,
            coord,
        ),
        move |result| Message::ClassificationCompleted { seq, result },
    );

    Task::batch([decode, classify])
}

fn handle_submit(app: &mut App) -> Task<Message> {
    if !app.submission.can_submit() {
        return Task::none();
    }

    app.submission = SubmissionState::Validating;
    if let Err(message) = report::validate(&app.draft, &app.location) {
        app.form_error = Some(message.to_string());
        app.submission = SubmissionState::Idle;
        return Task::none();
    }
    app.form_error = None;

    // validate() guarantees these are present.
    let (Some(image), Some(severity), Some(coord)) = (
        app.draft.image.clone(),
        app.draft.severity,
        app.location.coordinate(),
    ) else {
        app.submission = SubmissionState::Idle;
        return Task::none();
    };

    app.submission = SubmissionState::Submitting;

    let payload = api::ReportPayload {
        image: image.bytes().to_vec(),
        file_name: image.file_name().to_string(),
        animal: app.draft.animal_type.trim().to_string(),
        severity: severity.as_str().to_string(),
        description: app.draft.description.trim().to_string(),
        contact_name: app.draft.contact_name.trim().to_string(),
        contact_phone: app.draft.contact_phone.trim().to_string(),
        contact_email: app.draft.contact_email.trim().to_string(),
        coord,
    };

    Task::perform(
        api::submit_report(app.client.clone(), app.endpoints.clone(), payload),
        Message::SubmissionCompleted,
    )
}

fn fetch_dashboard(app: &App) -> Task<Message> {
    Task::perform(
        api::fetch_reports(app.client.clone(), app.endpoints.clone()),
        Message::DashboardLoaded,
    )
}
