// SPDX-License-Identifier: MPL-2.0
//! The report draft, its single update entry point, and submit-time
//! validation.
//!
//! The draft is one aggregate rather than scattered per-field state so the
//! last-write-wins rules and the fixed validation order have a single place
//! to hold. Only two writers touch it: user input handlers and the
//! classifier prefill, both going through [`ReportDraft::apply`].

use crate::location::LocationState;
use crate::media::ImageData;
use std::fmt;

/// The form's severity vocabulary. `High` exists only here; the classifier
/// never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-progress, user-editable report.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub image: Option<ImageData>,
    pub animal_type: String,
    pub severity: Option<Severity>,
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// The only way to mutate a draft.
#[derive(Debug, Clone)]
pub enum DraftUpdate {
    Image(ImageData),
    AnimalType(String),
    Severity(Severity),
    Description(String),
    ContactName(String),
    ContactPhone(String),
    ContactEmail(String),
    /// Classifier prefill: animal type, mapped severity, and description in
    /// one shot. A `None` severity leaves the field for manual selection.
    Prefill {
        animal_type: String,
        severity: Option<Severity>,
        description: String,
    },
}

impl ReportDraft {
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Image(image) => self.image = Some(image),
            DraftUpdate::AnimalType(value) => self.animal_type = value,
            DraftUpdate::Severity(value) => self.severity = Some(value),
            DraftUpdate::Description(value) => self.description = value,
            DraftUpdate::ContactName(value) => self.contact_name = value,
            DraftUpdate::ContactPhone(value) => self.contact_phone = value,
            DraftUpdate::ContactEmail(value) => self.contact_email = value,
            DraftUpdate::Prefill {
                animal_type,
                severity,
                description,
            } => {
                self.animal_type = animal_type;
                self.severity = severity;
                self.description = description;
            }
        }
    }

    /// Resets the draft to its empty initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub const MSG_IMAGE_REQUIRED: &str = "Please upload an image of the animal.";
pub const MSG_ANIMAL_TYPE_REQUIRED: &str = "Please enter the animal type.";
pub const MSG_SEVERITY_REQUIRED: &str = "Please select the severity level.";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Please enter a description.";
pub const MSG_CONTACT_NAME_REQUIRED: &str = "Please enter your name.";
pub const MSG_CONTACT_PHONE_REQUIRED: &str = "Please enter your phone number.";
pub const MSG_LOCATION_REQUIRED: &str =
    "Location is not available yet. Please try again in a moment.";

/// Validates a draft for submission.
///
/// Runs in a fixed order and stops at the first failure so exactly one
/// message is shown at a time. Contact email is always optional.
pub fn validate(draft: &ReportDraft, location: &LocationState) -> Result<(), &'static str> {
    if draft.image.is_none() {
        return Err(MSG_IMAGE_REQUIRED);
    }
    if draft.animal_type.trim().is_empty() {
        return Err(MSG_ANIMAL_TYPE_REQUIRED);
    }
    if draft.severity.is_none() {
        return Err(MSG_SEVERITY_REQUIRED);
    }
    if draft.description.trim().is_empty() {
        return Err(MSG_DESCRIPTION_REQUIRED);
    }
    if draft.contact_name.trim().is_empty() {
        return Err(MSG_CONTACT_NAME_REQUIRED);
    }
    if draft.contact_phone.trim().is_empty() {
        return Err(MSG_CONTACT_PHONE_REQUIRED);
    }
    if location.coordinate().is_none() {
        return Err(MSG_LOCATION_REQUIRED);
    }
    Ok(())
}

/// Lifecycle of a report submission.
///
/// `Analyzing` is entered only while a classification call is in flight;
/// `Submitting`, `Succeeded` and `Failed` only after an explicit submit.
/// `Succeeded` auto-reverts to `Idle` once the success display window ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Analyzing,
    Validating,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    /// A submission may only start from `Idle` or from a previous failure
    /// (retry). Re-entry while `Submitting` is a no-op, and a pending
    /// analysis must settle first.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }
}
