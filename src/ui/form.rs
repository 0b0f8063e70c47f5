// SPDX-License-Identifier: MPL-2.0
//! The report form screen.
//!
//! Stateless view over the draft, the location state, and the submission
//! lifecycle. All interaction flows out as [`Message`] values; the parent
//! application owns the state and the side effects (photo dialog,
//! classification, submission).

use crate::location::{LocationOrigin, LocationState};
use crate::report::{ReportDraft, Severity, SubmissionState};
use iced::widget::{
    button, container, pick_list, scrollable, text, text_input, Column, Container, Image, Row,
    Text,
};
use iced::{alignment, Color, Element, Length, Theme};

const FORM_WIDTH: f32 = 480.0;
const PREVIEW_HEIGHT: f32 = 220.0;

/// Messages emitted by the report form.
#[derive(Debug, Clone)]
pub enum Message {
    PickPhoto,
    AnimalTypeChanged(String),
    SeverityPicked(Severity),
    DescriptionChanged(String),
    ContactNameChanged(String),
    ContactPhoneChanged(String),
    ContactEmailChanged(String),
    Submit,
}

/// Everything the form needs to render.
pub struct ViewContext<'a> {
    pub draft: &'a ReportDraft,
    pub location: &'a LocationState,
    pub submission: &'a SubmissionState,
    pub form_error: Option<&'a str>,
}

/// Render the report form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(12)
        .max_width(FORM_WIDTH)
        .push(Text::new("🚑 Report Injured Animal").size(24));

    column = column.push(photo_section(&ctx));
    column = column.push(location_line(ctx.location));

    column = column.push(labeled_input(
        "Animal type",
        "e.g. Dog",
        &ctx.draft.animal_type,
        Message::AnimalTypeChanged,
    ));

    let severity_picker = pick_list(
        &Severity::ALL[..],
        ctx.draft.severity,
        Message::SeverityPicked,
    )
    .placeholder("Select severity")
    .width(Length::Fill);
    column = column.push(
        Column::new()
            .spacing(4)
            .push(Text::new("Severity").size(13))
            .push(severity_picker),
    );

    column = column.push(labeled_input(
        "Description",
        "What happened?",
        &ctx.draft.description,
        Message::DescriptionChanged,
    ));
    column = column.push(labeled_input(
        "Your name",
        "Full name",
        &ctx.draft.contact_name,
        Message::ContactNameChanged,
    ));
    column = column.push(labeled_input(
        "Phone",
        "Phone number",
        &ctx.draft.contact_phone,
        Message::ContactPhoneChanged,
    ));
    column = column.push(labeled_input(
        "Email (optional)",
        "Email address",
        &ctx.draft.contact_email,
        Message::ContactEmailChanged,
    ));

    if let Some(error) = ctx.form_error {
        column = column.push(
            Text::new(error.to_string())
                .size(13)
                .color(Color::from_rgb(0.86, 0.21, 0.21)),
        );
    }

    column = column.push(submit_row(ctx.submission));

    if *ctx.submission == SubmissionState::Succeeded {
        column = column.push(
            Container::new(
                Text::new("🐾 Rescue request submitted!")
                    .size(16)
                    .color(Color::from_rgb(0.13, 0.65, 0.37)),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(8),
        );
    }

    let body = Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(20);

    scrollable(body).into()
}

/// Photo picker button, the preview, and the analysis indicator.
fn photo_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut section = Column::new().spacing(8);

    let pick_label = if ctx.draft.image.is_some() {
        "📷 Change Photo"
    } else {
        "📷 Upload Photo"
    };
    section = section.push(button(Text::new(pick_label)).on_press(Message::PickPhoto));

    if let Some(image) = &ctx.draft.image {
        section = section.push(
            Container::new(
                Image::new(image.handle.clone()).height(Length::Fixed(PREVIEW_HEIGHT)),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
    }

    if *ctx.submission == SubmissionState::Analyzing {
        section = section.push(
            Text::new("Analyzing photo…")
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    }

    section.into()
}

/// One-line location status under the photo section.
fn location_line(location: &LocationState) -> Element<'_, Message> {
    let (label, muted) = match location {
        LocationState::Detecting => ("Detecting location…", true),
        LocationState::Resolved {
            origin: LocationOrigin::Device,
            ..
        } => ("📍 Location auto-detected", false),
        LocationState::Resolved {
            origin: LocationOrigin::Default,
            ..
        } => ("📍 Using default location", false),
        LocationState::Unavailable => ("Location unavailable", true),
    };

    let widget = Text::new(label).size(13);
    let widget = if muted {
        widget.style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
    } else {
        widget
    };

    widget.into()
}

fn labeled_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(4)
        .push(Text::new(label).size(13))
        .push(
            text_input(placeholder, value)
                .on_input(on_input)
                .padding(8),
        )
        .into()
}

fn submit_row(submission: &SubmissionState) -> Element<'_, Message> {
    let label = if *submission == SubmissionState::Submitting {
        "Sending…"
    } else {
        "Send Rescue Alert"
    };

    let mut submit = button(Text::new(label)).padding([8, 16]);
    if submission.can_submit() {
        submit = submit.on_press(Message::Submit);
    }

    Row::new()
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .push(submit)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_ctx<'a>(
        draft: &'a ReportDraft,
        location: &'a LocationState,
        submission: &'a SubmissionState,
    ) -> ViewContext<'a> {
        ViewContext {
            draft,
            location,
            submission,
            form_error: None,
        }
    }

    #[test]
    fn form_renders_in_every_submission_state() {
        let draft = ReportDraft::default();
        let location = LocationState::Detecting;

        for submission in [
            SubmissionState::Idle,
            SubmissionState::Analyzing,
            SubmissionState::Validating,
            SubmissionState::Submitting,
            SubmissionState::Succeeded,
            SubmissionState::Failed("nope".into()),
        ] {
            let _element = view(base_ctx(&draft, &location, &submission));
        }
    }

    #[test]
    fn form_renders_with_an_error_message() {
        let draft = ReportDraft::default();
        let location = LocationState::Unavailable;
        let submission = SubmissionState::Idle;
        let mut ctx = base_ctx(&draft, &location, &submission);
        ctx.form_error = Some("Please upload an image of the animal.");
        let _element = view(ctx);
    }
}
