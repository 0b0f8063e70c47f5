// SPDX-License-Identifier: MPL-2.0
//! The about screen.
//!
//! Static application information plus the recent-failure log kept by the
//! diagnostics buffer. Purely informational; emits no messages.

use crate::diagnostics::{DiagnosticsHandle, EventKind};
use iced::widget::{container, scrollable, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

const ABOUT_WIDTH: f32 = 480.0;

/// Render the about screen.
pub fn view<'a, M: 'a>(diagnostics: &DiagnosticsHandle) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(12)
        .max_width(ABOUT_WIDTH)
        .push(Text::new("PawsRescue").size(24))
        .push(Text::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).size(13))
        .push(
            Text::new(
                "Report injured animals with a photo. The photo is analyzed \
                 automatically and a rescue request is sent to the local rescue \
                 service together with your location.",
            )
            .size(14),
        );

    let events = diagnostics.snapshot();
    column = column.push(Text::new("Recent issues").size(16));

    if events.is_empty() {
        column = column.push(Text::new("No issues recorded.").size(13));
    } else {
        let mut log = Column::new().spacing(4);
        // Newest first.
        for event in events.iter().rev() {
            log = log.push(
                Text::new(format!("[{}] {}", kind_label(event.kind), event.message)).size(12),
            );
        }
        column = column.push(
            Container::new(log)
                .width(Length::Fill)
                .padding(10)
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

    let body = Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(20);

    scrollable(body).into()
}

fn kind_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Geolocation => "location",
        EventKind::Classification => "analysis",
        EventKind::Submission => "submission",
        EventKind::Dashboard => "dashboard",
        EventKind::Media => "photo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_renders_with_empty_log() {
        let diagnostics = DiagnosticsHandle::new();
        let _element: Element<'_, ()> = view(&diagnostics);
    }

    #[test]
    fn about_renders_with_recorded_events() {
        let diagnostics = DiagnosticsHandle::new();
        diagnostics.log(EventKind::Geolocation, "lookup timed out");
        diagnostics.log(EventKind::Submission, "HTTP status 500");
        let _element: Element<'_, ()> = view(&diagnostics);
    }
}
