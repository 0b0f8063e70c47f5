// SPDX-License-Identifier: MPL-2.0
//! The live rescue-request dashboard.
//!
//! Read-only list of submitted reports fetched from the server. The feed is
//! loaded when the screen opens and on explicit refresh; a fetch failure is
//! non-fatal and surfaces as a toast from the parent application.

use crate::api::ReportSummary;
use iced::widget::{button, container, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

const CARD_WIDTH: f32 = 420.0;

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
}

/// Render the dashboard.
///
/// `reports` is `None` while the first fetch is still in flight.
pub fn view(reports: Option<&[ReportSummary]>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(12)
        .max_width(CARD_WIDTH)
        .push(
            Row::new()
                .spacing(8)
                .align_y(alignment::Vertical::Center)
                .push(Text::new("🚑 Live Rescue Requests").size(24))
                .push(button(Text::new("Refresh")).on_press(Message::Refresh)),
        );

    match reports {
        None => {
            column = column.push(Text::new("Loading rescue requests…").size(14));
        }
        Some([]) => {
            column = column.push(Text::new("No rescue requests yet.").size(14));
        }
        Some(reports) => {
            for report in reports {
                column = column.push(card(report));
            }
        }
    }

    let body = Container::new(column)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(20);

    scrollable(body).into()
}

fn card(report: &ReportSummary) -> Element<'_, Message> {
    let mut lines = Column::new()
        .spacing(4)
        .push(Text::new(report.animal.clone()).size(16))
        .push(Text::new(format!("Severity: {}", report.severity)).size(13));

    if !report.status.is_empty() {
        lines = lines.push(Text::new(format!("Status: {}", report.status)).size(13));
    }
    if report.score > 0.0 {
        lines = lines.push(Text::new(format!("AI score: {:.2}", report.score)).size(13));
    }

    Container::new(lines)
        .width(Length::Fill)
        .padding(12)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: iced::Border {
                radius: 6.0.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_renders_while_loading() {
        let _element = view(None);
    }

    #[test]
    fn dashboard_renders_empty_feed() {
        let _element = view(Some(&[]));
    }

    #[test]
    fn dashboard_renders_reports() {
        let reports = vec![ReportSummary {
            id: 1,
            animal: "Dog".into(),
            severity: "Moderate".into(),
            score: 0.87,
            status: "Pending".into(),
        }];
        let _element = view(Some(&reports));
    }
}
