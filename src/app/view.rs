// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, the active screen, and the toast overlay on top.

use super::{App, Message, Screen};
use crate::ui::about;
use crate::ui::dashboard;
use crate::ui::form::{self, ViewContext as FormViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Report => form::view(FormViewContext {
            draft: &app.draft,
            location: &app.location,
            submission: &app.submission,
            form_error: app.form_error.as_deref(),
        })
        .map(Message::Form),
        Screen::Dashboard => {
            dashboard::view(app.dashboard_reports.as_deref()).map(Message::Dashboard)
        }
        Screen::About => about::view(&app.diagnostics),
    };

    let navbar_view = navbar::view(&NavbarViewContext { active: app.screen }).map(Message::Navbar);

    let content = Column::new()
        .push(navbar_view)
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(&app.notifications).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
