// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Renders the tab row at the top of the window switching between the
//! report form, the live dashboard, and the about screen.

use crate::app::screen::Screen;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenReport,
    OpenDashboard,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenReport,
    OpenDashboard,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenReport => Event::OpenReport,
        Message::OpenDashboard => Event::OpenDashboard,
        Message::OpenAbout => Event::OpenAbout,
    }
}

/// Render the navigation bar.
pub fn view(ctx: &ViewContext) -> Element<'static, Message> {
    let row = Row::new()
        .spacing(8)
        .padding(10)
        .align_y(Vertical::Center)
        .push(tab(
            "Report",
            Message::OpenReport,
            ctx.active == Screen::Report,
        ))
        .push(tab(
            "Dashboard",
            Message::OpenDashboard,
            ctx.active == Screen::Dashboard,
        ))
        .push(tab("About", Message::OpenAbout, ctx.active == Screen::About));

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn tab(label: &'static str, message: Message, selected: bool) -> Element<'static, Message> {
    let widget = button(Text::new(label))
        .padding([6, 12])
        .style(move |theme, status| tab_style(theme, status, selected));

    let widget = if selected {
        widget
    } else {
        widget.on_press(message)
    };

    widget.into()
}

/// Style function for tab buttons.
fn tab_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let palette = theme.extended_palette();

    if selected {
        return button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };
    }

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
