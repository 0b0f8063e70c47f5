// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the report draft, the location resolver,
//! the classification pipeline, and the dashboard feed, and translates
//! messages into side effects like HTTP calls and the photo dialog. Policy
//! decisions (submission gating, stale-response discarding, the success
//! display window) live close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{self, Endpoints, ReportSummary};
use crate::config;
use crate::diagnostics::DiagnosticsHandle;
use crate::location::{self, Coordinate, LocationState};
use crate::report::{ReportDraft, SubmissionState};
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    client: reqwest::Client,
    endpoints: Endpoints,
    /// Lifecycle of the startup location lookup.
    location: LocationState,
    /// The in-progress report.
    draft: ReportDraft,
    submission: SubmissionState,
    /// Current validation message, shown inline under the form.
    form_error: Option<String>,
    /// Monotonic counter tagging classification calls; responses carrying an
    /// older value are discarded.
    classification_seq: u64,
    /// Dashboard feed; `None` while a fetch is in flight.
    dashboard_reports: Option<Vec<ReportSummary>>,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsHandle,
    /// Fallback coordinate for classification snapshots and the location
    /// resolver.
    default_coord: Coordinate,
    /// How long the success banner stays up before reverting to idle.
    success_display: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("submission", &self.submission)
            .field("location", &self.location)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Report,
            client: reqwest::Client::default(),
            endpoints: Endpoints::new(config::DEFAULT_SERVER_URL),
            location: LocationState::Detecting,
            draft: ReportDraft::default(),
            submission: SubmissionState::Idle,
            form_error: None,
            classification_seq: 0,
            dashboard_reports: None,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsHandle::new(),
            default_coord: Coordinate {
                lat: config::DEFAULT_LAT,
                lng: config::DEFAULT_LNG,
            },
            success_display: Duration::from_secs(config::DEFAULT_SUCCESS_DISPLAY_SECS),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the location lookup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (cfg, config_warning) = match &flags.config_dir {
            Some(dir) => match config::load_from_path(&PathBuf::from(dir).join("settings.toml")) {
                Ok(cfg) => (cfg, None),
                Err(_) => (
                    config::Config::default(),
                    Some("Could not load settings; using defaults."),
                ),
            },
            None => match config::load() {
                Ok(cfg) => (cfg, None),
                Err(_) => (
                    config::Config::default(),
                    Some("Could not load settings; using defaults."),
                ),
            },
        };

        let server_url = flags
            .endpoint
            .clone()
            .or(cfg.server_url)
            .unwrap_or_else(|| config::DEFAULT_SERVER_URL.to_string());
        let default_coord = Coordinate {
            lat: cfg.default_lat.unwrap_or(config::DEFAULT_LAT),
            lng: cfg.default_lng.unwrap_or(config::DEFAULT_LNG),
        };
        let geolocation_url = cfg
            .geolocation_url
            .unwrap_or_else(|| config::DEFAULT_GEOLOCATION_URL.to_string());
        let wait = Duration::from_secs(
            cfg.geolocation_timeout_secs
                .unwrap_or(config::DEFAULT_GEOLOCATION_TIMEOUT_SECS),
        );
        let success_display = Duration::from_secs(
            cfg.success_display_secs
                .unwrap_or(config::DEFAULT_SUCCESS_DISPLAY_SECS),
        );

        let client = api::build_client().unwrap_or_default();
        let diagnostics = DiagnosticsHandle::new();
        let mut app_notifications = notifications::Manager::new();
        app_notifications.set_diagnostics(diagnostics.clone());

        let mut app = App {
            client: client.clone(),
            endpoints: Endpoints::new(server_url),
            notifications: app_notifications,
            diagnostics,
            default_coord,
            success_display,
            ..Self::default()
        };

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        let lookup = location::lookup_device_position(client, geolocation_url);
        let task = Task::perform(
            location::resolve(lookup, default_coord, wait),
            Message::LocationSettled,
        );

        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        "PawsRescue".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }
}
