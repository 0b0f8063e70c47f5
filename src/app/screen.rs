// SPDX-License-Identifier: MPL-2.0
//! Screens available in the application.

/// Top-level screens reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The report form (default screen).
    #[default]
    Report,
    /// The live rescue-request feed.
    Dashboard,
    /// Application info and the recent-failure log.
    About,
}
