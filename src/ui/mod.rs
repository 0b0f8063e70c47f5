// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: the report form, the dashboard, the about screen,
//! app navigation, and toast notifications.

pub mod about;
pub mod dashboard;
pub mod form;
pub mod navbar;
pub mod notifications;
