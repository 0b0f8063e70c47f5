// SPDX-License-Identifier: MPL-2.0
//! `paws_rescue` is a desktop client for reporting injured animals, built
//! with the Iced GUI framework.
//!
//! A reporter picks a photo, the photo is classified automatically to
//! pre-fill the report, and the completed report is submitted to the local
//! rescue service together with the reporter's location. A read-only
//! dashboard shows the live rescue-request feed.

#![doc(html_root_url = "https://docs.rs/paws_rescue/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod location;
pub mod media;
pub mod report;
pub mod ui;
