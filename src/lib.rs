// SPDX-License-Identifier: MPL-2.0
//! `checkin_board` is a small desktop client for weekly exercise check-ins,
//! built with the Iced GUI framework.
//!
//! Users pick their ID and a photo to check in for the day; the table shows
//! each user's weekly count, latest photo, and a warning badge when they are
//! behind. Strings are localized with Fluent and preferences live in a TOML
//! settings file.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
