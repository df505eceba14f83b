// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `view` over borrowed state and, where it owns state, an `update`
//! returning an event for the parent.
//!
//! # Components
//!
//! - [`upload_form`] - User selector, photo picker and upload button
//! - [`checkin_table`] - Weekly counts, thumbnails and warning badges
//! - [`image_dialog`] - Modal viewer for the original photo
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod checkin_table;
pub mod design_tokens;
pub mod image_dialog;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod upload_form;
