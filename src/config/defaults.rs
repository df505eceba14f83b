// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Endpoints**: API and object storage base URLs
//! - **Check-ins**: Weekly goal and warning threshold
//! - **Notifications**: Toast display duration
//! - **Images**: Remote image cache size

use std::time::Duration;

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Default base URL of the check-in API (`/users`, `/upload`).
pub const DEFAULT_API_BASE_URL: &str = "https://exercise-app-backend-beryl.vercel.app/api";

/// Default public bucket URL that thumbnail and original paths are joined to.
pub const DEFAULT_STORAGE_BASE_URL: &str =
    "https://supabase-project.supabase.co/storage/v1/object/public/exercise-images";

// ==========================================================================
// Check-in Defaults
// ==========================================================================

/// Days in a check-in week, shown as the denominator of `weekCount/7`.
pub const DAYS_PER_WEEK: u32 = 7;

/// Users below this many check-ins in the current week get a warning badge.
pub const WARNING_THRESHOLD: u32 = 3;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a toast stays on screen without manual close.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Interval of the tick that drives toast auto-dismiss.
pub const TOAST_TICK_INTERVAL: Duration = Duration::from_millis(100);

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Default number of fetched images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Lower bound for the image cache so a bad config cannot disable it.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 8;

/// Upper bound for the image cache.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 1024;
