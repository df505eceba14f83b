// SPDX-License-Identifier: MPL-2.0
//! Photos: picking the local one to upload, and caching the remote ones shown.

pub mod image_store;
pub mod picker;

pub use image_store::{ImageSlot, ImageStore};
pub use picker::pick_image;
