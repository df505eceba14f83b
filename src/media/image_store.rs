// SPDX-License-Identifier: MPL-2.0
//! In-memory store of downloaded images.
//!
//! # Design
//!
//! - **URL-keyed**: one slot per public storage URL
//! - **LRU eviction**: least recently requested images are evicted first
//! - **Entry-bounded**: capacity comes from `storage.image_cache_entries`
//! - **Fetch once**: a URL that is loading or ready is never requested again;
//!   a failed one is retried on the next request
//! - **Explicit invalidation**: storage keys can be reused by a new upload, so
//!   callers drop stale URLs with [`ImageStore::invalidate`]
//!
//! # Usage
//!
//! ```ignore
//! if store.request(&url) {
//!     // spawn the download, then:
//!     store.complete(&url, result);
//! }
//! match store.get(&url) { Some(ImageSlot::Ready(handle)) => ..., _ => ... }
//! ```

use crate::api::ApiError;
use crate::config::DEFAULT_IMAGE_CACHE_ENTRIES;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// State of one remote image.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Download in flight.
    Loading,
    /// Decoded lazily by the renderer from these bytes.
    Ready(Handle),
    /// Last download failed.
    Failed,
}

/// Bounded map from image URL to its slot.
#[derive(Debug)]
pub struct ImageStore {
    cache: LruCache<String, ImageSlot>,
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

impl ImageStore {
    /// Creates a store holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading and returns `true` if a download should start.
    pub fn request(&mut self, url: &str) -> bool {
        let pending_or_ready = matches!(
            self.cache.get(url),
            Some(ImageSlot::Loading | ImageSlot::Ready(_))
        );
        if pending_or_ready {
            return false;
        }
        self.cache.put(url.to_string(), ImageSlot::Loading);
        true
    }

    /// Records the result of a download.
    pub fn complete(&mut self, url: &str, result: Result<Vec<u8>, ApiError>) {
        let slot = match result {
            Ok(bytes) => ImageSlot::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(url, error = %err, "image download failed");
                ImageSlot::Failed
            }
        };
        self.cache.put(url.to_string(), slot);
    }

    /// Forgets `url` so the next [`request`](Self::request) downloads it again.
    pub fn invalidate(&mut self, url: &str) {
        self.cache.pop(url);
    }

    /// Looks up `url` without changing its recency.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageSlot> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_starts_download() {
        let mut store = ImageStore::new(4);
        assert!(store.request("https://cdn/a.jpg"));
        assert!(matches!(store.get("https://cdn/a.jpg"), Some(ImageSlot::Loading)));
    }

    #[test]
    fn loading_or_ready_is_not_requested_twice() {
        let mut store = ImageStore::new(4);
        assert!(store.request("a"));
        assert!(!store.request("a"));

        store.complete("a", Ok(vec![1, 2, 3]));
        assert!(matches!(store.get("a"), Some(ImageSlot::Ready(_))));
        assert!(!store.request("a"));
    }

    #[test]
    fn failed_download_is_retried() {
        let mut store = ImageStore::new(4);
        store.request("a");
        store.complete("a", Err(ApiError::Transport("refused".into())));
        assert!(matches!(store.get("a"), Some(ImageSlot::Failed)));
        assert!(store.request("a"));
    }

    #[test]
    fn invalidated_ready_image_is_requested_again() {
        let mut store = ImageStore::new(4);
        store.request("a");
        store.complete("a", Ok(vec![1, 2, 3]));

        store.invalidate("a");
        assert!(store.get("a").is_none());
        assert!(store.request("a"));

        store.invalidate("never-seen");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn least_recently_requested_is_evicted() {
        let mut store = ImageStore::new(2);
        store.request("a");
        store.request("b");
        store.request("a"); // refreshes "a"
        store.request("c");

        assert_eq!(store.len(), 2);
        assert!(store.get("a").is_some());
        assert!(store.get("b").is_none());
        assert!(store.get("c").is_some());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut store = ImageStore::new(0);
        store.request("a");
        store.request("b");
        assert_eq!(store.len(), 1);
    }
}
