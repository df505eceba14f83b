// SPDX-License-Identifier: MPL-2.0
//! Public object storage URLs.

/// Joins stored object paths onto the public bucket URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUrls {
    base: String,
}

impl StorageUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Returns `{base}/{path}`.
    #[must_use]
    pub fn object_url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_slash() {
        let urls = StorageUrls::new("https://cdn.example.com/bucket/");
        assert_eq!(
            urls.object_url("/thumbs/a.jpg"),
            "https://cdn.example.com/bucket/thumbs/a.jpg"
        );
        assert_eq!(
            urls.object_url("images/a.jpg"),
            "https://cdn.example.com/bucket/images/a.jpg"
        );
    }
}
