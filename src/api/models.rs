// SPDX-License-Identifier: MPL-2.0
//! Wire types exchanged with the check-in API.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;

/// Opaque user identifier.
///
/// The API may send it as a JSON string or number; it is sent back verbatim
/// as the `user_id` form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => UserId(text),
            Raw::Number(number) => UserId(number.to_string()),
        })
    }
}

/// Per-user weekly snapshot computed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    /// Distinct check-in days in the current week (0-7).
    #[serde(default, deserialize_with = "null_as_default")]
    pub week_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warning_count: u32,
    /// Storage path of the latest thumbnail.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub thumb_url: Option<String>,
    /// Storage path of the latest original photo.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|path| !path.trim().is_empty()))
}

/// A photo picked from disk, ready to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// MIME type sniffed from the file contents.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        image_rs::guess_format(&self.bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream")
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One `POST /upload` submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub user_id: UserId,
    pub image: ImageFile,
}
