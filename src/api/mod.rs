// SPDX-License-Identifier: MPL-2.0
//! Remote check-in API and object storage access.
//!
//! - [`models`] - Wire types (`User`, `UserId`) and upload payloads
//! - [`client`] - `reqwest` adapter for `GET /users`, `POST /upload`, and image bytes
//! - [`upload`] - Maps an `/upload` HTTP response to an outcome
//! - [`storage`] - Builds public object URLs from stored paths
//!
//! All calls are plain `async fn`s; callers wrap them in an Iced `Task`.

pub mod client;
pub mod models;
pub mod storage;
pub mod upload;

pub use client::ApiClient;
pub use models::{ImageFile, UploadRequest, User, UserId};
pub use storage::StorageUrls;

/// Failures of a remote call.
///
/// `Clone` so results can be carried inside Iced messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status {
        status: u16,
        /// The `error` field of the JSON body, when present and non-empty.
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A configured base URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Returns the server-provided error message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(describe(&err));
        }
        ApiError::Transport(describe(&err))
    }
}

/// Flattens an error and its sources into one line.
fn describe(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
