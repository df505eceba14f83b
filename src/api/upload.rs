// SPDX-License-Identifier: MPL-2.0
//! Interpretation of `/upload` (and other) HTTP responses.

use super::ApiError;
use serde::Deserialize;

/// Body the server sends alongside a failed request.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Maps a response status and body to the upload outcome.
///
/// Any 2xx status is a success and the body is ignored. Otherwise the JSON
/// `error` field, if present and non-empty, becomes the message.
pub fn classify_response(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::Status {
        status,
        message: error_message(body),
    })
}

/// Extracts the `error` field from a JSON body; malformed bodies yield `None`.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}
