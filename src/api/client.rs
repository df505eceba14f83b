// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the check-in API.

use super::models::{UploadRequest, User};
use super::upload::{classify_response, error_message};
use super::ApiError;
use reqwest::multipart::{Form, Part};
use reqwest::Url;

const USER_AGENT: &str = concat!("CheckinBoard/", env!("CARGO_PKG_VERSION"));

/// Client for `GET /users`, `POST /upload`, and public image downloads.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client rooted at `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{trimmed}: {e}")))?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetches the weekly snapshot of every user.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.get(self.endpoint("users")).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let users: Vec<User> =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        tracing::debug!(count = users.len(), "user list fetched");
        Ok(users)
    }

    /// Posts one check-in photo as `multipart/form-data` (`user_id`, `image`).
    pub async fn upload(&self, request: UploadRequest) -> Result<(), ApiError> {
        let UploadRequest { user_id, image } = request;
        let byte_count = image.len();

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.mime_type())?;
        let form = Form::new()
            .text("user_id", user_id.to_string())
            .part("image", part);

        tracing::info!(user_id = %user_id, bytes = byte_count, "uploading check-in");
        let response = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::info!(user_id = %user_id, status = status.as_u16(), "upload finished");

        classify_response(status.as_u16(), &body)
    }

    /// Downloads an image from public storage.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: None,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}
