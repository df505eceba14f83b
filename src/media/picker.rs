// SPDX-License-Identifier: MPL-2.0
//! Native file dialog for choosing the check-in photo.

use crate::api::ImageFile;
use crate::error::{Error, Result};
use std::path::Path;

/// Extensions offered by the photo picker.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic"];

/// Opens the file dialog and reads the chosen file.
///
/// Returns `Ok(None)` when the dialog is cancelled.
pub async fn pick_image(filter_name: String) -> Result<Option<ImageFile>> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .add_filter(filter_name, &IMAGE_EXTENSIONS)
        .pick_file()
        .await
    else {
        return Ok(None);
    };

    read_image(handle.path()).await.map(Some)
}

/// Reads `path` into an [`ImageFile`] named after its file name.
pub async fn read_image(path: &Path) -> Result<ImageFile> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to read photo");
        Error::from(e)
    })?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(ImageFile::new(name, bytes))
}
