//! File-to-payload encoder.
//!
//! Turns a locally selected image file into a self-describing
//! `data:<mime>;base64,<payload>` string, usable anywhere an image URL is.

use std::path::{Path, PathBuf};

use base64::Engine;

use crate::errors::AppError;
use crate::models::ImageSource;

/// Read and encode one file.
pub async fn encode_image_file(path: &Path) -> Result<ImageSource, AppError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| AppError::Media(format!("Failed to read {}: {}", path.display(), err)))?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);

    Ok(ImageSource::Embedded(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        payload
    )))
}

/// Encode a batch of files, preserving input order. Fails on the first
/// unreadable file; no partial result is returned.
pub async fn encode_image_files(paths: &[PathBuf]) -> Result<Vec<ImageSource>, AppError> {
    let mut encoded = Vec::with_capacity(paths.len());
    for path in paths {
        encoded.push(encode_image_file(path).await?);
    }
    Ok(encoded)
}
