use std::io::ErrorKind;
use std::path::Path;

use crate::errors::AppError;

/// Reads the static preview image unmodified.
pub async fn read_image(path: &Path) -> Result<Vec<u8>, AppError> {
    tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(format!("Image {} not found", path.display())),
        _ => AppError::Internal(anyhow::anyhow!("Failed to read {}: {e}", path.display())),
    })
}

/// MIME type from the file extension.
pub fn image_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
