//! Image uploads embedded into the record as `data:` URIs.

use base64::Engine as _;
use std::path::Path;

use crate::utils::error::{PortfolioError, Result};

pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads an image from disk. The size is checked from metadata first so an
    /// oversized file is never read into memory.
    pub async fn from_path(path: impl AsRef<Path>, limit: u64) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let size = tokio::fs::metadata(path).await?.len();
        check_size(&file_name, size, limit)?;

        let bytes = tokio::fs::read(path).await?;
        Ok(Self { file_name, bytes })
    }

    pub fn mime_type(&self) -> &'static str {
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            Some("bmp") => "image/bmp",
            Some("ico") => "image/x-icon",
            Some("avif") => "image/avif",
            _ => "application/octet-stream",
        }
    }

    /// Encodes the upload as `data:{mime};base64,{payload}`.
    pub fn to_data_uri(&self, limit: u64) -> Result<String> {
        check_size(&self.file_name, self.bytes.len() as u64, limit)?;

        let payload = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        Ok(format!("data:{};base64,{}", self.mime_type(), payload))
    }
}

fn check_size(file_name: &str, size: u64, limit: u64) -> Result<()> {
    if size > limit {
        tracing::warn!("Rejected image '{}': {} bytes exceeds {} byte limit", file_name, size, limit);
        return Err(PortfolioError::ImageTooLargeError {
            file: file_name.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}
