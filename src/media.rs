//! Image attachment encoding
//!
//! Attachments are read from local storage and re-encoded as base64 data URIs
//! so they can travel inline in an `image_url` content block.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ChatError;

/// File extensions accepted as image attachments (lowercase).
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Read an image file and encode it as a `data:image/<ext>;base64,...` URI.
///
/// Fails fast with [`ChatError::UnsupportedFileType`] for any extension outside
/// the supported set; the check is case-insensitive.
pub fn image_data_uri(path: &Path) -> Result<String, ChatError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ChatError::UnsupportedFileType(ext));
    }

    let bytes = std::fs::read(path)?;
    let encoded = STANDARD.encode(bytes);
    Ok(format!("data:image/{ext};base64,{encoded}"))
}
