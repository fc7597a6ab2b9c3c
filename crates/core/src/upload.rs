//! Image upload policy: what the server accepts and how stored files are
//! named.
//!
//! Validation happens before any byte is written. Both the declared MIME
//! type and the file extension must appear in the allow-list; requiring both
//! tokens makes a spoofed `Content-Type` alone insufficient.

use std::path::Path;

use rand::Rng;

/// Extensions (and `image/<ext>` MIME subtypes) accepted for upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Upload size ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Only image files are accepted (jpeg, jpg, png, gif, webp)")]
    DisallowedType,

    #[error("File exceeds the {} MiB upload limit", MAX_UPLOAD_BYTES / (1024 * 1024))]
    TooLarge,
}

/// Check an upload's declared MIME type, filename extension, and size
/// against the policy. Returns the normalized (lowercase) extension.
pub fn validate_image_upload(
    filename: &str,
    content_type: &str,
    size_bytes: usize,
) -> Result<String, UploadError> {
    let ext = extension_of(filename).ok_or(UploadError::DisallowedType)?;
    if !ALLOWED_IMAGE_TYPES.contains(&ext.as_str()) {
        return Err(UploadError::DisallowedType);
    }

    let subtype = content_type
        .strip_prefix("image/")
        .ok_or(UploadError::DisallowedType)?;
    if !ALLOWED_IMAGE_TYPES.contains(&subtype.to_ascii_lowercase().as_str()) {
        return Err(UploadError::DisallowedType);
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }

    Ok(ext)
}

/// Build a stored filename unique within the upload directory:
/// `<original stem>-<unix millis>-<random>.<ext>`.
///
/// The original stem is kept so uploads stay recognizable when browsing the
/// directory; the timestamp plus random suffix prevents collisions between
/// concurrent uploads of the same file.
pub fn unique_filename(original: &str, ext: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("upload");

    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

    format!("{stem}-{millis}-{suffix}.{ext}")
}

/// Lowercased extension of a filename, without the dot.
fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
