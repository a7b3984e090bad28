//! Client-side upload validation.
//!
//! Rejections happen before any network call is made.

use std::path::Path;

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Declared MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// User-visible rejection of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported file type '{0}'. Please choose a PNG or JPEG image.")]
    UnsupportedType(String),

    #[error("File is too large ({0} bytes). The limit is 10 MiB.")]
    TooLarge(u64),
}

/// Declared MIME type for a file, derived from its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Validate a candidate upload against the type allow-list and size cap.
///
/// Returns the accepted MIME type so callers cannot proceed with an
/// unvalidated one.
pub fn validate_upload(
    declared_mime: Option<&str>,
    size_bytes: u64,
) -> Result<&str, ValidationError> {
    let mime = match declared_mime {
        Some(mime) if ALLOWED_MIME_TYPES.contains(&mime) => mime,
        Some(other) => return Err(ValidationError::UnsupportedType(other.to_string())),
        None => return Err(ValidationError::UnsupportedType("unknown".to_string())),
    };

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge(size_bytes));
    }

    Ok(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_and_jpeg_pass() {
        assert_eq!(validate_upload(Some("image/png"), 2048), Ok("image/png"));
        assert_eq!(validate_upload(Some("image/jpeg"), 2048), Ok("image/jpeg"));
    }

    #[test]
    fn test_other_types_rejected() {
        assert_eq!(
            validate_upload(Some("image/gif"), 2048),
            Err(ValidationError::UnsupportedType("image/gif".to_string()))
        );
        assert_eq!(
            validate_upload(None, 2048),
            Err(ValidationError::UnsupportedType("unknown".to_string()))
        );
    }

    #[test]
    fn test_size_cap_is_inclusive() {
        assert!(validate_upload(Some("image/png"), MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload(Some("image/png"), MAX_UPLOAD_BYTES + 1),
            Err(ValidationError::TooLarge(MAX_UPLOAD_BYTES + 1))
        );
    }

    #[test]
    fn test_mime_for_path_extensions() {
        assert_eq!(mime_for_path(Path::new("scan.png")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("scan.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("scan.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("scan.gif")), None);
        assert_eq!(mime_for_path(Path::new("scan")), None);
    }
}
