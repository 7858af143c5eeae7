//! 選択ファイルの検証
//!
//! MIMEタイプ → サイズの順にチェックし、最初に失敗した検証を返す

use crate::error::ValidationError;
use crate::types::{SelectedFile, MAX_UPLOAD_BYTES};

/// MIMEタイプとサイズを検証
///
/// # Examples
/// ```
/// use fruit_grader_common::{validate_metadata, ValidationError};
///
/// assert!(validate_metadata("image/png", 1024).is_ok());
/// assert_eq!(validate_metadata("text/plain", 1024), Err(ValidationError::NotAnImage));
/// ```
pub fn validate_metadata(media_type: &str, size: u64) -> Result<(), ValidationError> {
    if !media_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

/// 選択ファイルを検証
pub fn validate_file<B>(file: &SelectedFile<B>) -> Result<(), ValidationError> {
    validate_metadata(&file.media_type, file.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_image_types() {
        for media_type in ["image/jpeg", "image/png", "image/webp", "image/gif"] {
            assert!(validate_metadata(media_type, 10).is_ok(), "{}", media_type);
        }
    }

    #[test]
    fn test_rejects_non_image() {
        for media_type in ["text/plain", "application/pdf", "", "video/mp4", "IMAGE/PNG"] {
            assert_eq!(
                validate_metadata(media_type, 10),
                Err(ValidationError::NotAnImage),
                "{}",
                media_type
            );
        }
    }

    #[test]
    fn test_size_boundary() {
        assert!(validate_metadata("image/jpeg", MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_metadata("image/jpeg", MAX_UPLOAD_BYTES + 1),
            Err(ValidationError::TooLarge)
        );
        assert_eq!(MAX_UPLOAD_BYTES + 1, 5_242_881);
    }

    #[test]
    fn test_type_checked_before_size() {
        assert_eq!(
            validate_metadata("application/zip", MAX_UPLOAD_BYTES * 4),
            Err(ValidationError::NotAnImage)
        );
    }

    #[test]
    fn test_validate_file_uses_declared_size() {
        let file = SelectedFile::new("big.png", "image/png", 6 * 1024 * 1024, ());
        assert_eq!(validate_file(&file), Err(ValidationError::TooLarge));
    }
}
