//! Free-text kind columns with a closed set of accepted values.

use crate::error::CoreError;

/// Valid `kind` values for customer requests.
pub const VALID_REQUEST_KINDS: &[&str] = &["test_drive", "inquiry", "finance"];

/// Valid `kind` values for media centre items.
pub const VALID_MEDIA_KINDS: &[&str] = &["image", "video"];

/// Validate that `kind` is an accepted request kind.
pub fn validate_request_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_REQUEST_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid request kind '{kind}'. Must be one of: {VALID_REQUEST_KINDS:?}"
        )))
    }
}

/// Validate that `kind` is an accepted media kind.
pub fn validate_media_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_MEDIA_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid media kind '{kind}'. Must be one of: {VALID_MEDIA_KINDS:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_kinds_pass() {
        for kind in VALID_REQUEST_KINDS {
            assert!(validate_request_kind(kind).is_ok());
        }
    }

    #[test]
    fn unknown_request_kind_is_rejected() {
        let err = validate_request_kind("warranty").unwrap_err();
        assert!(err.to_string().contains("warranty"));
    }

    #[test]
    fn unknown_media_kind_is_rejected() {
        assert!(validate_media_kind("audio").is_err());
        assert!(validate_media_kind("image").is_ok());
    }
}
