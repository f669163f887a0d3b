//! Selection validation: the decision function for candidate files.
//!
//! [`validate`] is pure and total. It takes a candidate (or its absence) plus
//! the control's options and returns a [`ValidationResult`]; it never panics
//! and touches no I/O. Everything the control displays or reports downstream
//! derives from that result, so callers never compose error text themselves.
//!
//! # Decision Order
//!
//! First match wins:
//! 1. No candidate: an error only when the control is required
//! 2. Size strictly above the ceiling: [`ValidationError::TooLarge`]
//! 3. MIME type not in the allow-set: [`ValidationError::UnsupportedType`]
//! 4. Otherwise valid
//!
//! A candidate exactly at the size ceiling passes. MIME matching is exact
//! string equality, no wildcards.

use thiserror::Error;

use crate::models::options::rounded_megabytes;
use crate::models::{DropzoneOptions, FileHandle};

/// Why a candidate was rejected.
///
/// The messages are the user-facing text; hosts distinguish kinds only by
/// that text, so each variant carries everything its message needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    MissingRequired,

    #[error("File too big. Max size is {limit_mb}MB")]
    TooLarge {
        /// The configured ceiling in whole megabytes, rounded half-up
        limit_mb: u64,
    },

    #[error("Invalid file type")]
    UnsupportedType,
}

/// Outcome of checking one candidate against the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Rejected(ValidationError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Display text for a rejection, `None` when valid.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Rejected(error) => Some(error.to_string()),
        }
    }
}

/// Decide whether a candidate is acceptable under the given options.
///
/// `None` means no candidate: a clear request or an empty presentation.
pub fn validate(candidate: Option<&FileHandle>, options: &DropzoneOptions) -> ValidationResult {
    let Some(file) = candidate else {
        return if options.required {
            ValidationResult::Rejected(ValidationError::MissingRequired)
        } else {
            ValidationResult::Valid
        };
    };

    if file.size_bytes > options.max_size_bytes {
        return ValidationResult::Rejected(ValidationError::TooLarge {
            limit_mb: rounded_megabytes(options.max_size_bytes),
        });
    }

    if !options.allowed_mime_types.contains(file.mime_type.as_str()) {
        return ValidationResult::Rejected(ValidationError::UnsupportedType);
    }

    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(max_size_bytes: u64, required: bool) -> DropzoneOptions {
        DropzoneOptions {
            max_size_bytes,
            required,
            ..DropzoneOptions::default()
        }
    }

    #[test]
    fn test_absent_candidate_optional() {
        let result = validate(None, &options(1024, false));
        assert_eq!(result, ValidationResult::Valid);
        assert!(result.message().is_none());
    }

    #[test]
    fn test_absent_candidate_required() {
        let result = validate(None, &options(1024, true));
        assert_eq!(
            result,
            ValidationResult::Rejected(ValidationError::MissingRequired)
        );
        assert_eq!(result.message().as_deref(), Some("This field is required"));
    }

    #[test]
    fn test_valid_candidate() {
        let file = FileHandle::new("photo.png", 4_000_000, "image/png");
        assert_eq!(
            validate(Some(&file), &DropzoneOptions::default()),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_size_at_limit_passes() {
        let file = FileHandle::new("photo.png", 5_242_880, "image/png");
        assert_eq!(
            validate(Some(&file), &DropzoneOptions::default()),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_size_one_byte_over_limit_rejected() {
        let file = FileHandle::new("photo.png", 5_242_881, "image/png");
        assert_eq!(
            validate(Some(&file), &DropzoneOptions::default()),
            ValidationResult::Rejected(ValidationError::TooLarge { limit_mb: 5 })
        );
    }

    #[test]
    fn test_size_checked_before_type() {
        // Oversized AND wrong type: the size rejection wins
        let file = FileHandle::new("video.mp4", 50_000_000, "video/mp4");
        assert!(matches!(
            validate(Some(&file), &DropzoneOptions::default()),
            ValidationResult::Rejected(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_unlisted_type_rejected() {
        let file = FileHandle::new("notes.txt", 10, "text/plain");
        let result = validate(Some(&file), &DropzoneOptions::default());
        assert_eq!(
            result,
            ValidationResult::Rejected(ValidationError::UnsupportedType)
        );
        assert_eq!(result.message().as_deref(), Some("Invalid file type"));
    }

    #[test]
    fn test_mime_match_is_exact() {
        // Case differences and wildcards do not match
        let upper = FileHandle::new("photo.png", 10, "image/PNG");
        assert!(!validate(Some(&upper), &DropzoneOptions::default()).is_valid());

        let wildcard = FileHandle::new("photo.png", 10, "image/*");
        assert!(!validate(Some(&wildcard), &DropzoneOptions::default()).is_valid());
    }

    #[test]
    fn test_too_large_message_rounds_limit() {
        let file = FileHandle::new("big.pdf", 2_000_000, "application/pdf");

        let result = validate(Some(&file), &options(1_048_576, false));
        assert_eq!(
            result.message().as_deref(),
            Some("File too big. Max size is 1MB")
        );

        // A sub-megabyte ceiling renders as 0MB
        let result = validate(Some(&file), &options(500_000, false));
        assert_eq!(
            result.message().as_deref(),
            Some("File too big. Max size is 0MB")
        );

        // Half a megabyte above a whole number rounds up
        let result = validate(Some(&file), &options(1_572_864, false));
        assert_eq!(
            result.message().as_deref(),
            Some("File too big. Max size is 2MB")
        );
    }

    #[test]
    fn test_required_does_not_affect_present_candidates() {
        let file = FileHandle::new("photo.png", 10, "image/png");
        let mut opts = DropzoneOptions::default();
        opts.required = true;
        assert_eq!(validate(Some(&file), &opts), ValidationResult::Valid);
    }
}
