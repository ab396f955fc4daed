//! Cross-cutting error types.
//!
//! Transport and reconciliation errors live in `acad-client` and `acad-sync`.
//! A unified error is deferred to `acad-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any `acad` crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was missing or not a positive integer.
    #[error("invalid {field}: {value} (expected a positive id)")]
    InvalidId { field: &'static str, value: i64 },
}

/// Check that a server-assigned identifier is usable.
///
/// # Errors
///
/// Returns [`CoreError::InvalidId`] for zero or negative ids.
pub const fn require_id(field: &'static str, value: i64) -> Result<i64, CoreError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CoreError::InvalidId { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_pass() {
        assert_eq!(require_id("course_id", 42), Ok(42));
    }

    #[test]
    fn zero_and_negative_ids_fail() {
        assert_eq!(
            require_id("instructor_id", 0),
            Err(CoreError::InvalidId {
                field: "instructor_id",
                value: 0
            })
        );
        assert!(require_id("instructor_id", -3).is_err());
    }

    #[test]
    fn invalid_id_message_names_field() {
        let err = require_id("course_id", -1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid course_id: -1 (expected a positive id)"
        );
    }
}
