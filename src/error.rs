// Error types shared by every record and billing module
// Two observable kinds: invalid content (Value) and out-of-range access (Index).
// Wrong-type assignment is a compile error in Rust, so no Type kind exists here.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, RecordError>;

// ============================================================================
// ERROR KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Right type, invalid content (non-alphabetic name, unknown category, ...)
    Value,
    /// Out-of-range bill index
    Index,
}

// ============================================================================
// RECORD ERROR
// ============================================================================

/// Validation and access errors raised by records and bills
///
/// Every failure is raised at the point of assignment or construction and
/// propagates to the caller unchanged; a failed setter leaves state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Name and specialty fields must be non-empty and purely alphabetic
    #[error("{field} must consist of alphabetic characters")]
    NotAlphabetic { field: &'static str },

    /// Year/month/day combination that no calendar contains
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Discharge must fall strictly after admission
    #[error("discharge date must be later than the admission date")]
    DischargeNotAfterAdmission,

    /// Category not present in the registry at the time of the call
    #[error("unknown charge category '{category}'; it must be one of: {allowed}")]
    UnknownCategory { category: String, allowed: String },

    /// Bill index past the end of the charge list
    #[error("charge index {index} is out of range for a bill with {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::IndexOutOfRange { .. } => ErrorKind::Index,
            _ => ErrorKind::Value,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let value_err = RecordError::NotAlphabetic { field: "first_name" };
        assert_eq!(value_err.kind(), ErrorKind::Value);

        let index_err = RecordError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(index_err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = RecordError::UnknownCategory {
            category: "spa".to_string(),
            allowed: "medicine, doctor, room".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("spa"));
        assert!(text.contains("medicine"));

        let err = RecordError::InvalidDate {
            year: 2022,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid calendar date: 2022-02-30");
    }
}
