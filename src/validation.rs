//! Shared guards applied wherever a course or student is constructed.
//!
//! Identifiers arrive from the caller as plain strings. These checks run once at
//! construction so the rest of the ledger can treat codes and IDs as trusted keys.

use crate::error::LedgerError;
use crate::model::CourseCode;

/// Checks that an identifier is non-empty and free of whitespace.
///
/// `kind` names the identifier in the resulting error (e.g. `"course code"`).
pub fn validate_identifier(kind: &'static str, value: &str) -> Result<(), LedgerError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(LedgerError::InvalidIdentifier {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Checks that a course can hold at least one student.
pub fn validate_capacity(code: &CourseCode, capacity: u32) -> Result<(), LedgerError> {
    if capacity == 0 {
        return Err(LedgerError::InvalidCapacity {
            code: code.clone(),
            capacity,
        });
    }
    Ok(())
}
