//! Error types for the enrollment ledger.

use thiserror::Error;

use crate::model::{CourseCode, StudentId};

/// Errors surfaced at the registry and ledger boundary.
///
/// Full courses, duplicate registrations and drops of courses a student never
/// held are *not* errors. They come back as [`EnrollOutcome`](crate::model::EnrollOutcome)
/// and [`DropOutcome`](crate::model::DropOutcome) values instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// No student is registered under the given ID.
    #[error("Student with ID {0} not found.")]
    StudentNotFound(StudentId),

    /// No course is registered under the given code.
    #[error("Course with code {0} not found.")]
    CourseNotFound(CourseCode),

    /// A course with this code already exists and the ledger rejects duplicates.
    #[error("Course with code {0} already exists.")]
    DuplicateCourse(CourseCode),

    /// A student with this ID already exists and the ledger rejects duplicates.
    #[error("Student with ID {0} already exists.")]
    DuplicateStudent(StudentId),

    /// Course capacity must be a positive integer.
    #[error("Invalid capacity for course {code}: {capacity}")]
    InvalidCapacity { code: CourseCode, capacity: u32 },

    /// An identifier was empty or contained whitespace.
    #[error("Invalid {kind}: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// The course/student relationship no longer agrees with the seat counters.
    #[error("Ledger inconsistent: {0}")]
    Inconsistent(String),
}
