//! Course entity and its seat counter.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::outcome::{DropOutcome, EnrollOutcome};
use crate::error::LedgerError;
use crate::validation::{validate_capacity, validate_identifier};

/// Type-safe identifier for Courses (e.g. `CS101`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseCode(pub String);

impl From<&str> for CourseCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for CourseCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload for creating a new course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreate {
    pub code: CourseCode,
    pub title: String,
    pub description: String,
    pub capacity: u32,
    pub schedule: String,
}

impl CourseCreate {
    pub fn new(
        code: impl Into<CourseCode>,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            capacity,
            schedule: schedule.into(),
        }
    }
}

/// A course offering with a fixed number of seats.
///
/// Courses are owned by [`CourseRegistry`](crate::registry::CourseRegistry).
/// The seat counter moves only through [`Course::enroll`] and
/// [`Course::drop_seat`], and always stays within `0..=capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    code: CourseCode,
    title: String,
    description: String,
    capacity: u32,
    schedule: String,
    enrolled: u32,
}

impl Course {
    /// Builds a course with no students enrolled.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidIdentifier`] for a blank code and
    /// [`LedgerError::InvalidCapacity`] for a capacity of zero.
    pub fn new(params: CourseCreate) -> Result<Self, LedgerError> {
        validate_identifier("course code", params.code.as_ref())?;
        validate_capacity(&params.code, params.capacity)?;
        Ok(Self {
            code: params.code,
            title: params.title,
            description: params.description,
            capacity: params.capacity,
            schedule: params.schedule,
            enrolled: 0,
        })
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn enrolled(&self) -> u32 {
        self.enrolled
    }

    pub fn available_slots(&self) -> u32 {
        self.capacity - self.enrolled
    }

    pub fn is_full(&self) -> bool {
        self.enrolled >= self.capacity
    }

    /// Takes one seat if any is free. A full course is left untouched.
    pub fn enroll(&mut self) -> EnrollOutcome {
        if self.enrolled < self.capacity {
            self.enrolled += 1;
            EnrollOutcome::Applied
        } else {
            EnrollOutcome::Full
        }
    }

    /// Releases one seat. The counter never goes below zero.
    pub fn drop_seat(&mut self) -> DropOutcome {
        if self.enrolled > 0 {
            self.enrolled -= 1;
            DropOutcome::Applied
        } else {
            DropOutcome::NotMember
        }
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course Code: {}", self.code)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Schedule: {}", self.schedule)?;
        writeln!(f, "Available Slots: {}", self.available_slots())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(capacity: u32) -> Course {
        Course::new(CourseCreate::new(
            "CS101",
            "Introduction to Computer Science",
            "Basics of CS",
            capacity,
            "Mon-Wed-Fri 10:00-11:00 AM",
        ))
        .unwrap()
    }

    #[test]
    fn test_new_course_is_empty() {
        let c = course(30);
        assert_eq!(c.enrolled(), 0);
        assert_eq!(c.available_slots(), 30);
        assert!(!c.is_full());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = Course::new(CourseCreate::new("CS101", "t", "d", 0, "s"));
        assert!(matches!(result, Err(LedgerError::InvalidCapacity { capacity: 0, .. })));
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let result = Course::new(CourseCreate::new("", "t", "d", 5, "s"));
        assert!(matches!(result, Err(LedgerError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_enroll_saturates_at_capacity() {
        let mut c = course(2);
        assert_eq!(c.enroll(), EnrollOutcome::Applied);
        assert_eq!(c.enroll(), EnrollOutcome::Applied);
        assert!(c.is_full());

        // Further calls are silent clamps
        assert_eq!(c.enroll(), EnrollOutcome::Full);
        assert_eq!(c.enrolled(), 2);
        assert_eq!(c.available_slots(), 0);
    }

    #[test]
    fn test_drop_saturates_at_zero() {
        let mut c = course(3);
        assert_eq!(c.drop_seat(), DropOutcome::NotMember);
        assert_eq!(c.enrolled(), 0);

        c.enroll();
        assert_eq!(c.drop_seat(), DropOutcome::Applied);
        assert_eq!(c.drop_seat(), DropOutcome::NotMember);
        assert_eq!(c.enrolled(), 0);
    }

    #[test]
    fn test_counter_stays_in_bounds_over_mixed_sequence() {
        let mut c = course(3);
        let script = [true, true, false, true, true, true, false, false, false, false, true];
        for enroll in script {
            if enroll {
                c.enroll();
            } else {
                c.drop_seat();
            }
            assert!(c.enrolled() <= c.capacity());
            assert_eq!(c.available_slots(), c.capacity() - c.enrolled());
        }
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut c = course(30);
        c.enroll();
        assert_eq!(
            c.to_display_string(),
            "Course Code: CS101\n\
             Title: Introduction to Computer Science\n\
             Description: Basics of CS\n\
             Capacity: 30\n\
             Schedule: Mon-Wed-Fri 10:00-11:00 AM\n\
             Available Slots: 29\n"
        );
    }
}
