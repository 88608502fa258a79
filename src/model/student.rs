//! Student entity and its enrollment set.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::course::{Course, CourseCode};
use super::outcome::{DropOutcome, EnrollOutcome};
use crate::error::LedgerError;
use crate::validation::validate_identifier;

/// Type-safe identifier for Students (e.g. `S1001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload for creating a new student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreate {
    pub id: StudentId,
    pub name: String,
}

impl StudentCreate {
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Non-owning handle on a course held by the course registry.
///
/// Only the code and title are kept, which is everything a student needs to
/// identify and display the course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub code: CourseCode,
    pub title: String,
}

impl From<&Course> for CourseRef {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().clone(),
            title: course.title().to_string(),
        }
    }
}

/// A registered student and the courses they currently hold.
///
/// A course appears at most once in `courses`, and each entry corresponds
/// to exactly one seat taken on that course.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    courses: Vec<CourseRef>,
}

impl Student {
    pub fn new(params: StudentCreate) -> Result<Self, LedgerError> {
        validate_identifier("student ID", params.id.as_ref())?;
        Ok(Self {
            id: params.id,
            name: params.name,
            courses: Vec::new(),
        })
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolled courses in the order they were registered.
    pub fn registered_courses(&self) -> &[CourseRef] {
        &self.courses
    }

    pub fn is_registered(&self, code: &CourseCode) -> bool {
        self.courses.iter().any(|c| &c.code == code)
    }

    /// Joins `course` unless already a member or the course is full.
    ///
    /// Both halves of the relationship move together: the membership is
    /// recorded and a seat is taken, or neither happens.
    pub fn register_course(&mut self, course: &mut Course) -> EnrollOutcome {
        if self.is_registered(course.code()) {
            return EnrollOutcome::AlreadyMember;
        }
        if course.available_slots() == 0 {
            return EnrollOutcome::Full;
        }
        let outcome = course.enroll();
        if outcome.is_applied() {
            self.courses.push(CourseRef::from(&*course));
        }
        outcome
    }

    /// Leaves `course` if currently a member, releasing the seat.
    pub fn drop_course(&mut self, course: &mut Course) -> DropOutcome {
        match self.position(course.code()) {
            Some(index) => {
                self.courses.remove(index);
                course.drop_seat();
                DropOutcome::Applied
            }
            None => DropOutcome::NotMember,
        }
    }

    /// Removes a membership without touching any seat counter.
    ///
    /// Used by the ledger when the course behind `code` has been replaced and
    /// its seat count discarded.
    pub(crate) fn forget_course(&mut self, code: &CourseCode) -> bool {
        match self.position(code) {
            Some(index) => {
                self.courses.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn position(&self, code: &CourseCode) -> Option<usize> {
        self.courses.iter().position(|c| &c.code == code)
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Registered Courses:")?;
        for course in &self.courses {
            writeln!(f, "{} ({})", course.title, course.code)?;
        }
        Ok(())
    }
}
