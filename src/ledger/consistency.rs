//! Cross-entity checks for the course/student relationship.
//!
//! Each student stores its half of the relationship as a list of course refs,
//! while each course stores only a seat count. These checks confirm the two
//! halves still agree.

use std::collections::{HashMap, HashSet};

use crate::error::LedgerError;
use crate::model::{CourseCode, StudentId};
use crate::registry::{CourseRegistry, StudentRegistry};

/// Verifies every relationship invariant and returns the first violation found.
///
/// - no student lists the same course twice
/// - every listed course exists in the course registry
/// - every course has `enrolled <= capacity`
/// - every course's `enrolled` equals the number of students listing it
pub fn audit(courses: &CourseRegistry, students: &StudentRegistry) -> Result<(), LedgerError> {
    let mut holders: HashMap<&CourseCode, u32> = HashMap::new();

    for student in students.iter() {
        let mut seen = HashSet::new();
        for course in student.registered_courses() {
            if !seen.insert(&course.code) {
                return Err(LedgerError::Inconsistent(format!(
                    "student {} lists course {} more than once",
                    student.id(),
                    course.code
                )));
            }
            if !courses.contains(&course.code) {
                return Err(LedgerError::Inconsistent(format!(
                    "student {} lists unknown course {}",
                    student.id(),
                    course.code
                )));
            }
            *holders.entry(&course.code).or_default() += 1;
        }
    }

    for course in courses.list_all() {
        if course.enrolled() > course.capacity() {
            return Err(LedgerError::Inconsistent(format!(
                "course {} has {} enrolled over capacity {}",
                course.code(),
                course.enrolled(),
                course.capacity()
            )));
        }
        let held = holders.get(course.code()).copied().unwrap_or(0);
        if held != course.enrolled() {
            return Err(LedgerError::Inconsistent(format!(
                "course {} counts {} enrolled but {} students list it",
                course.code(),
                course.enrolled(),
                held
            )));
        }
    }

    Ok(())
}

/// IDs of the students currently holding `code`, in student insertion order.
pub fn roster(students: &StudentRegistry, code: &CourseCode) -> Vec<StudentId> {
    students
        .iter()
        .filter(|s| s.is_registered(code))
        .map(|s| s.id().clone())
        .collect()
}
