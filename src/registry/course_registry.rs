use std::collections::HashMap;
use std::fmt::Write;

use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::model::{Course, CourseCode};

/// Owning store of every [`Course`], keyed by course code.
///
/// Listing follows first-insertion order. A course that replaces an existing
/// code takes over the old one's slot.
#[derive(Debug, Default, Clone)]
pub struct CourseRegistry {
    store: HashMap<CourseCode, Course>,
    order: Vec<CourseCode>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `course`, replacing any course already stored under its code.
    ///
    /// Returns the displaced course together with its enrollment count.
    pub fn add(&mut self, course: Course) -> Option<Course> {
        let code = course.code().clone();
        let previous = self.store.insert(code.clone(), course);
        match &previous {
            Some(old) => warn!(%code, discarded_enrolled = old.enrolled(), "Course replaced"),
            None => {
                debug!(%code, size = self.store.len(), "Course added");
                self.order.push(code);
            }
        }
        previous
    }

    /// Inserts `course` only if its code is not taken yet.
    pub fn try_add(&mut self, course: Course) -> Result<(), LedgerError> {
        if self.store.contains_key(course.code()) {
            warn!(code = %course.code(), "Duplicate course rejected");
            return Err(LedgerError::DuplicateCourse(course.code().clone()));
        }
        self.add(course);
        Ok(())
    }

    pub fn get(&self, code: &CourseCode) -> Option<&Course> {
        self.store.get(code)
    }

    pub fn get_mut(&mut self, code: &CourseCode) -> Option<&mut Course> {
        self.store.get_mut(code)
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.store.contains_key(code)
    }

    /// Every course, in first-insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Course> + '_ {
        self.order.iter().filter_map(|code| self.store.get(code))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Renders the full catalogue, one course block per entry.
    pub fn display_courses(&self) -> String {
        let mut out = String::from("Available Courses:\n");
        for course in self.list_all() {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{course}");
        }
        out
    }
}
