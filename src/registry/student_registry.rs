use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::LedgerError;
use crate::model::{Course, DropOutcome, EnrollOutcome, Student, StudentId};

/// Confirmation produced once a student has been resolved.
///
/// The rendered message is the same whether or not the enrollment changed.
/// The `outcome` field tells the two cases apart for callers that care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Registered {
        student: String,
        course: String,
        outcome: EnrollOutcome,
    },
    Dropped {
        student: String,
        course: String,
        outcome: DropOutcome,
    },
}

impl Notice {
    /// Whether the underlying mutation actually took place.
    pub fn is_applied(&self) -> bool {
        match self {
            Notice::Registered { outcome, .. } => outcome.is_applied(),
            Notice::Dropped { outcome, .. } => outcome.is_applied(),
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Registered { student, course, .. } => {
                write!(f, "Student {student} has been registered for the course {course}.")
            }
            Notice::Dropped { student, course, .. } => {
                write!(f, "Student {student} has been dropped from the course {course}.")
            }
        }
    }
}

/// Owning store of every [`Student`], keyed by student ID.
///
/// Also the orchestration point for enroll/drop: the caller resolves the
/// [`Course`] and this registry applies the change to both sides.
#[derive(Debug, Default, Clone)]
pub struct StudentRegistry {
    store: HashMap<StudentId, Student>,
    order: Vec<StudentId>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `student`, replacing any student already stored under its ID.
    pub fn add(&mut self, student: Student) -> Option<Student> {
        let id = student.id().clone();
        let previous = self.store.insert(id.clone(), student);
        match &previous {
            Some(old) => warn!(
                %id,
                discarded_courses = old.registered_courses().len(),
                "Student replaced"
            ),
            None => {
                debug!(%id, size = self.store.len(), "Student added");
                self.order.push(id);
            }
        }
        previous
    }

    /// Inserts `student` only if its ID is not taken yet.
    pub fn try_add(&mut self, student: Student) -> Result<(), LedgerError> {
        if self.store.contains_key(student.id()) {
            warn!(id = %student.id(), "Duplicate student rejected");
            return Err(LedgerError::DuplicateStudent(student.id().clone()));
        }
        self.add(student);
        Ok(())
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.store.get(id)
    }

    pub fn get_mut(&mut self, id: &StudentId) -> Option<&mut Student> {
        self.store.get_mut(id)
    }

    /// Every student, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> + '_ {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Student> + '_ {
        self.store.values_mut()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Registers the student for `course`.
    ///
    /// # Errors
    /// [`LedgerError::StudentNotFound`] if no student has this ID. A full course or
    /// a repeated registration still yields `Ok`, with the outcome recorded in
    /// the returned [`Notice`].
    pub fn register_student_for_course(
        &mut self,
        id: &StudentId,
        course: &mut Course,
    ) -> Result<Notice, LedgerError> {
        let student = self.lookup_mut(id)?;
        let outcome = student.register_course(course);
        match outcome {
            EnrollOutcome::Applied => info!(
                student_id = %id,
                code = %course.code(),
                available = course.available_slots(),
                "Registered"
            ),
            _ => debug!(student_id = %id, code = %course.code(), ?outcome, "Register skipped"),
        }
        Ok(Notice::Registered {
            student: student.name().to_string(),
            course: course.title().to_string(),
            outcome,
        })
    }

    /// Drops the student from `course`.
    ///
    /// # Errors
    /// [`LedgerError::StudentNotFound`] if no student has this ID.
    pub fn drop_student_from_course(
        &mut self,
        id: &StudentId,
        course: &mut Course,
    ) -> Result<Notice, LedgerError> {
        let student = self.lookup_mut(id)?;
        let outcome = student.drop_course(course);
        match outcome {
            DropOutcome::Applied => info!(
                student_id = %id,
                code = %course.code(),
                available = course.available_slots(),
                "Dropped"
            ),
            DropOutcome::NotMember => {
                debug!(student_id = %id, code = %course.code(), ?outcome, "Drop skipped")
            }
        }
        Ok(Notice::Dropped {
            student: student.name().to_string(),
            course: course.title().to_string(),
            outcome,
        })
    }

    /// Renders the student's details, or reports that the ID is unknown.
    pub fn display_student_info(&self, id: &StudentId) -> Result<String, LedgerError> {
        match self.store.get(id) {
            Some(student) => Ok(student.to_display_string()),
            None => {
                warn!(student_id = %id, "Not found");
                Err(LedgerError::StudentNotFound(id.clone()))
            }
        }
    }

    fn lookup_mut(&mut self, id: &StudentId) -> Result<&mut Student, LedgerError> {
        match self.store.get_mut(id) {
            Some(student) => Ok(student),
            None => {
                warn!(student_id = %id, "Not found");
                Err(LedgerError::StudentNotFound(id.clone()))
            }
        }
    }
}
