//! # Ledger Context
//!
//! [`Ledger`] is the explicitly constructed context that owns one
//! [`CourseRegistry`] and one [`StudentRegistry`] for the life of a run.
//! Callers pass plain codes and IDs; the ledger resolves them and hands the
//! resolved course to the student registry, the way a shell would.
//!
//! ## Replacing entities
//!
//! Under [`DuplicatePolicy::Replace`] a re-added course or student displaces
//! the stored one. The ledger cleans up both halves of the relationship when
//! that happens:
//!
//! - a replaced **course** starts at zero enrolled, and its code is removed from
//!   every student that listed it
//! - a replaced **student** gives back every seat it held before the new
//!   student is stored
//!
//! So [`Ledger::audit`] holds after every operation.

pub mod consistency;

use tracing::{debug, warn};

use crate::config::{DuplicatePolicy, LedgerConfig};
use crate::error::LedgerError;
use crate::model::{Course, CourseCode, CourseCreate, Student, StudentCreate, StudentId};
use crate::registry::{CourseRegistry, Notice, StudentRegistry};

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    config: LedgerConfig,
    courses: CourseRegistry,
    students: StudentRegistry,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            courses: CourseRegistry::new(),
            students: StudentRegistry::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn courses(&self) -> &CourseRegistry {
        &self.courses
    }

    pub fn students(&self) -> &StudentRegistry {
        &self.students
    }

    pub fn course(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    /// Adds a course according to the configured [`DuplicatePolicy`].
    pub fn add_course(&mut self, params: CourseCreate) -> Result<(), LedgerError> {
        let course = Course::new(params)?;
        match self.config.duplicate_policy {
            DuplicatePolicy::Reject => self.courses.try_add(course)?,
            DuplicatePolicy::Replace => {
                let code = course.code().clone();
                if self.courses.add(course).is_some() {
                    let released = self
                        .students
                        .iter_mut()
                        .map(|s| s.forget_course(&code))
                        .filter(|&forgot| forgot)
                        .count();
                    debug!(%code, released, "Memberships cleared for replaced course");
                }
            }
        }
        self.check();
        Ok(())
    }

    /// Adds a student according to the configured [`DuplicatePolicy`].
    pub fn add_student(&mut self, params: StudentCreate) -> Result<(), LedgerError> {
        let student = Student::new(params)?;
        match self.config.duplicate_policy {
            DuplicatePolicy::Reject => self.students.try_add(student)?,
            DuplicatePolicy::Replace => {
                if let Some(old) = self.students.add(student) {
                    for held in old.registered_courses() {
                        if let Some(course) = self.courses.get_mut(&held.code) {
                            course.drop_seat();
                        }
                    }
                    debug!(
                        id = %old.id(),
                        released = old.registered_courses().len(),
                        "Seats released for replaced student"
                    );
                }
            }
        }
        self.check();
        Ok(())
    }

    /// Resolves `code` and registers student `id` for it.
    ///
    /// # Errors
    /// [`LedgerError::CourseNotFound`] is checked first, then
    /// [`LedgerError::StudentNotFound`]. A full course or a repeated
    /// registration yields `Ok` with the outcome inside the [`Notice`].
    pub fn register_student_for_course(
        &mut self,
        id: &StudentId,
        code: &CourseCode,
    ) -> Result<Notice, LedgerError> {
        let course = resolve_course(&mut self.courses, code)?;
        let notice = self.students.register_student_for_course(id, course)?;
        self.check();
        Ok(notice)
    }

    /// Resolves `code` and drops student `id` from it.
    pub fn drop_student_from_course(
        &mut self,
        id: &StudentId,
        code: &CourseCode,
    ) -> Result<Notice, LedgerError> {
        let course = resolve_course(&mut self.courses, code)?;
        let notice = self.students.drop_student_from_course(id, course)?;
        self.check();
        Ok(notice)
    }

    pub fn display_courses(&self) -> String {
        self.courses.display_courses()
    }

    pub fn display_student_info(&self, id: &StudentId) -> Result<String, LedgerError> {
        self.students.display_student_info(id)
    }

    /// Students currently enrolled in `code`.
    pub fn roster(&self, code: &CourseCode) -> Result<Vec<StudentId>, LedgerError> {
        if !self.courses.contains(code) {
            return Err(LedgerError::CourseNotFound(code.clone()));
        }
        Ok(consistency::roster(&self.students, code))
    }

    /// Checks that seat counters and memberships agree everywhere.
    pub fn audit(&self) -> Result<(), LedgerError> {
        consistency::audit(&self.courses, &self.students)
    }

    fn check(&self) {
        debug_assert!(
            self.audit().is_ok(),
            "ledger invariant broken: {:?}",
            self.audit()
        );
    }
}

fn resolve_course<'a>(
    courses: &'a mut CourseRegistry,
    code: &CourseCode,
) -> Result<&'a mut Course, LedgerError> {
    match courses.get_mut(code) {
        Some(course) => Ok(course),
        None => {
            warn!(%code, "Not found");
            Err(LedgerError::CourseNotFound(code.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DropOutcome, EnrollOutcome};

    fn seeded(policy: DuplicatePolicy) -> Ledger {
        let mut ledger = Ledger::new(LedgerConfig {
            duplicate_policy: policy,
            ..LedgerConfig::default()
        });
        ledger
            .add_course(CourseCreate::new("CS101", "Introduction to Computer Science", "Basics of CS", 30, "MWF"))
            .unwrap();
        ledger
            .add_course(CourseCreate::new("SEM1", "Seminar", "Small group", 1, "Fri"))
            .unwrap();
        ledger.add_student(StudentCreate::new("S1001", "John Doe")).unwrap();
        ledger.add_student(StudentCreate::new("S1002", "Jane Smith")).unwrap();
        ledger
    }

    fn ids() -> (StudentId, StudentId, CourseCode, CourseCode) {
        (
            StudentId::from("S1001"),
            StudentId::from("S1002"),
            CourseCode::from("CS101"),
            CourseCode::from("SEM1"),
        )
    }

    #[test]
    fn test_register_and_drop_by_identifier() {
        let mut ledger = seeded(DuplicatePolicy::Replace);
        let (john, _, cs, _) = ids();

        ledger.register_student_for_course(&john, &cs).unwrap();
        assert_eq!(ledger.course(&cs).unwrap().available_slots(), 29);
        assert_eq!(ledger.roster(&cs).unwrap(), vec![john.clone()]);

        let notice = ledger.drop_student_from_course(&john, &cs).unwrap();
        assert!(matches!(notice, Notice::Dropped { outcome: DropOutcome::Applied, .. }));
        assert_eq!(ledger.course(&cs).unwrap().enrolled(), 0);
        assert!(ledger.audit().is_ok());
    }

    #[test]
    fn test_unknown_course_is_reported_before_student() {
        let mut ledger = seeded(DuplicatePolicy::Replace);
        let missing_course = CourseCode::from("BIO999");
        let missing_student = StudentId::from("S9999");

        let err = ledger
            .register_student_for_course(&missing_student, &missing_course)
            .unwrap_err();
        assert_eq!(err.to_string(), "Course with code BIO999 not found.");

        let (_, _, cs, _) = ids();
        let err = ledger.drop_student_from_course(&missing_student, &cs).unwrap_err();
        assert_eq!(err, LedgerError::StudentNotFound(missing_student));
        assert!(ledger.roster(&missing_course).is_err());
    }

    #[test]
    fn test_replaced_course_clears_memberships() {
        let mut ledger = seeded(DuplicatePolicy::Replace);
        let (john, jane, cs, _) = ids();
        ledger.register_student_for_course(&john, &cs).unwrap();
        ledger.register_student_for_course(&jane, &cs).unwrap();

        ledger
            .add_course(CourseCreate::new("CS101", "Intro to CS (revised)", "New", 10, "TTh"))
            .unwrap();

        let course = ledger.course(&cs).unwrap();
        assert_eq!(course.enrolled(), 0);
        assert_eq!(course.capacity(), 10);
        assert!(!ledger.student(&john).unwrap().is_registered(&cs));
        assert!(!ledger.student(&jane).unwrap().is_registered(&cs));
        assert!(ledger.audit().is_ok());

        // The new course can be joined again straight away
        let notice = ledger.register_student_for_course(&john, &cs).unwrap();
        assert!(notice.is_applied());
    }

    #[test]
    fn test_replaced_student_releases_seats() {
        let mut ledger = seeded(DuplicatePolicy::Replace);
        let (john, jane, _, sem) = ids();
        ledger.register_student_for_course(&john, &sem).unwrap();
        assert!(ledger.course(&sem).unwrap().is_full());

        ledger.add_student(StudentCreate::new("S1001", "John Q. Doe")).unwrap();

        assert_eq!(ledger.course(&sem).unwrap().enrolled(), 0);
        assert!(ledger.student(&john).unwrap().registered_courses().is_empty());
        let notice = ledger.register_student_for_course(&jane, &sem).unwrap();
        assert!(matches!(notice, Notice::Registered { outcome: EnrollOutcome::Applied, .. }));
        assert!(ledger.audit().is_ok());
    }

    #[test]
    fn test_reject_policy_keeps_original() {
        let mut ledger = seeded(DuplicatePolicy::Reject);
        let (john, _, cs, _) = ids();
        ledger.register_student_for_course(&john, &cs).unwrap();

        let err = ledger
            .add_course(CourseCreate::new("CS101", "Other", "d", 5, "s"))
            .unwrap_err();
        assert_eq!(err, LedgerError::DuplicateCourse(cs.clone()));
        assert_eq!(ledger.course(&cs).unwrap().enrolled(), 1);

        let err = ledger.add_student(StudentCreate::new("S1001", "Other")).unwrap_err();
        assert_eq!(err, LedgerError::DuplicateStudent(john.clone()));
        assert_eq!(ledger.student(&john).unwrap().name(), "John Doe");
    }

    #[test]
    fn test_invalid_input_is_rejected_without_mutation() {
        let mut ledger = seeded(DuplicatePolicy::Replace);
        assert!(ledger.add_course(CourseCreate::new("CS 102", "t", "d", 5, "s")).is_err());
        assert!(ledger.add_course(CourseCreate::new("CS102", "t", "d", 0, "s")).is_err());
        assert!(ledger.add_student(StudentCreate::new("", "Nobody")).is_err());
        assert_eq!(ledger.courses().len(), 2);
        assert_eq!(ledger.students().len(), 2);
    }
}
