//! # Ledger Messages
//!
//! Requests carried from [`RegistrarClient`](crate::clients::RegistrarClient)
//! to [`LedgerActor`](crate::framework::LedgerActor). Each variant holds its
//! arguments and a oneshot sender for the reply.

use tokio::sync::oneshot;

use crate::error::LedgerError;
use crate::model::{Course, CourseCode, CourseCreate, Student, StudentCreate, StudentId};
use crate::registry::Notice;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

/// One operation against the ledger owned by the actor.
///
/// The variants mirror the [`Ledger`](crate::ledger::Ledger) API one to one.
/// Reads return owned snapshots, so nothing borrowed ever leaves the actor task.
#[derive(Debug)]
pub enum LedgerRequest {
    AddCourse {
        params: CourseCreate,
        respond_to: Response<()>,
    },
    AddStudent {
        params: StudentCreate,
        respond_to: Response<()>,
    },
    GetCourse {
        code: CourseCode,
        respond_to: Response<Option<Course>>,
    },
    GetStudent {
        id: StudentId,
        respond_to: Response<Option<Student>>,
    },
    ListCourses {
        respond_to: Response<Vec<Course>>,
    },
    DisplayCourses {
        respond_to: Response<String>,
    },
    Register {
        id: StudentId,
        code: CourseCode,
        respond_to: Response<Notice>,
    },
    Drop {
        id: StudentId,
        code: CourseCode,
        respond_to: Response<Notice>,
    },
    DisplayStudent {
        id: StudentId,
        respond_to: Response<String>,
    },
    Roster {
        code: CourseCode,
        respond_to: Response<Vec<StudentId>>,
    },
    Audit {
        respond_to: Response<()>,
    },
}

impl LedgerRequest {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerRequest::AddCourse { .. } => "AddCourse",
            LedgerRequest::AddStudent { .. } => "AddStudent",
            LedgerRequest::GetCourse { .. } => "GetCourse",
            LedgerRequest::GetStudent { .. } => "GetStudent",
            LedgerRequest::ListCourses { .. } => "ListCourses",
            LedgerRequest::DisplayCourses { .. } => "DisplayCourses",
            LedgerRequest::Register { .. } => "Register",
            LedgerRequest::Drop { .. } => "Drop",
            LedgerRequest::DisplayStudent { .. } => "DisplayStudent",
            LedgerRequest::Roster { .. } => "Roster",
            LedgerRequest::Audit { .. } => "Audit",
        }
    }
}
