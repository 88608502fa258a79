//! # Registrar Client
//!
//! Typed async API over the [`LedgerActor`](crate::framework::LedgerActor)
//! channel. One method per ledger operation.
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::framework::{FrameworkError, LedgerRequest, Response};
use crate::model::{Course, CourseCode, CourseCreate, Student, StudentCreate, StudentId};
use crate::registry::Notice;

/// Client for interacting with the ledger actor.
///
/// Holds only a sender, so cloning is cheap and clones can be handed to as
/// many tasks as needed. The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct RegistrarClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl RegistrarClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> LedgerRequest,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        Ok(response.await.map_err(|_| FrameworkError::ActorDropped)??)
    }

    #[instrument(skip(self))]
    pub async fn add_course(&self, params: CourseCreate) -> Result<(), FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::AddCourse { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_student(&self, params: StudentCreate) -> Result<(), FrameworkError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::AddStudent { params, respond_to })
            .await
    }

    /// Snapshot of a course, or `None` if the code is unknown.
    pub async fn get_course(
        &self,
        code: impl Into<CourseCode>,
    ) -> Result<Option<Course>, FrameworkError> {
        let code = code.into();
        self.request(|respond_to| LedgerRequest::GetCourse { code, respond_to })
            .await
    }

    /// Snapshot of a student, or `None` if the ID is unknown.
    pub async fn get_student(
        &self,
        id: impl Into<StudentId>,
    ) -> Result<Option<Student>, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| LedgerRequest::GetStudent { id, respond_to })
            .await
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, FrameworkError> {
        self.request(|respond_to| LedgerRequest::ListCourses { respond_to })
            .await
    }

    pub async fn display_courses(&self) -> Result<String, FrameworkError> {
        self.request(|respond_to| LedgerRequest::DisplayCourses { respond_to })
            .await
    }

    /// Registers a student for a course.
    ///
    /// Returns the confirmation [`Notice`] whenever both identifiers resolve.
    /// Check [`Notice::is_applied`] to learn whether a seat was actually taken.
    pub async fn register(
        &self,
        id: impl Into<StudentId>,
        code: impl Into<CourseCode>,
    ) -> Result<Notice, FrameworkError> {
        let (id, code) = (id.into(), code.into());
        debug!(%id, %code, "Sending register");
        self.request(|respond_to| LedgerRequest::Register {
            id,
            code,
            respond_to,
        })
        .await
    }

    pub async fn drop_course(
        &self,
        id: impl Into<StudentId>,
        code: impl Into<CourseCode>,
    ) -> Result<Notice, FrameworkError> {
        let (id, code) = (id.into(), code.into());
        debug!(%id, %code, "Sending drop");
        self.request(|respond_to| LedgerRequest::Drop {
            id,
            code,
            respond_to,
        })
        .await
    }

    pub async fn display_student_info(
        &self,
        id: impl Into<StudentId>,
    ) -> Result<String, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| LedgerRequest::DisplayStudent { id, respond_to })
            .await
    }

    pub async fn roster(
        &self,
        code: impl Into<CourseCode>,
    ) -> Result<Vec<StudentId>, FrameworkError> {
        let code = code.into();
        self.request(|respond_to| LedgerRequest::Roster { code, respond_to })
            .await
    }

    pub async fn audit(&self) -> Result<(), FrameworkError> {
        self.request(|respond_to| LedgerRequest::Audit { respond_to })
            .await
    }
}
