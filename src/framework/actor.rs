//! # Ledger Actor
//!
//! The single command-processing task that owns the [`Ledger`] when it is
//! shared between many callers.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::clients::RegistrarClient;
use crate::config::LedgerConfig;
use crate::framework::message::LedgerRequest;
use crate::ledger::Ledger;

/// Owns a [`Ledger`] and applies requests to it one at a time.
///
/// **Concurrency Model**:
/// Any number of [`RegistrarClient`] clones may send at once, but the actor
/// works through its channel *sequentially*. An enroll or drop always
/// finishes, counter and membership together, before the next request is read.
/// That holds the seat counter invariant without a `Mutex` around the ledger.
///
/// ```rust
/// use enrollment_ledger::config::LedgerConfig;
/// use enrollment_ledger::framework::LedgerActor;
/// use enrollment_ledger::model::{CourseCreate, StudentCreate};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = LedgerActor::new(LedgerConfig::default());
///     let handle = tokio::spawn(actor.run());
///
///     client
///         .add_course(CourseCreate::new("CS101", "Intro", "Basics", 30, "MWF"))
///         .await
///         .unwrap();
///     client.add_student(StudentCreate::new("S1001", "John Doe")).await.unwrap();
///     let notice = client.register("S1001", "CS101").await.unwrap();
///     assert!(notice.is_applied());
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: Ledger,
}

impl LedgerActor {
    /// Creates the actor and its client over a channel of
    /// `config.channel_buffer` slots. The actor does nothing until [`run`](Self::run).
    pub fn new(config: LedgerConfig) -> (Self, RegistrarClient) {
        let (sender, receiver) = mpsc::channel(config.channel_buffer);
        let actor = Self {
            receiver,
            ledger: Ledger::new(config),
        };
        (actor, RegistrarClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(
            policy = ?self.ledger.config().duplicate_policy,
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            debug!(request = msg.kind(), "Request");
            self.handle(msg);
        }

        info!(
            courses = self.ledger.courses().len(),
            students = self.ledger.students().len(),
            "Shutdown"
        );
    }

    fn handle(&mut self, msg: LedgerRequest) {
        // A send error only means the caller stopped waiting
        match msg {
            LedgerRequest::AddCourse { params, respond_to } => {
                let result = self.ledger.add_course(params);
                if let Err(e) = &result {
                    warn!(error = %e, "AddCourse failed");
                }
                let _ = respond_to.send(result);
            }
            LedgerRequest::AddStudent { params, respond_to } => {
                let result = self.ledger.add_student(params);
                if let Err(e) = &result {
                    warn!(error = %e, "AddStudent failed");
                }
                let _ = respond_to.send(result);
            }
            LedgerRequest::GetCourse { code, respond_to } => {
                let course = self.ledger.course(&code).cloned();
                debug!(%code, found = course.is_some(), "GetCourse");
                let _ = respond_to.send(Ok(course));
            }
            LedgerRequest::GetStudent { id, respond_to } => {
                let student = self.ledger.student(&id).cloned();
                debug!(%id, found = student.is_some(), "GetStudent");
                let _ = respond_to.send(Ok(student));
            }
            LedgerRequest::ListCourses { respond_to } => {
                let courses = self.ledger.courses().list_all().cloned().collect();
                let _ = respond_to.send(Ok(courses));
            }
            LedgerRequest::DisplayCourses { respond_to } => {
                let _ = respond_to.send(Ok(self.ledger.display_courses()));
            }
            LedgerRequest::Register {
                id,
                code,
                respond_to,
            } => {
                let result = self.ledger.register_student_for_course(&id, &code);
                let _ = respond_to.send(result);
            }
            LedgerRequest::Drop {
                id,
                code,
                respond_to,
            } => {
                let result = self.ledger.drop_student_from_course(&id, &code);
                let _ = respond_to.send(result);
            }
            LedgerRequest::DisplayStudent { id, respond_to } => {
                let _ = respond_to.send(self.ledger.display_student_info(&id));
            }
            LedgerRequest::Roster { code, respond_to } => {
                let _ = respond_to.send(self.ledger.roster(&code));
            }
            LedgerRequest::Audit { respond_to } => {
                let result = self.ledger.audit();
                if let Err(e) = &result {
                    warn!(error = %e, "Audit failed");
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
