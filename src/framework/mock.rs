//! # Mock Receiver
//!
//! Test helpers that stand in for [`LedgerActor`](crate::framework::LedgerActor).
//! [`create_mock_client`] hands back a real [`RegistrarClient`] plus the raw
//! receiving end of its channel. A test can then drive the client in one task,
//! inspect each [`LedgerRequest`] as it arrives and answer it by hand, which
//! makes error injection trivial.
//!
//! ```rust
//! use enrollment_ledger::framework::mock::{create_mock_client, expect_register};
//! use enrollment_ledger::model::EnrollOutcome;
//! use enrollment_ledger::registry::Notice;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.register("S1001", "CS101").await });
//!
//!     let (id, code, respond_to) = expect_register(&mut receiver).await.unwrap();
//!     assert_eq!(id.0, "S1001");
//!     assert_eq!(code.0, "CS101");
//!     respond_to
//!         .send(Ok(Notice::Registered {
//!             student: "John Doe".into(),
//!             course: "Intro".into(),
//!             outcome: EnrollOutcome::Full,
//!         }))
//!         .unwrap();
//!
//!     assert!(!task.await.unwrap().unwrap().is_applied());
//! }
//! ```

use tokio::sync::mpsc;

use crate::clients::RegistrarClient;
use crate::framework::message::{LedgerRequest, Response};
use crate::model::{CourseCode, StudentId};
use crate::registry::Notice;

pub fn create_mock_client(buffer_size: usize) -> (RegistrarClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistrarClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `Register`.
pub async fn expect_register(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(StudentId, CourseCode, Response<Notice>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Register {
            id,
            code,
            respond_to,
        }) => Some((id, code, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `Drop`.
pub async fn expect_drop(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(StudentId, CourseCode, Response<Notice>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Drop {
            id,
            code,
            respond_to,
        }) => Some((id, code, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `DisplayStudent`.
pub async fn expect_display_student(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(StudentId, Response<String>)> {
    match receiver.recv().await {
        Some(LedgerRequest::DisplayStudent { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
