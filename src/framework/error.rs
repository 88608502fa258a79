//! # Framework Errors
//!
//! Failures seen by a [`RegistrarClient`](crate::clients::RegistrarClient):
//! the actor may be gone, or the ledger may have refused the request.

use crate::error::LedgerError;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
