//! Actor plumbing for shared access to a [`Ledger`](crate::ledger::Ledger).
//!
//! # Main Components
//!
//! - [`LedgerActor`] - owns the ledger and serializes every request
//! - [`LedgerRequest`] - the message enum, one variant per ledger operation
//! - [`FrameworkError`] - channel failures plus ledger refusals
//!
//! # Testing
//!
//! See [`mock`] for driving a client without spawning the actor.

pub mod actor;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::LedgerActor;
pub use error::FrameworkError;
pub use message::{LedgerRequest, Response};
