//! # System Lifecycle
//!
//! Starting, wiring and stopping the shared ledger.
//!
//! - [`RegistrarSystem`] spawns the [`LedgerActor`](crate::framework::LedgerActor)
//!   and owns its task handle
//! - [`setup_tracing`] initializes structured logging
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the
//!    queue is drained
//! 3. **Await completion** - [`RegistrarSystem::shutdown`] joins the task
//!
//! No queued request is lost: everything sent before the last client is
//! dropped is still applied.

pub mod registrar_system;
pub mod tracing;

pub use self::registrar_system::*;
pub use self::tracing::*;
