//! Type-safe wrapper around the ledger actor's request channel.

pub mod registrar_client;

pub use registrar_client::*;
