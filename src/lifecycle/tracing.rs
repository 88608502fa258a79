//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! the `RUST_LOG` environment variable. The module path prefix is hidden
//! (`with_target(false)`) since every event already carries its own fields.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup with the duplicate policy, shutdown with registry sizes
//! - **Requests**: each request kind as it enters the actor (`debug`)
//! - **Enrollment**: applied registrations and drops with remaining seats (`info`)
//! - **Silent no-ops**: full courses, repeat registrations, unheld drops (`debug`)
//! - **Not found / replaced entities**: `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Enrollment changes only
//! RUST_LOG=info cargo run
//!
//! # Also see every request and every no-op
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a registration against a full course looks like:
//!
//! ```text
//! DEBUG Request request="Register"
//! DEBUG Register skipped student_id=S1002 code=SEM1 outcome=Full
//! ```

/// Initializes the tracing subscriber.
///
/// Safe to call more than once: only the first call installs a subscriber,
/// which lets tests and the demo binary share it.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
