//! # Enrollment Ledger
//!
//! > **An in-memory registration ledger: courses with finite seats, students,
//! > and the enrollments between them.**
//!
//! The core is a set of rules for when a student may join or leave a course
//! and how the two sides of that relationship stay in step. Each [`Student`](model::Student)
//! lists the courses it holds. Each [`Course`](model::Course) stores only a
//! seat counter. After every operation the counter on a course equals the
//! number of students listing it.
//!
//! ## 🏗️ Behaviour Worth Knowing
//!
//! ### Silent clamps
//! Joining a full course, joining a course twice or dropping a course never
//! held does nothing and is **not** an error. Every such call returns an
//! [`EnrollOutcome`](model::EnrollOutcome) / [`DropOutcome`](model::DropOutcome),
//! which callers may inspect or ignore.
//!
//! ### Unconditional confirmations
//! Once the student and course both resolve, the registry produces the same
//! "has been registered" / "has been dropped" [`Notice`](registry::Notice)
//! whether or not anything changed. Use [`Notice::is_applied`](registry::Notice::is_applied)
//! to tell the cases apart.
//!
//! ### Replace on re-add
//! Adding a course code or student ID that already exists replaces the stored
//! entity by default. Set [`DuplicatePolicy::Reject`](config::DuplicatePolicy)
//! to refuse instead.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`], [`validation`])
//! Entities, identifiers and outcome enums, and the guards that run when they
//! are constructed.
//!
//! ### 2. The Stores ([`registry`], [`ledger`])
//! [`CourseRegistry`](registry::CourseRegistry) and
//! [`StudentRegistry`](registry::StudentRegistry) own the entities.
//! [`Ledger`](ledger::Ledger) is the context object that owns both, resolves
//! identifiers and audits the relationship.
//!
//! ### 3. Shared Access ([`framework`], [`clients`], [`lifecycle`])
//! For many concurrent callers, a single [`LedgerActor`](framework::LedgerActor)
//! owns the ledger and applies requests one at a time. Callers talk to it
//! through [`RegistrarClient`](clients::RegistrarClient).
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use enrollment_ledger::ledger::Ledger;
//! use enrollment_ledger::model::{CourseCode, CourseCreate, StudentCreate, StudentId};
//!
//! let mut ledger = Ledger::default();
//! ledger
//!     .add_course(CourseCreate::new("CS101", "Introduction to Computer Science", "Basics of CS", 30, "Mon-Wed-Fri 10:00-11:00 AM"))
//!     .unwrap();
//! ledger.add_student(StudentCreate::new("S1001", "John Doe")).unwrap();
//!
//! let notice = ledger
//!     .register_student_for_course(&StudentId::from("S1001"), &CourseCode::from("CS101"))
//!     .unwrap();
//! assert_eq!(notice.to_string(), "Student John Doe has been registered for the course Introduction to Computer Science.");
//! assert_eq!(ledger.course(&CourseCode::from("CS101")).unwrap().available_slots(), 29);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod validation;

pub use error::LedgerError;
