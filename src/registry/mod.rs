//! Key-indexed owning collections for courses and students.

pub mod course_registry;
pub mod student_registry;

pub use course_registry::*;
pub use student_registry::*;
