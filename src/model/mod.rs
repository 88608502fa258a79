//! Pure domain types: courses, students and the outcomes of moving between them.

pub mod course;
pub mod outcome;
pub mod student;

pub use course::*;
pub use outcome::*;
pub use student::*;
