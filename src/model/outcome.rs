use serde::{Deserialize, Serialize};

/// What a register/enroll call actually did.
///
/// Callers that mirror the legacy behaviour ignore this value. Stricter callers
/// branch on it to tell a real enrollment from a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollOutcome {
    /// The seat was taken and the membership recorded.
    Applied,
    /// The student already holds this course; nothing changed.
    AlreadyMember,
    /// The course has no free seats; nothing changed.
    Full,
}

impl EnrollOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, EnrollOutcome::Applied)
    }
}

/// What a drop call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// The seat was released and the membership removed.
    Applied,
    /// There was nothing to release; nothing changed.
    NotMember,
}

impl DropOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, DropOutcome::Applied)
    }
}
