//! Subject model.
//!
//! A subject is one taught course in a (department, semester) scope, with
//! a weekly teaching-hour requirement the optimizer must scatter across
//! the grid. Immutable input for one optimization run.

use serde::{Deserialize, Serialize};

/// A subject requiring a fixed number of weekly teaching hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning department.
    pub department: String,
    /// Semester the subject is taught in.
    pub semester: u32,
    /// Required teaching hours per week (one hour = one grid slot).
    pub weekly_hours: u32,
    /// Whether the subject may only occupy lab classrooms.
    pub requires_lab: bool,
}

impl Subject {
    /// Creates a subject with the given scope and hour requirement.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        semester: u32,
        weekly_hours: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            semester,
            weekly_hours,
            requires_lab: false,
        }
    }

    /// Marks the subject as lab-only.
    pub fn with_lab(mut self) -> Self {
        self.requires_lab = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("CS301", "Algorithms", "CS", 3, 4);
        assert_eq!(s.id, "CS301");
        assert_eq!(s.weekly_hours, 4);
        assert!(!s.requires_lab);

        let lab = Subject::new("CS302", "OS Lab", "CS", 3, 2).with_lab();
        assert!(lab.requires_lab);
    }
}
