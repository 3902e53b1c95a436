//! Student and department records.
//!
//! Students never enter the optimization hot loop; the catalog carries them
//! so schedule analysis can compare classroom capacity against enrollment.
//! Departments exist only for scope resolution.

use serde::{Deserialize, Serialize};

/// An enrolled student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Enrolled department.
    pub department: String,
    /// Current semester.
    pub semester: u32,
}

impl Student {
    /// Creates a student record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        semester: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            semester,
        }
    }
}

/// A department, resolved once per run to validate the requested scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Department name (the scope key).
    pub name: String,
    /// Short code (e.g. "CS").
    pub code: String,
}

impl Department {
    /// Creates a department record.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}
