//! Classroom model.
//!
//! Classrooms are either general-purpose or lab-only. Lab-requiring
//! subjects may only occupy lab rooms; lecture subjects stay in
//! general-purpose rooms so lab capacity is not consumed by lectures.

use serde::{Deserialize, Serialize};

/// A classroom available for assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Display name (e.g. room number).
    pub name: String,
    /// Owning department; `None` means department-agnostic.
    pub department: Option<String>,
    /// Whether this room is a lab.
    pub is_lab: bool,
    /// Seating capacity.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a general-purpose, department-agnostic classroom.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: None,
            is_lab: false,
            capacity,
        }
    }

    /// Marks the room as a lab.
    pub fn as_lab(mut self) -> Self {
        self.is_lab = true;
        self
    }

    /// Restricts the room to a department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Whether the room may host the given department's classes.
    pub fn serves_department(&self, department: &str) -> bool {
        match &self.department {
            None => true,
            Some(d) => d == department,
        }
    }

    /// Whether the room matches a subject's lab requirement.
    pub fn suits_lab_requirement(&self, requires_lab: bool) -> bool {
        self.is_lab == requires_lab
    }
}
