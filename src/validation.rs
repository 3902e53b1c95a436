//! Catalog integrity checks.
//!
//! Structural checks run once over the fetched catalog before optimization:
//! duplicate IDs, zero-hour subjects, and constraint references to unknown
//! entities. The catalog contract says providers deduplicate, so findings
//! here indicate a misbehaving adapter; the optimizer logs them and
//! continues — only an empty scope aborts a run (see `ScheduleError`).

use std::collections::HashSet;

use crate::models::{Classroom, Constraints, Faculty, Subject};

/// Validation outcome: every detected issue, or nothing.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single integrity finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of integrity findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A subject requires zero weekly hours.
    ZeroHourSubject,
    /// A room preference names an unknown subject or classroom.
    InvalidRoomPreference,
    /// A faculty preference override names an unknown faculty member.
    InvalidFacultyPreference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a fetched catalog against the run constraints.
///
/// Checks:
/// 1. No duplicate subject, faculty, or classroom IDs
/// 2. Every subject requires at least one weekly hour
/// 3. Room preferences reference known subjects and classrooms
/// 4. Faculty preference overrides reference known faculty
///
/// Returns `Ok(())` or every detected issue at once.
pub fn validate_catalog(
    subjects: &[Subject],
    faculty: &[Faculty],
    classrooms: &[Classroom],
    constraints: &Constraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut subject_ids = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate subject ID: {}", s.id),
            ));
        }
        if s.weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHourSubject,
                format!("subject '{}' requires zero weekly hours", s.id),
            ));
        }
    }

    let mut faculty_ids = HashSet::new();
    for f in faculty {
        if !faculty_ids.insert(f.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate faculty ID: {}", f.id),
            ));
        }
    }

    let mut classroom_ids = HashSet::new();
    for c in classrooms {
        if !classroom_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate classroom ID: {}", c.id),
            ));
        }
    }

    for (subject_id, classroom_id) in &constraints.room_preferences {
        if !subject_ids.contains(subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRoomPreference,
                format!("room preference for unknown subject '{subject_id}'"),
            ));
        }
        if !classroom_ids.contains(classroom_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRoomPreference,
                format!("room preference names unknown classroom '{classroom_id}'"),
            ));
        }
    }

    for faculty_id in constraints.faculty_preferences.keys() {
        if !faculty_ids.contains(faculty_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidFacultyPreference,
                format!("preference override for unknown faculty '{faculty_id}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
