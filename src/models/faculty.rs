//! Faculty model.
//!
//! Faculty members teach a subset of subjects and carry scheduling
//! preferences: preferred days and slots, a daily workload cap, and
//! whether back-to-back teaching should be avoided. Preferences are
//! soft — the fitness evaluator scores them, nothing enforces them.

use serde::{Deserialize, Serialize};

use super::grid::Day;

/// A faculty member available for teaching assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Home department.
    pub department: String,
    /// Subject names this member may teach. When a subject appears in no
    /// teachable set, same-department faculty are treated as capable.
    pub teachable_subjects: Vec<String>,
    /// Scheduling preferences for this member.
    pub preferences: FacultyPreferences,
}

/// Soft scheduling preferences of one faculty member.
///
/// Empty `preferred_days`/`preferred_slots` mean "no preference".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacultyPreferences {
    /// Days the member prefers to teach on.
    pub preferred_days: Vec<Day>,
    /// Slot indices the member prefers to teach in.
    pub preferred_slots: Vec<usize>,
    /// Daily workload cap; `None` falls back to the run-level constraint.
    pub max_hours_per_day: Option<u32>,
    /// Whether chronologically adjacent assignments should be avoided.
    pub avoid_back_to_back: bool,
}

impl Faculty {
    /// Creates a faculty member with no teachable subjects or preferences.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            teachable_subjects: Vec::new(),
            preferences: FacultyPreferences::default(),
        }
    }

    /// Adds a teachable subject name.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.teachable_subjects.push(subject.into());
        self
    }

    /// Sets the scheduling preferences.
    pub fn with_preferences(mut self, preferences: FacultyPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Whether this member may teach the given subject name.
    pub fn can_teach(&self, subject_name: &str) -> bool {
        self.teachable_subjects.iter().any(|s| s == subject_name)
    }
}

impl FacultyPreferences {
    /// Sets the daily workload cap.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = Some(hours);
        self
    }

    /// Requests avoiding back-to-back assignments.
    pub fn avoiding_back_to_back(mut self) -> Self {
        self.avoid_back_to_back = true;
        self
    }

    /// Sets the preferred days.
    pub fn with_preferred_days(mut self, days: Vec<Day>) -> Self {
        self.preferred_days = days;
        self
    }

    /// Sets the preferred slot indices.
    pub fn with_preferred_slots(mut self, slots: Vec<usize>) -> Self {
        self.preferred_slots = slots;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_builder() {
        let f = Faculty::new("F1", "Dr. Rao", "CS")
            .with_subject("Algorithms")
            .with_subject("Operating Systems");

        assert!(f.can_teach("Algorithms"));
        assert!(!f.can_teach("Databases"));
    }

    #[test]
    fn test_preferences_builder() {
        let p = FacultyPreferences::default()
            .with_max_hours_per_day(3)
            .avoiding_back_to_back()
            .with_preferred_days(vec![Day::Monday, Day::Wednesday])
            .with_preferred_slots(vec![0, 1]);

        assert_eq!(p.max_hours_per_day, Some(3));
        assert!(p.avoid_back_to_back);
        assert_eq!(p.preferred_days.len(), 2);
        assert_eq!(p.preferred_slots, vec![0, 1]);
    }

    #[test]
    fn test_default_preferences_are_neutral() {
        let p = FacultyPreferences::default();
        assert!(p.preferred_days.is_empty());
        assert!(p.preferred_slots.is_empty());
        assert!(p.max_hours_per_day.is_none());
        assert!(!p.avoid_back_to_back);
    }
}
