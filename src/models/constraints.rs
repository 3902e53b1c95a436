//! Run-level scheduling constraints.
//!
//! Bundles the tunable constraint parameters of one optimization run:
//! workload caps, the lunch-break window, and per-subject/per-faculty
//! preference overrides. Hard constraints (double-booking, lab rooms)
//! are not represented here — the evaluator detects the former and the
//! eligibility sets enforce the latter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::faculty::FacultyPreferences;

/// Constraint parameters for one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraints {
    /// Default daily workload cap per faculty member, overridable by
    /// per-faculty preferences.
    pub max_hours_per_day: u32,
    /// Longest acceptable run of consecutive teaching hours. Consumed by
    /// schedule analysis, not by the fitness evaluator.
    pub max_consecutive_hours: u32,
    /// Lunch window start (minutes since midnight).
    pub lunch_break_start: u16,
    /// Lunch window end (minutes since midnight, exclusive).
    pub lunch_break_end: u16,
    /// Preferred classroom per subject (subject id → classroom id).
    pub room_preferences: HashMap<String, String>,
    /// Per-run faculty preference overrides (faculty id → preferences).
    /// Takes precedence over `Faculty::preferences` when present.
    pub faculty_preferences: HashMap<String, FacultyPreferences>,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_hours_per_day: 4,
            max_consecutive_hours: 3,
            lunch_break_start: 720, // 12:00
            lunch_break_end: 780,   // 13:00
            room_preferences: HashMap::new(),
            faculty_preferences: HashMap::new(),
        }
    }
}

impl Constraints {
    /// Sets the default daily workload cap.
    pub fn with_max_hours_per_day(mut self, hours: u32) -> Self {
        self.max_hours_per_day = hours;
        self
    }

    /// Sets the consecutive-hours limit.
    pub fn with_max_consecutive_hours(mut self, hours: u32) -> Self {
        self.max_consecutive_hours = hours;
        self
    }

    /// Sets the lunch window in minutes since midnight.
    pub fn with_lunch_break(mut self, start_min: u16, end_min: u16) -> Self {
        self.lunch_break_start = start_min;
        self.lunch_break_end = end_min;
        self
    }

    /// Registers a preferred classroom for a subject.
    pub fn with_room_preference(
        mut self,
        subject_id: impl Into<String>,
        classroom_id: impl Into<String>,
    ) -> Self {
        self.room_preferences
            .insert(subject_id.into(), classroom_id.into());
        self
    }

    /// Registers a per-run faculty preference override.
    pub fn with_faculty_preference(
        mut self,
        faculty_id: impl Into<String>,
        preferences: FacultyPreferences,
    ) -> Self {
        self.faculty_preferences
            .insert(faculty_id.into(), preferences);
        self
    }

    /// Effective preferences for a faculty member: the per-run override
    /// when present, otherwise the member's own.
    pub fn preferences_for<'a>(
        &'a self,
        faculty_id: &str,
        own: &'a FacultyPreferences,
    ) -> &'a FacultyPreferences {
        self.faculty_preferences.get(faculty_id).unwrap_or(own)
    }

    /// Effective daily cap for a faculty member.
    pub fn max_hours_for(&self, faculty_id: &str, own: &FacultyPreferences) -> u32 {
        self.preferences_for(faculty_id, own)
            .max_hours_per_day
            .unwrap_or(self.max_hours_per_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Constraints::default();
        assert_eq!(c.max_hours_per_day, 4);
        assert_eq!(c.max_consecutive_hours, 3);
        assert_eq!(c.lunch_break_start, 720);
        assert_eq!(c.lunch_break_end, 780);
        assert!(c.room_preferences.is_empty());
    }

    #[test]
    fn test_builder() {
        let c = Constraints::default()
            .with_max_hours_per_day(5)
            .with_lunch_break(660, 720)
            .with_room_preference("CS301", "R101");

        assert_eq!(c.max_hours_per_day, 5);
        assert_eq!(c.lunch_break_start, 660);
        assert_eq!(c.room_preferences["CS301"], "R101");
    }

    #[test]
    fn test_preference_override_precedence() {
        let own = FacultyPreferences::default().with_max_hours_per_day(2);
        let c = Constraints::default().with_faculty_preference(
            "F1",
            FacultyPreferences::default().with_max_hours_per_day(6),
        );

        assert_eq!(c.max_hours_for("F1", &own), 6); // run override wins
        assert_eq!(c.max_hours_for("F2", &own), 2); // own preference
        assert_eq!(c.max_hours_for("F3", &FacultyPreferences::default()), 4); // run default
    }
}
