//! Persisted weekly schedule record.
//!
//! The only externally visible format contract of the crate: a schedule is
//! keyed by (admin, department, semester) and maps lowercase day names to
//! ordered session lists with `"HH:MM"` times and display names. Created by
//! the materializer with `draft` status; publishing and ad-hoc edits happen
//! outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::grid::Day;

/// Lifecycle status of a schedule record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Generated but not yet visible to students/faculty.
    Draft,
    /// Published to the institution.
    Published,
}

/// One teaching session in a day's ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Session start, `"HH:MM"`.
    pub start_time: String,
    /// Session end, `"HH:MM"`.
    pub end_time: String,
    /// Subject display name.
    pub subject: String,
    /// Faculty display name.
    pub faculty: String,
    /// Classroom display name.
    pub classroom: String,
}

/// A complete weekly schedule for one (admin, department, semester) scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Tenant the schedule belongs to.
    pub admin_id: String,
    /// Department scope.
    pub department: String,
    /// Semester scope.
    pub semester: u32,
    /// Lowercase day name → ordered session list. Each day's list is
    /// sorted by start time; the map's own key order carries no meaning.
    pub days: BTreeMap<String, Vec<ScheduleEntry>>,
    /// Lifecycle status.
    pub status: ScheduleStatus,
    /// Generation provenance marker.
    pub generated_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Creates an empty draft schedule with one entry list per weekday.
    pub fn draft(
        admin_id: impl Into<String>,
        department: impl Into<String>,
        semester: u32,
    ) -> Self {
        let now = Utc::now();
        let days = Day::ALL
            .into_iter()
            .map(|d| (d.name().to_string(), Vec::new()))
            .collect();
        Self {
            admin_id: admin_id.into(),
            department: department.into(),
            semester,
            days,
            status: ScheduleStatus::Draft,
            generated_by: "AI".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a session to a day's list, keeping the list start-ordered.
    pub fn add_entry(&mut self, day: Day, entry: ScheduleEntry) {
        let list = self.days.entry(day.name().to_string()).or_default();
        let pos = list
            .iter()
            .position(|e| e.start_time > entry.start_time)
            .unwrap_or(list.len());
        list.insert(pos, entry);
    }

    /// Sessions for a day, empty when the day is absent.
    pub fn entries(&self, day: Day) -> &[ScheduleEntry] {
        self.days.get(day.name()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total session count across the week.
    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether the schedule contains no sessions.
    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: &str, end: &str, subject: &str) -> ScheduleEntry {
        ScheduleEntry {
            start_time: start.to_string(),
            end_time: end.to_string(),
            subject: subject.to_string(),
            faculty: "Dr. Rao".to_string(),
            classroom: "R101".to_string(),
        }
    }

    #[test]
    fn test_draft_has_all_weekdays() {
        let s = Schedule::draft("A1", "CS", 3);
        assert_eq!(s.days.len(), 5);
        assert!(s.days.contains_key("monday"));
        assert!(s.days.contains_key("friday"));
        assert!(s.is_empty());
        assert_eq!(s.status, ScheduleStatus::Draft);
        assert_eq!(s.generated_by, "AI");
    }

    #[test]
    fn test_add_entry_keeps_day_ordered() {
        let mut s = Schedule::draft("A1", "CS", 3);
        s.add_entry(Day::Monday, entry("11:00", "12:00", "OS"));
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Algorithms"));
        s.add_entry(Day::Monday, entry("10:00", "11:00", "Databases"));

        let monday = s.entries(Day::Monday);
        let starts: Vec<_> = monday.iter().map(|e| e.start_time.as_str()).collect();
        assert_eq!(starts, vec!["09:00", "10:00", "11:00"]);
        assert_eq!(s.session_count(), 3);
    }

    #[test]
    fn test_serde_contract() {
        let mut s = Schedule::draft("A1", "CS", 3);
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Algorithms"));

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["generatedBy"], "AI");
        let first = &json["days"]["monday"][0];
        assert_eq!(first["startTime"], "09:00");
        assert_eq!(first["endTime"], "10:00");
        assert_eq!(first["subject"], "Algorithms");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut s = Schedule::draft("A1", "CS", 3);
        s.add_entry(Day::Tuesday, entry("10:00", "11:00", "OS"));

        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries(Day::Tuesday), s.entries(Day::Tuesday));
        assert_eq!(back.status, ScheduleStatus::Draft);
    }
}
