//! Schedule quality metrics and read-only analysis.
//!
//! Computes standard timetable indicators from an already-materialized
//! [`Schedule`] record and the catalog it was generated from. Independent
//! of the optimization loop: it sees only display names and `"HH:MM"`
//! times, exactly what a persisted record carries. Because the record
//! holds no entity IDs, conflict grouping keys on display names — a
//! catalog with two faculty or classrooms sharing a display name will
//! over-count conflicts here (the in-run evaluator keys on IDs and is
//! unaffected).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Sessions | Number of sessions across the week |
//! | Daily Balance | Population stddev of per-day session counts |
//! | Faculty Conflicts | Σ over (day, start, faculty) groups of (n − 1) |
//! | Classroom Conflicts | Σ over (day, start, classroom) groups of (n − 1) |
//! | Faculty Utilization | Fraction of catalog faculty with ≥ 1 session |
//! | Classroom Utilization | Fraction of catalog classrooms with ≥ 1 session |

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{Constraints, Day, Schedule};

/// Timetable performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of sessions across the week.
    pub total_sessions: usize,
    /// Sessions per lowercase day name.
    pub sessions_per_day: BTreeMap<String, usize>,
    /// Population standard deviation of the per-day counts.
    pub daily_balance_stddev: f64,
    /// Faculty double-bookings, counted as (group size − 1) per group.
    pub faculty_conflicts: usize,
    /// Classroom double-bookings, counted the same way.
    pub classroom_conflicts: usize,
    /// Fraction of catalog faculty teaching at least one session (0.0..1.0).
    pub faculty_utilization: f64,
    /// Fraction of catalog classrooms hosting at least one session (0.0..1.0).
    pub classroom_utilization: f64,
    /// Weekly session counts per faculty display name.
    pub sessions_by_faculty: HashMap<String, usize>,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule record and its source catalog.
    pub fn calculate(schedule: &Schedule, catalog: &Catalog) -> Self {
        let mut sessions_per_day = BTreeMap::new();
        let mut faculty_groups: HashMap<(String, String, String), usize> = HashMap::new();
        let mut classroom_groups: HashMap<(String, String, String), usize> = HashMap::new();
        let mut sessions_by_faculty: HashMap<String, usize> = HashMap::new();
        let mut used_classrooms: HashSet<&str> = HashSet::new();

        for day in Day::ALL {
            let entries = schedule.entries(day);
            sessions_per_day.insert(day.name().to_string(), entries.len());
            for e in entries {
                *faculty_groups
                    .entry((day.name().to_string(), e.start_time.clone(), e.faculty.clone()))
                    .or_insert(0) += 1;
                *classroom_groups
                    .entry((
                        day.name().to_string(),
                        e.start_time.clone(),
                        e.classroom.clone(),
                    ))
                    .or_insert(0) += 1;
                *sessions_by_faculty.entry(e.faculty.clone()).or_insert(0) += 1;
                used_classrooms.insert(e.classroom.as_str());
            }
        }

        let faculty_conflicts: usize = faculty_groups.values().map(|n| n - 1).sum();
        let classroom_conflicts: usize = classroom_groups.values().map(|n| n - 1).sum();

        let faculty_utilization = fraction_used(
            catalog.faculty.iter().map(|f| f.name.as_str()),
            |name| sessions_by_faculty.contains_key(name),
        );
        let classroom_utilization = fraction_used(
            catalog.classrooms.iter().map(|c| c.name.as_str()),
            |name| used_classrooms.contains(name),
        );

        let counts: Vec<f64> = sessions_per_day.values().map(|&n| n as f64).collect();
        Self {
            total_sessions: schedule.session_count(),
            daily_balance_stddev: stddev(&counts),
            sessions_per_day,
            faculty_conflicts,
            classroom_conflicts,
            faculty_utilization,
            classroom_utilization,
            sessions_by_faculty,
        }
    }

    /// Whether the record is free of hard double-bookings.
    pub fn is_conflict_free(&self) -> bool {
        self.faculty_conflicts == 0 && self.classroom_conflicts == 0
    }
}

/// Result of [`analyze_schedule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAnalysis {
    /// Computed indicators.
    pub metrics: ScheduleMetrics,
    /// Human-readable hard-conflict descriptions.
    pub conflicts: Vec<String>,
    /// Resourcing advice (capacity, idle staff/rooms).
    pub suggestions: Vec<String>,
    /// Structural quality advice (balance, teaching runs).
    pub improvements: Vec<String>,
}

/// Read-only analysis over a persisted schedule record.
pub fn analyze_schedule(
    schedule: &Schedule,
    catalog: &Catalog,
    constraints: &Constraints,
) -> ScheduleAnalysis {
    let metrics = ScheduleMetrics::calculate(schedule, catalog);
    let conflicts = describe_conflicts(schedule);
    let suggestions = resource_suggestions(schedule, catalog, &metrics);
    let improvements = structural_improvements(schedule, constraints, &metrics);

    ScheduleAnalysis {
        metrics,
        conflicts,
        suggestions,
        improvements,
    }
}

fn describe_conflicts(schedule: &Schedule) -> Vec<String> {
    let mut conflicts = Vec::new();
    for day in Day::ALL {
        let mut faculty_at: HashMap<(&str, &str), usize> = HashMap::new();
        let mut classroom_at: HashMap<(&str, &str), usize> = HashMap::new();
        for e in schedule.entries(day) {
            *faculty_at
                .entry((e.start_time.as_str(), e.faculty.as_str()))
                .or_insert(0) += 1;
            *classroom_at
                .entry((e.start_time.as_str(), e.classroom.as_str()))
                .or_insert(0) += 1;
        }
        let mut day_conflicts: Vec<String> = Vec::new();
        for ((start, faculty), n) in &faculty_at {
            if *n > 1 {
                day_conflicts.push(format!(
                    "{} {}: faculty {} booked {} times",
                    day.name(),
                    start,
                    faculty,
                    n
                ));
            }
        }
        for ((start, classroom), n) in &classroom_at {
            if *n > 1 {
                day_conflicts.push(format!(
                    "{} {}: classroom {} booked {} times",
                    day.name(),
                    start,
                    classroom,
                    n
                ));
            }
        }
        day_conflicts.sort();
        conflicts.extend(day_conflicts);
    }
    conflicts
}

fn resource_suggestions(
    schedule: &Schedule,
    catalog: &Catalog,
    metrics: &ScheduleMetrics,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let enrolled = catalog.students.len();
    if enrolled > 0 {
        let capacities: HashMap<&str, u32> = catalog
            .classrooms
            .iter()
            .map(|c| (c.name.as_str(), c.capacity))
            .collect();
        let mut flagged: HashSet<&str> = HashSet::new();
        for day in Day::ALL {
            for e in schedule.entries(day) {
                if let Some(&capacity) = capacities.get(e.classroom.as_str()) {
                    if (capacity as usize) < enrolled && flagged.insert(e.classroom.as_str()) {
                        suggestions.push(format!(
                            "classroom {} seats {} but {} students are enrolled in this scope",
                            e.classroom, capacity, enrolled
                        ));
                    }
                }
            }
        }
    }

    let idle: Vec<&str> = catalog
        .faculty
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !metrics.sessions_by_faculty.contains_key(*name))
        .collect();
    if !idle.is_empty() {
        suggestions.push(format!(
            "{} faculty member(s) have no sessions: {}",
            idle.len(),
            idle.join(", ")
        ));
    }

    suggestions
}

fn structural_improvements(
    schedule: &Schedule,
    constraints: &Constraints,
    metrics: &ScheduleMetrics,
) -> Vec<String> {
    let mut improvements = Vec::new();

    for (day, &count) in &metrics.sessions_per_day {
        if count == 0 && metrics.total_sessions > 0 {
            improvements.push(format!("{day} has no sessions; consider redistributing"));
        }
    }

    if metrics.daily_balance_stddev > 1.5 {
        improvements.push(format!(
            "daily load is uneven (stddev {:.1}); spread sessions more evenly",
            metrics.daily_balance_stddev
        ));
    }

    let limit = constraints.max_consecutive_hours as usize;
    if limit > 0 {
        for day in Day::ALL {
            let mut runs: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
            for e in schedule.entries(day) {
                runs.entry(e.faculty.as_str())
                    .or_default()
                    .push((e.start_time.as_str(), e.end_time.as_str()));
            }
            for (faculty, mut sessions) in runs {
                sessions.sort();
                let mut run = 1usize;
                let mut longest = 1usize;
                for pair in sessions.windows(2) {
                    if pair[0].1 == pair[1].0 {
                        run += 1;
                        longest = longest.max(run);
                    } else {
                        run = 1;
                    }
                }
                if longest > limit {
                    improvements.push(format!(
                        "{} teaches {} consecutive hours on {} (limit {})",
                        faculty,
                        longest,
                        day.name(),
                        limit
                    ));
                }
            }
        }
    }

    improvements.sort();
    improvements
}

fn fraction_used<'a, I, F>(names: I, used: F) -> f64
where
    I: Iterator<Item = &'a str>,
    F: Fn(&str) -> bool,
{
    let mut total = 0usize;
    let mut active = 0usize;
    for name in names {
        total += 1;
        if used(name) {
            active += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        active as f64 / total as f64
    }
}

fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Department, Faculty, ScheduleEntry, Student, Subject};

    fn catalog() -> Catalog {
        Catalog {
            department: Department::new("Computer Science", "CS"),
            subjects: vec![Subject::new("CS301", "Algorithms", "CS", 3, 4)],
            faculty: vec![
                Faculty::new("F1", "Dr. Rao", "CS").with_subject("Algorithms"),
                Faculty::new("F2", "Dr. Li", "CS"),
            ],
            classrooms: vec![
                Classroom::new("R1", "Room 101", 60),
                Classroom::new("R2", "Room 102", 30),
            ],
            students: Vec::new(),
        }
    }

    fn entry(start: &str, end: &str, faculty: &str, classroom: &str) -> ScheduleEntry {
        ScheduleEntry {
            start_time: start.to_string(),
            end_time: end.to_string(),
            subject: "Algorithms".to_string(),
            faculty: faculty.to_string(),
            classroom: classroom.to_string(),
        }
    }

    #[test]
    fn test_metrics_count_sessions_and_utilization() {
        let mut s = Schedule::draft("A1", "Computer Science", 3);
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Dr. Rao", "Room 101"));
        s.add_entry(Day::Tuesday, entry("10:00", "11:00", "Dr. Rao", "Room 101"));

        let m = ScheduleMetrics::calculate(&s, &catalog());
        assert_eq!(m.total_sessions, 2);
        assert_eq!(m.sessions_per_day["monday"], 1);
        assert_eq!(m.sessions_per_day["wednesday"], 0);
        assert_eq!(m.faculty_utilization, 0.5);
        assert_eq!(m.classroom_utilization, 0.5);
        assert!(m.is_conflict_free());
    }

    #[test]
    fn test_metrics_detect_double_booking() {
        let mut s = Schedule::draft("A1", "Computer Science", 3);
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Dr. Rao", "Room 101"));
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Dr. Rao", "Room 102"));
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Dr. Li", "Room 102"));

        let m = ScheduleMetrics::calculate(&s, &catalog());
        assert_eq!(m.faculty_conflicts, 1);
        assert_eq!(m.classroom_conflicts, 1);
        assert!(!m.is_conflict_free());

        let analysis = analyze_schedule(&s, &catalog(), &Constraints::default());
        assert_eq!(analysis.conflicts.len(), 2);
        assert!(analysis.conflicts.iter().any(|c| c.contains("Dr. Rao")));
        assert!(analysis.conflicts.iter().any(|c| c.contains("Room 102")));
    }

    #[test]
    fn test_capacity_suggestion_uses_enrollment() {
        let mut cat = catalog();
        cat.students = (0..45)
            .map(|i| Student::new(format!("S{i}"), format!("Student {i}"), "CS", 3))
            .collect();

        let mut s = Schedule::draft("A1", "Computer Science", 3);
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Dr. Rao", "Room 102"));

        let analysis = analyze_schedule(&s, &cat, &Constraints::default());
        assert!(analysis
            .suggestions
            .iter()
            .any(|m| m.contains("Room 102") && m.contains("45")));
    }

    #[test]
    fn test_idle_faculty_suggestion() {
        let mut s = Schedule::draft("A1", "Computer Science", 3);
        s.add_entry(Day::Monday, entry("09:00", "10:00", "Dr. Rao", "Room 101"));

        let analysis = analyze_schedule(&s, &catalog(), &Constraints::default());
        assert!(analysis.suggestions.iter().any(|m| m.contains("Dr. Li")));
    }

    #[test]
    fn test_long_teaching_run_flagged() {
        let mut s = Schedule::draft("A1", "Computer Science", 3);
        for (start, end) in [
            ("09:00", "10:00"),
            ("10:00", "11:00"),
            ("11:00", "12:00"),
            ("12:00", "13:00"),
        ] {
            s.add_entry(Day::Monday, entry(start, end, "Dr. Rao", "Room 101"));
        }

        let analysis = analyze_schedule(&s, &catalog(), &Constraints::default());
        assert!(analysis
            .improvements
            .iter()
            .any(|m| m.contains("4 consecutive hours") && m.contains("monday")));
    }

    #[test]
    fn test_empty_schedule_has_no_advice_noise() {
        let s = Schedule::draft("A1", "Computer Science", 3);
        let analysis = analyze_schedule(&s, &catalog(), &Constraints::default());
        assert!(analysis.conflicts.is_empty());
        assert!(analysis.improvements.is_empty());
        assert_eq!(analysis.metrics.total_sessions, 0);
        assert_eq!(analysis.metrics.daily_balance_stddev, 0.0);
    }
}
