//! Timetable fitness evaluation.
//!
//! Scores a candidate from a base of 1000: hard violations (double-booked
//! faculty/rooms) are heavily penalized, soft violations (workload caps,
//! back-to-back teaching, lunch slots, preference mismatches) moderately,
//! and even daily distribution, subject spacing, and resource utilization
//! are rewarded. Higher is better; the final score clamps at zero.
//!
//! The evaluator is the sole enforcement point for constraints — operators
//! are free to produce violating candidates, which simply score worse.

use std::collections::{HashMap, HashSet};

use super::chromosome::{SlotAssignment, Timetable};
use crate::models::{Constraints, Day, Faculty, FacultyPreferences, SlotGrid};

/// Penalty and reward weights. Defaults are the shipped tuning.
#[derive(Debug, Clone)]
pub struct FitnessWeights {
    /// Starting score before penalties and rewards.
    pub base: f64,
    /// Per faculty double-booking conflict.
    pub faculty_conflict: f64,
    /// Per classroom double-booking conflict.
    pub classroom_conflict: f64,
    /// Per subject overlap. Reserved for future constraint types; the
    /// counter is always zero today.
    pub subject_overlap: f64,
    /// Per hour above a faculty member's daily cap.
    pub workload: f64,
    /// Per back-to-back pair for faculty who ask to avoid them.
    pub back_to_back: f64,
    /// Per occupied slot inside the lunch window.
    pub lunch_break: f64,
    /// Per room/day/slot preference mismatch.
    pub preference: f64,
    /// Multiplier on summed faculty utilization.
    pub faculty_utilization: f64,
    /// Multiplier on summed classroom utilization.
    pub classroom_utilization: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            base: 1000.0,
            faculty_conflict: 100.0,
            classroom_conflict: 100.0,
            subject_overlap: 50.0,
            workload: 15.0,
            back_to_back: 10.0,
            lunch_break: 20.0,
            preference: 5.0,
            faculty_utilization: 15.0,
            classroom_utilization: 10.0,
        }
    }
}

/// Itemized evaluation of one candidate.
///
/// Kept term-by-term so tests and schedule metrics can inspect individual
/// contributions instead of a single opaque scalar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessBreakdown {
    /// Faculty double-booking conflicts (group size − 1 per group).
    pub faculty_conflicts: usize,
    /// Classroom double-booking conflicts.
    pub classroom_conflicts: usize,
    /// Subject overlaps. Reserved; always zero.
    pub subject_overlaps: usize,
    /// Total hours above per-faculty daily caps, accumulated across days.
    pub workload_excess_hours: u32,
    /// Back-to-back pairs for avoid-flagged faculty.
    pub back_to_back_violations: usize,
    /// Occupied lunch-window slots.
    pub lunch_break_violations: usize,
    /// Room/day/slot preference mismatches.
    pub preference_violations: usize,
    /// `max(0, 10 − stddev(daily assignment counts))`.
    pub distribution_reward: f64,
    /// Σ over subjects of distinct days used.
    pub spacing_reward: f64,
    /// Σ over faculty of assigned-cell share of the grid.
    pub faculty_utilization: f64,
    /// Σ over classrooms of assigned-cell share of the grid.
    pub classroom_utilization: f64,
}

impl FitnessBreakdown {
    /// Folds the breakdown into the scalar score, clamped to ≥ 0.
    pub fn score(&self, weights: &FitnessWeights) -> f64 {
        let penalties = self.faculty_conflicts as f64 * weights.faculty_conflict
            + self.classroom_conflicts as f64 * weights.classroom_conflict
            + self.subject_overlaps as f64 * weights.subject_overlap
            + f64::from(self.workload_excess_hours) * weights.workload
            + self.back_to_back_violations as f64 * weights.back_to_back
            + self.lunch_break_violations as f64 * weights.lunch_break
            + self.preference_violations as f64 * weights.preference;
        let rewards = self.distribution_reward
            + self.spacing_reward
            + self.faculty_utilization * weights.faculty_utilization
            + self.classroom_utilization * weights.classroom_utilization;
        (weights.base - penalties + rewards).max(0.0)
    }

    /// Total hard conflicts (faculty + classroom).
    pub fn hard_conflicts(&self) -> usize {
        self.faculty_conflicts + self.classroom_conflicts + self.subject_overlaps
    }
}

/// Double-booking conflicts over `(key, cell)` pairs: each group sharing
/// the same key and cell coordinate contributes `group_size − 1`.
pub fn double_booking_conflicts<'a, I>(pairs: I) -> usize
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut groups: HashMap<(&str, usize), usize> = HashMap::new();
    for (key, cell) in pairs {
        *groups.entry((key, cell)).or_insert(0) += 1;
    }
    groups.values().map(|&n| n.saturating_sub(1)).sum()
}

/// Evaluates candidates for one fixed (grid, faculty, constraints) context.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    grid: SlotGrid,
    faculty: Vec<Faculty>,
    constraints: Constraints,
    weights: FitnessWeights,
    /// Slot indices falling fully inside the lunch window.
    lunch_slots: Vec<usize>,
    faculty_index: HashMap<String, usize>,
}

impl FitnessEvaluator {
    /// Builds an evaluator for a run's context.
    pub fn new(grid: SlotGrid, faculty: Vec<Faculty>, constraints: Constraints) -> Self {
        let lunch_slots =
            grid.slots_within(constraints.lunch_break_start, constraints.lunch_break_end);
        let faculty_index = faculty
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.clone(), i))
            .collect();
        Self {
            grid,
            faculty,
            constraints,
            weights: FitnessWeights::default(),
            lunch_slots,
            faculty_index,
        }
    }

    /// Overrides the default weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The weights in effect.
    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// The grid this evaluator scores against.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// The run constraints in effect.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Scalar fitness of a candidate (higher is better, ≥ 0).
    pub fn score(&self, timetable: &Timetable) -> f64 {
        self.breakdown(timetable).score(&self.weights)
    }

    /// Itemized evaluation of a candidate.
    pub fn breakdown(&self, timetable: &Timetable) -> FitnessBreakdown {
        let occupied: Vec<(usize, &SlotAssignment)> = timetable.occupied().collect();

        let faculty_conflicts = double_booking_conflicts(
            occupied.iter().map(|(cell, a)| (a.faculty_id.as_str(), *cell)),
        );
        let classroom_conflicts = double_booking_conflicts(
            occupied
                .iter()
                .map(|(cell, a)| (a.classroom_id.as_str(), *cell)),
        );

        let mut breakdown = FitnessBreakdown {
            faculty_conflicts,
            classroom_conflicts,
            ..FitnessBreakdown::default()
        };

        self.score_workload(timetable, &mut breakdown);
        self.score_back_to_back(timetable, &mut breakdown);
        self.score_lunch_break(timetable, &mut breakdown);
        self.score_preferences(timetable, &mut breakdown);
        self.score_rewards(timetable, &occupied, &mut breakdown);
        breakdown
    }

    fn preferences_of(&self, faculty_id: &str) -> Option<&FacultyPreferences> {
        let member = &self.faculty[*self.faculty_index.get(faculty_id)?];
        Some(self.constraints.preferences_for(faculty_id, &member.preferences))
    }

    fn score_workload(&self, timetable: &Timetable, breakdown: &mut FitnessBreakdown) {
        for member in &self.faculty {
            let cap = self.constraints.max_hours_for(&member.id, &member.preferences);
            for day in Day::ALL {
                let hours = timetable
                    .day_cells(day)
                    .iter()
                    .flatten()
                    .filter(|a| a.faculty_id == member.id)
                    .count() as u32;
                breakdown.workload_excess_hours += hours.saturating_sub(cap);
            }
        }
    }

    fn score_back_to_back(&self, timetable: &Timetable, breakdown: &mut FitnessBreakdown) {
        for day in Day::ALL {
            let cells = timetable.day_cells(day);
            for pair in cells.windows(2) {
                let (Some(first), Some(second)) = (&pair[0], &pair[1]) else {
                    continue;
                };
                if first.faculty_id != second.faculty_id {
                    continue;
                }
                if self
                    .preferences_of(&first.faculty_id)
                    .is_some_and(|p| p.avoid_back_to_back)
                {
                    breakdown.back_to_back_violations += 1;
                }
            }
        }
    }

    fn score_lunch_break(&self, timetable: &Timetable, breakdown: &mut FitnessBreakdown) {
        for day in Day::ALL {
            for &slot in &self.lunch_slots {
                if timetable.at(day, slot).is_some() {
                    breakdown.lunch_break_violations += 1;
                }
            }
        }
    }

    fn score_preferences(&self, timetable: &Timetable, breakdown: &mut FitnessBreakdown) {
        for (cell, assignment) in timetable.occupied() {
            let (day, slot) = self.grid.coordinate(cell);

            if let Some(preferred_room) =
                self.constraints.room_preferences.get(&assignment.subject_id)
            {
                if *preferred_room != assignment.classroom_id {
                    breakdown.preference_violations += 1;
                }
            }

            let Some(prefs) = self.preferences_of(&assignment.faculty_id) else {
                continue;
            };
            if !prefs.preferred_days.is_empty() && !prefs.preferred_days.contains(&day) {
                breakdown.preference_violations += 1;
            }
            if !prefs.preferred_slots.is_empty() && !prefs.preferred_slots.contains(&slot) {
                breakdown.preference_violations += 1;
            }
        }
    }

    fn score_rewards(
        &self,
        timetable: &Timetable,
        occupied: &[(usize, &SlotAssignment)],
        breakdown: &mut FitnessBreakdown,
    ) {
        // Even distribution: flatter daily load is better.
        let daily_counts: Vec<f64> = Day::ALL
            .into_iter()
            .map(|day| timetable.day_cells(day).iter().flatten().count() as f64)
            .collect();
        breakdown.distribution_reward = (10.0 - stddev(&daily_counts)).max(0.0);

        // Subject spacing: distinct days per subject.
        let mut subject_days: HashMap<&str, HashSet<usize>> = HashMap::new();
        for (cell, assignment) in occupied {
            let (day, _) = self.grid.coordinate(*cell);
            subject_days
                .entry(assignment.subject_id.as_str())
                .or_default()
                .insert(day.index());
        }
        breakdown.spacing_reward = subject_days.values().map(|d| d.len() as f64).sum();

        // Utilization: share of the grid each resource carries.
        let total_cells = self.grid.cell_count() as f64;
        let mut per_faculty: HashMap<&str, usize> = HashMap::new();
        let mut per_classroom: HashMap<&str, usize> = HashMap::new();
        for (_, assignment) in occupied {
            *per_faculty.entry(assignment.faculty_id.as_str()).or_insert(0) += 1;
            *per_classroom
                .entry(assignment.classroom_id.as_str())
                .or_insert(0) += 1;
        }
        breakdown.faculty_utilization =
            per_faculty.values().map(|&n| n as f64 / total_cells).sum();
        breakdown.classroom_utilization =
            per_classroom.values().map(|&n| n as f64 / total_cells).sum();
    }
}

/// Population standard deviation.
fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
