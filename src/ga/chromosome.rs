//! Timetable chromosome.
//!
//! One candidate is a complete, independently evaluable weekly timetable:
//! a flat grid of optional (subject, faculty, classroom) assignments plus
//! a cached fitness. Higher fitness = better (maximization convention).
//!
//! Candidates are owned exclusively by the run that created them. `Clone`
//! is the structurally exact deep copy used for elitism, selection, and
//! crossover — operators never alias another candidate's storage.

use serde::{Deserialize, Serialize};

use crate::models::{Day, SlotGrid};

/// One (subject, faculty, classroom) triple attached to a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Assigned subject ID.
    pub subject_id: String,
    /// Assigned faculty ID.
    pub faculty_id: String,
    /// Assigned classroom ID.
    pub classroom_id: String,
}

impl SlotAssignment {
    /// Creates an assignment triple.
    pub fn new(
        subject_id: impl Into<String>,
        faculty_id: impl Into<String>,
        classroom_id: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            faculty_id: faculty_id.into(),
            classroom_id: classroom_id.into(),
        }
    }
}

/// A complete timetable proposal over the fixed weekly grid.
///
/// Cells are laid out day-major: cell `day.index() * slots_per_day + slot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Assignment per cell; `None` = free slot.
    cells: Vec<Option<SlotAssignment>>,
    /// Slots per day, for (day, slot) ↔ cell index conversion.
    slots_per_day: usize,
    /// Cached fitness; `NEG_INFINITY` until evaluated.
    pub fitness: f64,
}

impl Timetable {
    /// Creates an all-free timetable for the given grid.
    pub fn empty(grid: &SlotGrid) -> Self {
        Self {
            cells: vec![None; grid.cell_count()],
            slots_per_day: grid.slots_per_day(),
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Slots per day.
    #[inline]
    pub fn slots_per_day(&self) -> usize {
        self.slots_per_day
    }

    /// Total cell count.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Assignment at a flattened cell index.
    #[inline]
    pub fn cell(&self, index: usize) -> Option<&SlotAssignment> {
        self.cells[index].as_ref()
    }

    /// Assignment at a (day, slot) coordinate.
    #[inline]
    pub fn at(&self, day: Day, slot: usize) -> Option<&SlotAssignment> {
        self.cells[day.index() * self.slots_per_day + slot].as_ref()
    }

    /// Writes a cell by flattened index.
    #[inline]
    pub fn set_cell(&mut self, index: usize, assignment: Option<SlotAssignment>) {
        self.cells[index] = assignment;
    }

    /// Writes a cell by (day, slot) coordinate.
    pub fn set(&mut self, day: Day, slot: usize, assignment: Option<SlotAssignment>) {
        self.cells[day.index() * self.slots_per_day + slot] = assignment;
    }

    /// Swaps two cells' contents in place.
    pub fn swap_cells(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    /// The cells of one day, in slot order.
    pub fn day_cells(&self, day: Day) -> &[Option<SlotAssignment>] {
        let start = day.index() * self.slots_per_day;
        &self.cells[start..start + self.slots_per_day]
    }

    /// Copies one whole day from another timetable.
    ///
    /// # Panics
    /// Panics if the two timetables have different shapes.
    pub fn copy_day_from(&mut self, other: &Timetable, day: Day) {
        assert_eq!(self.slots_per_day, other.slots_per_day);
        let start = day.index() * self.slots_per_day;
        self.cells[start..start + self.slots_per_day]
            .clone_from_slice(&other.cells[start..start + self.slots_per_day]);
    }

    /// Iterates `(cell_index, assignment)` over occupied cells.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &SlotAssignment)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|a| (i, a)))
    }

    /// Flattened indices of occupied cells.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|_| i))
            .collect()
    }

    /// Flattened indices of free cells.
    pub fn free_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| if c.is_none() { Some(i) } else { None })
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied cells assigned to a subject.
    pub fn hours_for_subject(&self, subject_id: &str) -> usize {
        self.occupied()
            .filter(|(_, a)| a.subject_id == subject_id)
            .count()
    }

    /// Whether two timetables carry identical assignments (fitness ignored).
    pub fn same_assignments(&self, other: &Timetable) -> bool {
        self.cells == other.cells
    }
}
