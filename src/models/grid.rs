//! Weekly slot grid.
//!
//! The grid is the fixed universe of (day, time-slot) cells a timetable is
//! built over: five weekdays crossed with an ordered list of same-length
//! teaching intervals. It is pure structure — lookup, iteration, and a
//! flattened index for operators that ignore day boundaries. No validation
//! logic lives here.

use serde::{Deserialize, Serialize};

/// Teaching day. The week is fixed to Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Zero-based position within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
        }
    }

    /// Day from its week position.
    ///
    /// # Panics
    /// Panics if `index >= 5`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Lowercase day name, used as the key in the persisted schedule map.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
        }
    }
}

/// One teaching interval within a day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start of the interval (minutes since midnight).
    pub start_min: u16,
    /// End of the interval (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl TimeSlot {
    /// Creates a slot from start/end in minutes since midnight.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// `"HH:MM"` label for the slot start.
    pub fn start_label(&self) -> String {
        format_hhmm(self.start_min)
    }

    /// `"HH:MM"` label for the slot end.
    pub fn end_label(&self) -> String {
        format_hhmm(self.end_min)
    }

    /// Whether the slot lies fully inside `[window_start, window_end)`.
    pub fn within(&self, window_start: u16, window_end: u16) -> bool {
        self.start_min >= window_start && self.end_min <= window_end
    }
}

fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// The fixed weekly grid: `Day::ALL` crossed with an ordered slot list.
///
/// Cells are addressed either by `(Day, slot_index)` or by a flattened
/// cell index in `0..cell_count()`, laid out day-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    /// Ordered teaching intervals of one day, shared by every day.
    pub slots: Vec<TimeSlot>,
}

impl SlotGrid {
    /// Creates a grid from an explicit slot list.
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }

    /// Standard grid: six one-hour slots from 09:00 to 15:00.
    pub fn weekdays() -> Self {
        let slots = (0..6)
            .map(|i| TimeSlot::new(540 + i * 60, 600 + i * 60))
            .collect();
        Self { slots }
    }

    /// Number of days in the grid.
    #[inline]
    pub fn day_count(&self) -> usize {
        Day::ALL.len()
    }

    /// Number of slots per day.
    #[inline]
    pub fn slots_per_day(&self) -> usize {
        self.slots.len()
    }

    /// Total number of cells (`days × slots`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.day_count() * self.slots_per_day()
    }

    /// Flattened cell index for `(day, slot)`.
    #[inline]
    pub fn cell_index(&self, day: Day, slot: usize) -> usize {
        day.index() * self.slots_per_day() + slot
    }

    /// `(day, slot)` coordinate for a flattened cell index.
    #[inline]
    pub fn coordinate(&self, cell: usize) -> (Day, usize) {
        let per_day = self.slots_per_day();
        (Day::from_index(cell / per_day), cell % per_day)
    }

    /// Iterates all `(day, slot)` coordinates in flattened order.
    pub fn cells(&self) -> impl Iterator<Item = (Day, usize)> + '_ {
        Day::ALL
            .into_iter()
            .flat_map(move |day| (0..self.slots_per_day()).map(move |slot| (day, slot)))
    }

    /// Slot indices whose interval lies fully inside `[start, end)`.
    pub fn slots_within(&self, start: u16, end: u16) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.within(start, end))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::weekdays()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_roundtrip() {
        for day in Day::ALL {
            assert_eq!(Day::from_index(day.index()), day);
        }
    }

    #[test]
    fn test_day_names_lowercase() {
        assert_eq!(Day::Monday.name(), "monday");
        assert_eq!(Day::Friday.name(), "friday");
    }

    #[test]
    fn test_slot_labels() {
        let slot = TimeSlot::new(540, 600);
        assert_eq!(slot.start_label(), "09:00");
        assert_eq!(slot.end_label(), "10:00");

        let early = TimeSlot::new(5, 65);
        assert_eq!(early.start_label(), "00:05");
    }

    #[test]
    fn test_slot_within_window() {
        let slot = TimeSlot::new(720, 780); // 12:00–13:00
        assert!(slot.within(720, 780));
        assert!(slot.within(700, 800));
        assert!(!slot.within(720, 770));
        assert!(!slot.within(730, 780));
    }

    #[test]
    fn test_weekday_grid_shape() {
        let grid = SlotGrid::weekdays();
        assert_eq!(grid.day_count(), 5);
        assert_eq!(grid.slots_per_day(), 6);
        assert_eq!(grid.cell_count(), 30);
        assert_eq!(grid.slots[0], TimeSlot::new(540, 600));
        assert_eq!(grid.slots[5], TimeSlot::new(840, 900));
    }

    #[test]
    fn test_cell_index_roundtrip() {
        let grid = SlotGrid::weekdays();
        for (day, slot) in grid.cells() {
            let cell = grid.cell_index(day, slot);
            assert_eq!(grid.coordinate(cell), (day, slot));
        }
    }

    #[test]
    fn test_cells_order_is_day_major() {
        let grid = SlotGrid::weekdays();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0], (Day::Monday, 0));
        assert_eq!(cells[5], (Day::Monday, 5));
        assert_eq!(cells[6], (Day::Tuesday, 0));
        assert_eq!(cells[29], (Day::Friday, 5));
    }

    #[test]
    fn test_slots_within() {
        let grid = SlotGrid::weekdays();
        // 12:00–13:00 is the fourth slot of the standard grid.
        assert_eq!(grid.slots_within(720, 780), vec![3]);
        assert_eq!(grid.slots_within(0, 1440).len(), 6);
        assert!(grid.slots_within(0, 30).is_empty());
    }
}
