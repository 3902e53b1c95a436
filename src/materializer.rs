//! Chromosome to schedule record conversion.
//!
//! Walks the best timetable's grid in day-major order and emits a draft
//! [`Schedule`] with display names and `"HH:MM"` session times. The
//! materializer never reorders or filters assignments; whatever the GA
//! left in the grid is what the record shows.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::ga::Timetable;
use crate::models::{Schedule, ScheduleEntry, SlotGrid};

/// Converts the winning timetable into a persisted-shape draft schedule.
///
/// IDs missing from the catalog are carried through verbatim so the
/// record still shows which assignment was affected.
pub fn materialize(
    timetable: &Timetable,
    grid: &SlotGrid,
    admin_id: &str,
    catalog: &Catalog,
    semester: u32,
) -> Schedule {
    let subject_names: HashMap<&str, &str> = catalog
        .subjects
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();
    let faculty_names: HashMap<&str, &str> = catalog
        .faculty
        .iter()
        .map(|f| (f.id.as_str(), f.name.as_str()))
        .collect();
    let classroom_names: HashMap<&str, &str> = catalog
        .classrooms
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut schedule = Schedule::draft(admin_id, &catalog.department.name, semester);
    for (cell, assignment) in timetable.occupied() {
        let (day, slot_index) = grid.coordinate(cell);
        let slot = &grid.slots[slot_index];
        schedule.add_entry(
            day,
            ScheduleEntry {
                start_time: slot.start_label(),
                end_time: slot.end_label(),
                subject: resolve(&subject_names, &assignment.subject_id),
                faculty: resolve(&faculty_names, &assignment.faculty_id),
                classroom: resolve(&classroom_names, &assignment.classroom_id),
            },
        );
    }
    schedule
}

fn resolve(names: &HashMap<&str, &str>, id: &str) -> String {
    names.get(id).copied().unwrap_or(id).to_string()
}
