//! Timetabling domain models.
//!
//! Core data types for one optimization run: the immutable catalog inputs
//! (subjects, faculty, classrooms, students), the fixed weekly grid, the
//! run-level constraints, and the persisted schedule record produced at
//! the end of a run.

mod classroom;
mod constraints;
mod faculty;
mod grid;
mod roster;
mod schedule;
mod subject;

pub use classroom::Classroom;
pub use constraints::Constraints;
pub use faculty::{Faculty, FacultyPreferences};
pub use grid::{Day, SlotGrid, TimeSlot};
pub use roster::{Department, Student};
pub use schedule::{Schedule, ScheduleEntry, ScheduleStatus};
pub use subject::Subject;
