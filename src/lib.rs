//! Genetic-algorithm timetable generation for academic departments.
//!
//! Builds weekly class schedules over a fixed 5-day × 6-slot grid:
//! subjects get their required hours, faculty and classrooms are assigned
//! per session, and a generational GA trades off workload balance,
//! teaching-run length, lunch coverage, and preferences against hard
//! double-booking penalties.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Faculty`, `Classroom`,
//!   `Constraints`, the weekly `SlotGrid`, and the persisted `Schedule`
//! - **`catalog`**: `CatalogProvider` / `ScheduleStore` seams plus the
//!   in-memory reference implementation
//! - **`validation`**: Input integrity checks (duplicate IDs, zero-hour
//!   subjects, dangling preference references)
//! - **`ga`**: Encoding, operators, fitness, and the generational runner
//! - **`optimizer`**: `generate_schedule` and friends — the one-call API
//! - **`materializer`**: Winning candidate → persisted-shape record
//! - **`analysis`**: Read-only metrics and advice over a saved schedule
//!
//! # Example
//!
//! ```
//! use timetable_optimizer::catalog::InMemoryCatalog;
//! use timetable_optimizer::ga::GaConfig;
//! use timetable_optimizer::models::{Classroom, Department, Faculty, Subject};
//! use timetable_optimizer::optimizer::generate_schedule;
//!
//! let provider = InMemoryCatalog {
//!     departments: vec![Department::new("CS", "CS")],
//!     subjects: vec![Subject::new("CS301", "Algorithms", "CS", 3, 4)],
//!     faculty: vec![Faculty::new("F1", "Dr. Rao", "CS").with_subject("Algorithms")],
//!     classrooms: vec![Classroom::new("R1", "Room 101", 60)],
//!     students: Vec::new(),
//! };
//!
//! let config = GaConfig::default().with_seed(7).with_parallel(false);
//! let result = generate_schedule(&provider, "A1", "CS", 3, None, &config).unwrap();
//! assert_eq!(result.schedule.session_count(), 4);
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod ga;
pub mod materializer;
pub mod models;
pub mod optimizer;
pub mod validation;

pub use analysis::{analyze_schedule, ScheduleAnalysis, ScheduleMetrics};
pub use catalog::{Catalog, CatalogProvider, InMemoryCatalog, ScheduleStore, Scope};
pub use error::{CatalogError, ScheduleError, StoreError};
pub use ga::{GaConfig, GaResult, GaRunner, TimetableProblem, UnmetRequirement};
pub use optimizer::{
    generate_and_save, generate_schedule, generate_schedule_with_cancel, GeneratedSchedule,
};
