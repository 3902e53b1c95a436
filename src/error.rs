//! Error taxonomy.
//!
//! Catalog and persistence failures are fatal and carry the scope that
//! failed so callers can retry; constraint violations found during
//! optimization are never errors — they are scored by the evaluator and
//! surface as metrics or unmet-requirement warnings.

use thiserror::Error;

/// Failure while reading from the domain catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not serve a collection.
    #[error("failed to fetch {entity}: {reason}")]
    Fetch {
        /// Collection that failed ("subjects", "faculty", ...).
        entity: &'static str,
        /// Backend-supplied description.
        reason: String,
    },

    /// The requested department does not exist for this tenant.
    #[error("department '{0}' not found")]
    DepartmentNotFound(String),
}

/// Failure while persisting a schedule record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store rejected or failed the write.
    #[error("save failed: {reason}")]
    Save {
        /// Backend-supplied description.
        reason: String,
    },
}

/// Failure of one schedule-generation run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A catalog read failed before any optimization work began.
    #[error("catalog read failed for {department} semester {semester}: {source}")]
    DataFetchFailed {
        department: String,
        semester: u32,
        #[source]
        source: CatalogError,
    },

    /// Scope resolution failed before any optimization work began.
    #[error("department '{department}' not found")]
    DepartmentNotFound { department: String },

    /// The scope has no subjects, faculty, or classrooms to schedule.
    /// Returned instead of an empty, misleadingly valid schedule.
    #[error("no {entity} in scope {department} semester {semester}")]
    EmptyCatalog {
        entity: &'static str,
        department: String,
        semester: u32,
    },

    /// The final save failed; the computed schedule is lost. Inputs are
    /// retry-safe given a fixed seed.
    #[error("failed to persist schedule for {department} semester {semester}: {source}")]
    PersistenceFailed {
        department: String,
        semester: u32,
        #[source]
        source: StoreError,
    },
}
