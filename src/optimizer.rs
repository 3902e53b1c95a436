//! Schedule generation entry points.
//!
//! [`generate_schedule`] is the one-call pipeline: snapshot the catalog,
//! validate it, run the GA, materialize the winner, and compute metrics.
//! Catalog integrity findings are logged and tolerated; only an empty
//! scope or an I/O failure aborts a run. A successful call always returns
//! a best-effort schedule, so callers should inspect
//! [`GeneratedSchedule::metrics`] before publishing.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::ScheduleMetrics;
use crate::catalog::{Catalog, CatalogProvider, ScheduleStore, Scope};
use crate::error::{CatalogError, ScheduleError};
use crate::ga::{GaConfig, GaRunner, TimetableProblem, UnmetRequirement};
use crate::materializer::materialize;
use crate::models::{Constraints, Schedule};
use crate::validation::validate_catalog;

/// Everything one optimization run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    /// The materialized draft schedule.
    pub schedule: Schedule,
    /// Quality indicators computed over the record.
    pub metrics: ScheduleMetrics,
    /// Subjects that could not be placed, with cause.
    pub unmet_requirements: Vec<UnmetRequirement>,
    /// Winning candidate's fitness.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Whether the run stopped on stagnation.
    pub stagnated: bool,
    /// Best fitness after each generation.
    pub fitness_history: Vec<f64>,
}

/// Generates a draft schedule for one (department, semester) scope.
pub fn generate_schedule<P: CatalogProvider>(
    provider: &P,
    admin_id: &str,
    department: &str,
    semester: u32,
    constraints: Option<Constraints>,
    config: &GaConfig,
) -> Result<GeneratedSchedule, ScheduleError> {
    generate_schedule_with_cancel(
        provider, admin_id, department, semester, constraints, config, None,
    )
}

/// Same as [`generate_schedule`], but stoppable between generations via
/// the cancellation flag. A cancelled run still returns its best-so-far
/// schedule.
pub fn generate_schedule_with_cancel<P: CatalogProvider>(
    provider: &P,
    admin_id: &str,
    department: &str,
    semester: u32,
    constraints: Option<Constraints>,
    config: &GaConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<GeneratedSchedule, ScheduleError> {
    let scope = Scope::new(department, semester);
    let catalog = Catalog::fetch(provider, admin_id, &scope).map_err(|e| match e {
        CatalogError::DepartmentNotFound(name) => {
            ScheduleError::DepartmentNotFound { department: name }
        }
        other => ScheduleError::DataFetchFailed {
            department: department.to_string(),
            semester,
            source: other,
        },
    })?;

    ensure_non_empty(&catalog, department, semester)?;

    let constraints = constraints.unwrap_or_default();
    if let Err(findings) = validate_catalog(
        &catalog.subjects,
        &catalog.faculty,
        &catalog.classrooms,
        &constraints,
    ) {
        for finding in &findings {
            log::warn!("catalog integrity: {}", finding.message);
        }
    }

    let problem = TimetableProblem::new(
        crate::models::SlotGrid::weekdays(),
        catalog.subjects.clone(),
        catalog.faculty.clone(),
        &catalog.classrooms,
        constraints,
    );
    for unmet in problem.unmet_requirements() {
        log::warn!(
            "subject {} cannot be placed ({:?}), {} hour(s) unassigned",
            unmet.subject_id,
            unmet.reason,
            unmet.hours_unassigned
        );
    }

    log::info!(
        "optimizing {} semester {}: {} subjects, {} faculty, {} classrooms",
        department,
        semester,
        catalog.subjects.len(),
        catalog.faculty.len(),
        catalog.classrooms.len()
    );
    let result = GaRunner::run_with_cancel(&problem, config, cancel);
    log::info!(
        "run finished after {} generation(s): best fitness {:.1}{}{}",
        result.generations,
        result.best_fitness,
        if result.stagnated { " (stagnated)" } else { "" },
        if result.cancelled { " (cancelled)" } else { "" },
    );

    let schedule = materialize(&result.best, problem.grid(), admin_id, &catalog, semester);
    let metrics = ScheduleMetrics::calculate(&schedule, &catalog);

    Ok(GeneratedSchedule {
        schedule,
        metrics,
        unmet_requirements: problem.unmet_requirements().to_vec(),
        best_fitness: result.best_fitness,
        generations: result.generations,
        stagnated: result.stagnated,
        fitness_history: result.fitness_history,
    })
}

/// Generates a schedule and persists it through the store.
pub fn generate_and_save<P: CatalogProvider, S: ScheduleStore>(
    provider: &P,
    store: &S,
    admin_id: &str,
    department: &str,
    semester: u32,
    constraints: Option<Constraints>,
    config: &GaConfig,
) -> Result<GeneratedSchedule, ScheduleError> {
    let generated = generate_schedule(provider, admin_id, department, semester, constraints, config)?;
    store
        .save_schedule(&generated.schedule)
        .map_err(|source| ScheduleError::PersistenceFailed {
            department: department.to_string(),
            semester,
            source,
        })?;
    Ok(generated)
}

fn ensure_non_empty(
    catalog: &Catalog,
    department: &str,
    semester: u32,
) -> Result<(), ScheduleError> {
    let empty = |entity: &'static str| ScheduleError::EmptyCatalog {
        entity,
        department: department.to_string(),
        semester,
    };
    if catalog.subjects.is_empty() {
        return Err(empty("subjects"));
    }
    if catalog.faculty.is_empty() {
        return Err(empty("faculty"));
    }
    if catalog.classrooms.is_empty() {
        return Err(empty("classrooms"));
    }
    Ok(())
}
