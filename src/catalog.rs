//! Domain catalog adapter.
//!
//! The optimizer never talks to a data store directly. [`CatalogProvider`]
//! is the read seam — implementations return tenant-scoped, deduplicated
//! collections — and [`ScheduleStore`] is the write seam for the final
//! record. [`Catalog`] snapshots everything once, up front, so the
//! generational loop runs without I/O.
//!
//! [`InMemoryCatalog`] is the reference implementation used by tests.

use crate::error::{CatalogError, StoreError};
use crate::models::{Classroom, Department, Faculty, Schedule, Student, Subject};

/// Scope of one optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Department name.
    pub department: String,
    /// Semester number.
    pub semester: u32,
}

impl Scope {
    /// Creates a scope.
    pub fn new(department: impl Into<String>, semester: u32) -> Self {
        Self {
            department: department.into(),
            semester,
        }
    }
}

/// Read-only view over the institution's domain entities for one tenant.
///
/// Implementations must return already-deduplicated collections; the
/// optimizer performs no tenant filtering beyond department/semester.
pub trait CatalogProvider {
    /// All faculty of the tenant.
    fn list_faculty(&self, admin_id: &str) -> Result<Vec<Faculty>, CatalogError>;

    /// All students of the tenant.
    fn list_students(&self, admin_id: &str) -> Result<Vec<Student>, CatalogError>;

    /// Subjects of the given (department, semester) scope.
    fn list_subjects(&self, admin_id: &str, scope: &Scope) -> Result<Vec<Subject>, CatalogError>;

    /// All classrooms of the tenant.
    fn list_classrooms(&self, admin_id: &str) -> Result<Vec<Classroom>, CatalogError>;

    /// Resolves a department by name.
    fn get_department(&self, admin_id: &str, name: &str) -> Result<Department, CatalogError>;
}

/// Write seam for the final schedule record.
pub trait ScheduleStore {
    /// Persists a schedule, superseding any existing draft for its scope.
    fn save_schedule(&self, schedule: &Schedule) -> Result<(), StoreError>;
}

/// One-shot snapshot of everything a run needs, fetched before the
/// optimization loop starts.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Resolved department.
    pub department: Department,
    /// Subjects in scope.
    pub subjects: Vec<Subject>,
    /// Faculty of the tenant.
    pub faculty: Vec<Faculty>,
    /// Classrooms serving the scope's department.
    pub classrooms: Vec<Classroom>,
    /// Students enrolled in the scope.
    pub students: Vec<Student>,
}

impl Catalog {
    /// Fetches all collections for a scope.
    ///
    /// Classrooms are narrowed to those serving the department (or
    /// department-agnostic rooms); students to the exact scope.
    pub fn fetch<P: CatalogProvider>(
        provider: &P,
        admin_id: &str,
        scope: &Scope,
    ) -> Result<Self, CatalogError> {
        let department = provider.get_department(admin_id, &scope.department)?;
        let subjects = provider.list_subjects(admin_id, scope)?;
        let faculty = provider.list_faculty(admin_id)?;
        let classrooms = provider
            .list_classrooms(admin_id)?
            .into_iter()
            .filter(|c| c.serves_department(&scope.department))
            .collect();
        let students = provider
            .list_students(admin_id)?
            .into_iter()
            .filter(|s| s.department == scope.department && s.semester == scope.semester)
            .collect();

        Ok(Self {
            department,
            subjects,
            faculty,
            classrooms,
            students,
        })
    }
}

/// In-memory catalog for tests and examples.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// Departments of the tenant.
    pub departments: Vec<Department>,
    /// Subjects of the tenant, all scopes.
    pub subjects: Vec<Subject>,
    /// Faculty of the tenant.
    pub faculty: Vec<Faculty>,
    /// Classrooms of the tenant.
    pub classrooms: Vec<Classroom>,
    /// Students of the tenant.
    pub students: Vec<Student>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn list_faculty(&self, _admin_id: &str) -> Result<Vec<Faculty>, CatalogError> {
        Ok(self.faculty.clone())
    }

    fn list_students(&self, _admin_id: &str) -> Result<Vec<Student>, CatalogError> {
        Ok(self.students.clone())
    }

    fn list_subjects(&self, _admin_id: &str, scope: &Scope) -> Result<Vec<Subject>, CatalogError> {
        Ok(self
            .subjects
            .iter()
            .filter(|s| s.department == scope.department && s.semester == scope.semester)
            .cloned()
            .collect())
    }

    fn list_classrooms(&self, _admin_id: &str) -> Result<Vec<Classroom>, CatalogError> {
        Ok(self.classrooms.clone())
    }

    fn get_department(&self, _admin_id: &str, name: &str) -> Result<Department, CatalogError> {
        self.departments
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::DepartmentNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog {
            departments: vec![Department::new("CS", "CS")],
            subjects: vec![
                Subject::new("CS301", "Algorithms", "CS", 3, 4),
                Subject::new("CS101", "Intro", "CS", 1, 3),
                Subject::new("EE201", "Circuits", "EE", 3, 3),
            ],
            faculty: vec![Faculty::new("F1", "Dr. Rao", "CS")],
            classrooms: vec![
                Classroom::new("R1", "Room 1", 60),
                Classroom::new("R2", "Room 2", 60).with_department("EE"),
            ],
            students: vec![
                Student::new("S1", "Asha", "CS", 3),
                Student::new("S2", "Ben", "CS", 1),
            ],
        }
    }

    #[test]
    fn test_fetch_scopes_collections() {
        let provider = sample_catalog();
        let catalog = Catalog::fetch(&provider, "A1", &Scope::new("CS", 3)).unwrap();

        assert_eq!(catalog.subjects.len(), 1);
        assert_eq!(catalog.subjects[0].id, "CS301");
        // EE-only room filtered out, agnostic room kept.
        assert_eq!(catalog.classrooms.len(), 1);
        assert_eq!(catalog.classrooms[0].id, "R1");
        assert_eq!(catalog.students.len(), 1);
        assert_eq!(catalog.students[0].id, "S1");
    }

    #[test]
    fn test_fetch_unknown_department() {
        let provider = sample_catalog();
        let err = Catalog::fetch(&provider, "A1", &Scope::new("ME", 1)).unwrap_err();
        assert!(matches!(err, CatalogError::DepartmentNotFound(name) if name == "ME"));
    }
}
