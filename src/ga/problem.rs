//! Timetabling GA problem definition.
//!
//! Bridges the domain catalog to the generic GA loop: precomputes each
//! subject's eligible faculty and classrooms, builds random initial
//! candidates, and wires the operators and evaluator together.
//!
//! Subjects with no eligible faculty or classroom cannot be placed at all;
//! they are recorded as [`UnmetRequirement`]s at construction time and
//! their hours stay unassigned in every candidate, so callers see the gap
//! instead of a silently thinner timetable.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::{SlotAssignment, Timetable};
use super::fitness::{FitnessBreakdown, FitnessEvaluator};
use super::operators::{day_point_crossover, reassign_mutation, swap_mutation};
use crate::models::{Classroom, Constraints, Faculty, SlotGrid, Subject};

/// Precomputed assignable resources for one subject.
#[derive(Debug, Clone)]
pub struct Eligibility {
    /// Faculty IDs capable of teaching the subject.
    pub faculty_ids: Vec<String>,
    /// Classroom IDs matching the subject's lab requirement.
    pub classroom_ids: Vec<String>,
}

/// Why a subject's hours could not be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmetReason {
    /// No faculty member can teach the subject.
    NoEligibleFaculty,
    /// No classroom matches the subject's lab requirement.
    NoEligibleClassroom,
}

/// A subject whose weekly hours cannot be placed in any candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmetRequirement {
    /// The affected subject.
    pub subject_id: String,
    /// Weekly hours left unassigned.
    pub hours_unassigned: u32,
    /// Structural cause.
    pub reason: UnmetReason,
}

/// GA problem for one optimization run's scope.
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    subjects: Vec<Subject>,
    eligibility: HashMap<String, Eligibility>,
    unmet: Vec<UnmetRequirement>,
    evaluator: FitnessEvaluator,
}

impl TimetableProblem {
    /// Builds a problem from the fetched catalog collections.
    pub fn new(
        grid: SlotGrid,
        subjects: Vec<Subject>,
        faculty: Vec<Faculty>,
        classrooms: &[Classroom],
        constraints: Constraints,
    ) -> Self {
        let mut eligibility = HashMap::new();
        let mut unmet = Vec::new();

        for subject in &subjects {
            let mut faculty_ids: Vec<String> = faculty
                .iter()
                .filter(|f| f.can_teach(&subject.name))
                .map(|f| f.id.clone())
                .collect();
            if faculty_ids.is_empty() {
                // Department fallback: nobody lists the subject by name.
                faculty_ids = faculty
                    .iter()
                    .filter(|f| f.department == subject.department)
                    .map(|f| f.id.clone())
                    .collect();
            }

            let classroom_ids: Vec<String> = classrooms
                .iter()
                .filter(|c| c.suits_lab_requirement(subject.requires_lab))
                .map(|c| c.id.clone())
                .collect();

            if faculty_ids.is_empty() {
                unmet.push(UnmetRequirement {
                    subject_id: subject.id.clone(),
                    hours_unassigned: subject.weekly_hours,
                    reason: UnmetReason::NoEligibleFaculty,
                });
            } else if classroom_ids.is_empty() {
                unmet.push(UnmetRequirement {
                    subject_id: subject.id.clone(),
                    hours_unassigned: subject.weekly_hours,
                    reason: UnmetReason::NoEligibleClassroom,
                });
            } else {
                eligibility.insert(
                    subject.id.clone(),
                    Eligibility {
                        faculty_ids,
                        classroom_ids,
                    },
                );
            }
        }

        let evaluator = FitnessEvaluator::new(grid, faculty, constraints);
        Self {
            subjects,
            eligibility,
            unmet,
            evaluator,
        }
    }

    /// The subjects in scope.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Per-subject eligibility sets.
    pub fn eligibility(&self) -> &HashMap<String, Eligibility> {
        &self.eligibility
    }

    /// Subjects that can never be placed, with cause.
    pub fn unmet_requirements(&self) -> &[UnmetRequirement] {
        &self.unmet
    }

    /// The grid candidates are built over.
    pub fn grid(&self) -> &SlotGrid {
        self.evaluator.grid()
    }

    /// The fitness evaluator for this run.
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Builds one random feasible-ish candidate.
    ///
    /// Scatters each schedulable subject's required hours across uniformly
    /// random free cells with uniformly random eligible faculty/classrooms.
    /// When the free pool runs out, remaining hours stay unassigned for
    /// this candidate.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Timetable {
        let grid = self.evaluator.grid();
        let mut timetable = Timetable::empty(grid);
        let mut free: Vec<usize> = (0..grid.cell_count()).collect();

        for subject in &self.subjects {
            let Some(eligible) = self.eligibility.get(&subject.id) else {
                continue;
            };
            for _ in 0..subject.weekly_hours {
                if free.is_empty() {
                    break;
                }
                let pick = rng.random_range(0..free.len());
                let cell = free.swap_remove(pick);
                // Eligibility sets are non-empty by construction.
                let faculty_id = &eligible.faculty_ids[rng.random_range(0..eligible.faculty_ids.len())];
                let classroom_id =
                    &eligible.classroom_ids[rng.random_range(0..eligible.classroom_ids.len())];
                timetable.set_cell(
                    cell,
                    Some(SlotAssignment::new(
                        subject.id.clone(),
                        faculty_id.clone(),
                        classroom_id.clone(),
                    )),
                );
            }
        }
        timetable
    }

    /// Scalar fitness of a candidate.
    pub fn evaluate(&self, timetable: &Timetable) -> f64 {
        self.evaluator.score(timetable)
    }

    /// Itemized fitness of a candidate.
    pub fn breakdown(&self, timetable: &Timetable) -> FitnessBreakdown {
        self.evaluator.breakdown(timetable)
    }

    /// Day-granular single-point crossover of two parents.
    pub fn crossover<R: Rng>(&self, a: &Timetable, b: &Timetable, rng: &mut R) -> Timetable {
        day_point_crossover(a, b, rng)
    }

    /// Applies one mutation move, chosen uniformly between swap and
    /// reassign. May reintroduce hard violations by design.
    pub fn mutate<R: Rng>(&self, timetable: &mut Timetable, rng: &mut R) {
        if rng.random_bool(0.5) {
            swap_mutation(timetable, rng);
        } else {
            reassign_mutation(timetable, &self.eligibility, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn single_subject_problem() -> TimetableProblem {
        TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![Subject::new("CS301", "Algorithms", "CS", 3, 3)],
            vec![Faculty::new("F1", "Dr. Rao", "CS").with_subject("Algorithms")],
            &[Classroom::new("R1", "Room 1", 60)],
            Constraints::default(),
        )
    }

    #[test]
    fn test_initializer_places_required_hours() {
        let problem = single_subject_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let tt = problem.create_individual(&mut rng);

        assert_eq!(tt.occupied_count(), 3);
        assert_eq!(tt.hours_for_subject("CS301"), 3);
        for (_, a) in tt.occupied() {
            assert_eq!(a.faculty_id, "F1");
            assert_eq!(a.classroom_id, "R1");
        }
    }

    #[test]
    fn test_initializer_population_is_diverse() {
        let problem = single_subject_problem();
        let mut rng = SmallRng::seed_from_u64(7);
        let a = problem.create_individual(&mut rng);
        let b = problem.create_individual(&mut rng);
        // Three hours over thirty cells: identical placements are vanishingly
        // unlikely across two draws from one stream.
        assert!(!a.same_assignments(&b));
    }

    #[test]
    fn test_department_fallback_capability() {
        let problem = TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![Subject::new("CS301", "Algorithms", "CS", 3, 2)],
            vec![
                Faculty::new("F1", "Dr. Rao", "CS"), // no explicit subjects
                Faculty::new("F2", "Dr. Li", "EE"),
            ],
            &[Classroom::new("R1", "Room 1", 60)],
            Constraints::default(),
        );

        let eligible = &problem.eligibility()["CS301"];
        assert_eq!(eligible.faculty_ids, vec!["F1".to_string()]);
        assert!(problem.unmet_requirements().is_empty());
    }

    #[test]
    fn test_lab_subject_without_labs_is_unmet() {
        let problem = TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![Subject::new("CS302", "OS Lab", "CS", 3, 2).with_lab()],
            vec![Faculty::new("F1", "Dr. Rao", "CS").with_subject("OS Lab")],
            &[Classroom::new("R1", "Room 1", 60)], // general-purpose only
            Constraints::default(),
        );

        assert_eq!(
            problem.unmet_requirements(),
            &[UnmetRequirement {
                subject_id: "CS302".into(),
                hours_unassigned: 2,
                reason: UnmetReason::NoEligibleClassroom,
            }]
        );

        let mut rng = SmallRng::seed_from_u64(0);
        let tt = problem.create_individual(&mut rng);
        assert_eq!(tt.hours_for_subject("CS302"), 0);
    }

    #[test]
    fn test_lab_subject_only_gets_lab_rooms() {
        let problem = TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![Subject::new("CS302", "OS Lab", "CS", 3, 2).with_lab()],
            vec![Faculty::new("F1", "Dr. Rao", "CS").with_subject("OS Lab")],
            &[
                Classroom::new("R1", "Room 1", 60),
                Classroom::new("L1", "Lab 1", 30).as_lab(),
            ],
            Constraints::default(),
        );

        assert_eq!(
            problem.eligibility()["CS302"].classroom_ids,
            vec!["L1".to_string()]
        );
    }

    #[test]
    fn test_no_eligible_faculty_is_unmet() {
        let problem = TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![Subject::new("CS301", "Algorithms", "CS", 3, 4)],
            vec![Faculty::new("F2", "Dr. Li", "EE")], // wrong department, no subject
            &[Classroom::new("R1", "Room 1", 60)],
            Constraints::default(),
        );

        assert_eq!(problem.unmet_requirements().len(), 1);
        assert_eq!(
            problem.unmet_requirements()[0].reason,
            UnmetReason::NoEligibleFaculty
        );
    }

    #[test]
    fn test_initializer_stops_when_grid_full() {
        // 40 required hours into a 30-cell grid: the pool must cap placement.
        let problem = TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![
                Subject::new("S1", "A", "CS", 1, 20),
                Subject::new("S2", "B", "CS", 1, 20),
            ],
            vec![Faculty::new("F1", "Dr. Rao", "CS")
                .with_subject("A")
                .with_subject("B")],
            &[Classroom::new("R1", "Room 1", 60)],
            Constraints::default(),
        );

        let mut rng = SmallRng::seed_from_u64(1);
        let tt = problem.create_individual(&mut rng);
        assert_eq!(tt.occupied_count(), 30);
        assert_eq!(tt.hours_for_subject("S1"), 20);
        assert_eq!(tt.hours_for_subject("S2"), 10);
    }

    #[test]
    fn test_mutate_eventually_changes_candidate() {
        let problem = TimetableProblem::new(
            SlotGrid::weekdays(),
            vec![Subject::new("CS301", "Algorithms", "CS", 3, 4)],
            vec![
                Faculty::new("F1", "Dr. Rao", "CS").with_subject("Algorithms"),
                Faculty::new("F2", "Dr. Li", "CS").with_subject("Algorithms"),
            ],
            &[
                Classroom::new("R1", "Room 1", 60),
                Classroom::new("R2", "Room 2", 60),
            ],
            Constraints::default(),
        );

        let mut rng = SmallRng::seed_from_u64(3);
        let original = problem.create_individual(&mut rng);
        let mut changed = false;
        for _ in 0..100 {
            let mut candidate = original.clone();
            problem.mutate(&mut candidate, &mut rng);
            if !candidate.same_assignments(&original) {
                changed = true;
                break;
            }
        }
        assert!(changed, "mutation should perturb a non-empty candidate");
    }
}
