//! Genetic operators for timetables.
//!
//! Tournament selection, single-point day-granular crossover, and the two
//! mutation moves (swap, reassign). Operators are deliberately unbiased:
//! both mutation moves may reintroduce hard-constraint violations — the
//! fitness evaluator, not the operator, is the sole enforcement mechanism.

use std::collections::HashMap;

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::chromosome::Timetable;
use super::problem::Eligibility;
use crate::models::Day;

/// Tournament selection: draw `k` candidates uniformly at random with
/// replacement, return the index of the fittest draw.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_select<R: Rng>(population: &[Timetable], k: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

/// Single-point, day-granular crossover.
///
/// Picks a random day index `k` and builds an offspring from parent A's
/// days `[0, k)` and parent B's days `[k, 5)`. Days are copied whole, so
/// each day's internal consistency survives crossover untouched.
pub fn day_point_crossover<R: Rng>(a: &Timetable, b: &Timetable, rng: &mut R) -> Timetable {
    let cut = rng.random_range(0..Day::ALL.len());
    let mut child = a.clone();
    child.fitness = f64::NEG_INFINITY;
    for day in Day::ALL.into_iter().skip(cut) {
        child.copy_day_from(b, day);
    }
    child
}

/// Swap move: exchange the assignment triples of two distinct occupied
/// cells. No-op when fewer than two cells are occupied.
pub fn swap_mutation<R: Rng>(timetable: &mut Timetable, rng: &mut R) {
    let occupied = timetable.occupied_indices();
    if occupied.len() < 2 {
        return;
    }
    let i = rng.random_range(0..occupied.len());
    let mut j = rng.random_range(0..occupied.len() - 1);
    if j >= i {
        j += 1;
    }
    timetable.swap_cells(occupied[i], occupied[j]);
}

/// Reassign move: pick one random cell; when it carries a subject, re-roll
/// its faculty and classroom from that subject's eligibility sets, leaving
/// subject and slot untouched. No-op on a free cell or unknown subject.
pub fn reassign_mutation<R: Rng>(
    timetable: &mut Timetable,
    eligibility: &HashMap<String, Eligibility>,
    rng: &mut R,
) {
    let cell = rng.random_range(0..timetable.cell_count());
    let mut assignment = match timetable.cell(cell) {
        Some(a) => a.clone(),
        None => return,
    };
    let Some(eligible) = eligibility.get(&assignment.subject_id) else {
        return;
    };
    let (Some(faculty_id), Some(classroom_id)) = (
        eligible.faculty_ids.choose(rng),
        eligible.classroom_ids.choose(rng),
    ) else {
        return;
    };

    assignment.faculty_id = faculty_id.clone();
    assignment.classroom_id = classroom_id.clone();
    timetable.set_cell(cell, Some(assignment));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::chromosome::SlotAssignment;
    use crate::models::SlotGrid;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_timetable(seed: u64) -> Timetable {
        let grid = SlotGrid::weekdays();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tt = Timetable::empty(&grid);
        for _ in 0..8 {
            let cell = rng.random_range(0..tt.cell_count());
            let n = rng.random_range(0..3u32);
            tt.set_cell(
                cell,
                Some(SlotAssignment::new(
                    format!("S{n}"),
                    format!("F{n}"),
                    format!("R{n}"),
                )),
            );
        }
        tt
    }

    #[test]
    fn test_tournament_prefers_fitter() {
        let grid = SlotGrid::weekdays();
        let mut population: Vec<Timetable> =
            (0..10).map(|_| Timetable::empty(&grid)).collect();
        for (i, tt) in population.iter_mut().enumerate() {
            tt.fitness = i as f64;
        }

        // Tournament of the full population size always finds the best.
        let mut rng = SmallRng::seed_from_u64(7);
        let mut saw_best = false;
        for _ in 0..50 {
            let idx = tournament_select(&population, 10, &mut rng);
            if idx == 9 {
                saw_best = true;
            }
            assert!(population[idx].fitness >= 0.0);
        }
        assert!(saw_best);
    }

    #[test]
    fn test_crossover_preserves_day_integrity() {
        let a = sample_timetable(1);
        let b = sample_timetable(2);
        let mut rng = SmallRng::seed_from_u64(3);

        let child = day_point_crossover(&a, &b, &mut rng);
        // Every day of the child equals that whole day of exactly one parent.
        for day in Day::ALL {
            let d = child.day_cells(day);
            assert!(d == a.day_cells(day) || d == b.day_cells(day));
        }
    }

    #[test]
    fn test_swap_exchanges_two_cells() {
        let mut tt = Timetable::empty(&SlotGrid::weekdays());
        tt.set_cell(0, Some(SlotAssignment::new("S1", "F1", "R1")));
        tt.set_cell(15, Some(SlotAssignment::new("S2", "F2", "R2")));
        let before = tt.clone();

        let mut rng = SmallRng::seed_from_u64(0);
        swap_mutation(&mut tt, &mut rng);

        assert_eq!(tt.occupied_count(), 2);
        assert_eq!(tt.cell(0).unwrap().subject_id, "S2");
        assert_eq!(tt.cell(15).unwrap().subject_id, "S1");
        assert!(!tt.same_assignments(&before));
    }

    #[test]
    fn test_swap_noop_on_single_assignment() {
        let mut tt = Timetable::empty(&SlotGrid::weekdays());
        tt.set_cell(4, Some(SlotAssignment::new("S1", "F1", "R1")));
        let before = tt.clone();

        let mut rng = SmallRng::seed_from_u64(0);
        swap_mutation(&mut tt, &mut rng);
        assert!(tt.same_assignments(&before));
    }

    #[test]
    fn test_reassign_keeps_subject_and_slot() {
        let mut tt = Timetable::empty(&SlotGrid::weekdays());
        for i in 0..tt.cell_count() {
            tt.set_cell(i, Some(SlotAssignment::new("S1", "F1", "R1")));
        }
        let eligibility = HashMap::from([(
            "S1".to_string(),
            Eligibility {
                faculty_ids: vec!["F2".into()],
                classroom_ids: vec!["R2".into()],
            },
        )]);

        let mut rng = SmallRng::seed_from_u64(0);
        reassign_mutation(&mut tt, &eligibility, &mut rng);

        // All cells still carry S1; exactly one was re-rolled to F2/R2.
        assert_eq!(tt.hours_for_subject("S1"), tt.cell_count());
        let rerolled = tt
            .occupied()
            .filter(|(_, a)| a.faculty_id == "F2" && a.classroom_id == "R2")
            .count();
        assert_eq!(rerolled, 1);
    }

    proptest! {
        #[test]
        fn prop_self_crossover_is_identity(seed in 0u64..500, tt_seed in 0u64..100) {
            let a = sample_timetable(tt_seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let child = day_point_crossover(&a, &a, &mut rng);
            prop_assert!(child.same_assignments(&a));
        }

        #[test]
        fn prop_swap_preserves_multiset(seed in 0u64..500) {
            let mut tt = sample_timetable(11);
            let before_count = tt.occupied_count();
            let mut before: Vec<_> = tt.occupied().map(|(_, a)| a.clone()).collect();
            before.sort_by(|x, y| x.subject_id.cmp(&y.subject_id).then(x.faculty_id.cmp(&y.faculty_id)).then(x.classroom_id.cmp(&y.classroom_id)));

            let mut rng = SmallRng::seed_from_u64(seed);
            swap_mutation(&mut tt, &mut rng);

            let mut after: Vec<_> = tt.occupied().map(|(_, a)| a.clone()).collect();
            after.sort_by(|x, y| x.subject_id.cmp(&y.subject_id).then(x.faculty_id.cmp(&y.faculty_id)).then(x.classroom_id.cmp(&y.classroom_id)));
            prop_assert_eq!(tt.occupied_count(), before_count);
            prop_assert_eq!(before, after);
        }
    }
}
