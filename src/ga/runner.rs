//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//! Fitness is maximized; the best candidate ever seen is kept as an owned
//! copy so a later generation can never lose it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::chromosome::Timetable;
use super::config::GaConfig;
use super::operators::tournament_select;
use super::problem::TimetableProblem;

/// Result of a GA optimization run.
///
/// Contains the best timetable found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best timetable found during the entire run.
    pub best: Timetable,

    /// Best fitness value (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness at the end of each generation, starting with the
    /// initial population.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = TimetableProblem::new(grid, subjects, faculty, &rooms, constraints);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {:.1}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(problem: &TimetableProblem, config: &GaConfig) -> GaResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// at the start of the next generation and returns the best timetable
    /// found so far.
    pub fn run_with_cancel(
        problem: &TimetableProblem,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<Timetable> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness);

        let mut stagnation_counter = 0usize;
        let mut cancelled = false;
        let mut generations = 0usize;
        let mut stagnated = false;

        for generation in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Best first.
            population.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut next_gen: Vec<Timetable> = population[..config.elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = tournament_select(&population, config.tournament_size, &mut rng);
                let p2 = tournament_select(&population, config.tournament_size, &mut rng);

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&population[p1], &population[p2], &mut rng)
                } else {
                    population[p1].clone()
                };

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(&mut child, &mut rng);
                }

                next_gen.push(child);
            }

            // Elites keep their scores; only offspring need evaluation.
            evaluate_slice(problem, &mut next_gen[config.elite_count..], config.parallel);
            population = next_gen;
            generations = generation + 1;

            let gen_best = find_best(&population);
            if gen_best.fitness > best.fitness {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness);

            log::debug!(
                "generation {}: best fitness {:.1} (stagnant for {})",
                generations,
                best.fitness,
                stagnation_counter
            );

            if config.stagnation_patience > 0 && stagnation_counter >= config.stagnation_patience {
                stagnated = true;
                break;
            }
        }

        GaResult {
            best_fitness: best.fitness,
            best,
            generations,
            stagnated,
            cancelled,
            fitness_history,
        }
    }
}

fn evaluate_population(problem: &TimetableProblem, population: &mut [Timetable], parallel: bool) {
    evaluate_slice(problem, population, parallel);
}

fn evaluate_slice(problem: &TimetableProblem, slice: &mut [Timetable], parallel: bool) {
    if parallel {
        slice.par_iter_mut().for_each(|tt| {
            tt.fitness = problem.evaluate(tt);
        });
    } else {
        for tt in slice.iter_mut() {
            tt.fitness = problem.evaluate(tt);
        }
    }
}

fn find_best(population: &[Timetable]) -> &Timetable {
    population
        .iter()
        .max_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population is never empty")
}
