//! Repeated-run evaluation and solver comparison
//!
//! Q-learning's outcome depends on its random stream, so a single run says
//! little. These helpers train once per seed and aggregate, and line the
//! results up against the breadth-first optimum.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result, bfs,
    grid::Grid,
    path::SearchOutcome,
    ports::Solver,
    q_learning::{self, QLearningConfig},
};

/// How often seeded Q-learning runs produced a greedy path to the goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessReport {
    pub runs: usize,
    pub successes: usize,
    pub success_rate: f64,
    /// Step counts of the successful runs, in seed order
    pub path_steps: Vec<usize>,
}

impl SuccessReport {
    fn new(runs: usize, path_steps: Vec<usize>) -> Self {
        let successes = path_steps.len();
        let success_rate = if runs > 0 {
            successes as f64 / runs as f64
        } else {
            0.0
        };
        Self {
            runs,
            successes,
            success_rate,
            path_steps,
        }
    }

    pub fn mean_steps(&self) -> Option<f64> {
        if self.path_steps.is_empty() {
            None
        } else {
            Some(self.path_steps.iter().sum::<usize>() as f64 / self.path_steps.len() as f64)
        }
    }

    pub fn min_steps(&self) -> Option<usize> {
        self.path_steps.iter().copied().min()
    }
}

/// Train once per seed and count greedy extractions that reach the goal.
///
/// `config.seed` is ignored; each run gets its own generator from `seeds`.
pub fn success_rate<I>(grid: &Grid, config: &QLearningConfig, seeds: I) -> Result<SuccessReport>
where
    I: IntoIterator<Item = u64>,
{
    let mut runs = 0;
    let mut path_steps = Vec::new();

    for seed in seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        let run = q_learning::solve(grid, config, &mut rng)?;
        debug!(seed, found = run.outcome.is_found(), "seeded q-learning run");
        if let Some(path) = run.outcome.path() {
            path_steps.push(path.steps());
        }
        runs += 1;
    }

    Ok(SuccessReport::new(runs, path_steps))
}

/// Breadth-first optimum next to seeded Q-learning results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Shortest possible step count, `None` if the goal is unreachable
    pub bfs_steps: Option<usize>,
    pub q_learning: SuccessReport,
    /// Q-learning runs whose path was as short as the breadth-first one
    pub optimal_runs: usize,
}

impl ComparisonResult {
    /// Extra steps of the average Q-learning path over the optimum
    pub fn mean_gap(&self) -> Option<f64> {
        let bfs = self.bfs_steps? as f64;
        self.q_learning.mean_steps().map(|mean| mean - bfs)
    }
}

/// Compare breadth-first search with Q-learning over `seeds`.
pub fn compare<I>(grid: &Grid, config: &QLearningConfig, seeds: I) -> Result<ComparisonResult>
where
    I: IntoIterator<Item = u64>,
{
    let bfs_steps = bfs::solve(grid).path().map(|p| p.steps());
    let q_learning = success_rate(grid, config, seeds)?;
    let optimal_runs = match bfs_steps {
        Some(optimum) => q_learning
            .path_steps
            .iter()
            .filter(|&&steps| steps == optimum)
            .count(),
        None => 0,
    };

    Ok(ComparisonResult {
        bfs_steps,
        q_learning,
        optimal_runs,
    })
}

/// One solver's answer for a grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverResult {
    pub solver: String,
    pub outcome: SearchOutcome,
}

/// Run each solver on the same grid, in order.
pub fn run_solvers(grid: &Grid, solvers: &mut [Box<dyn Solver>]) -> Result<Vec<SolverResult>> {
    solvers
        .iter_mut()
        .map(|solver| {
            let outcome = solver.solve(grid)?;
            Ok(SolverResult {
                solver: solver.name().to_string(),
                outcome,
            })
        })
        .collect()
}
