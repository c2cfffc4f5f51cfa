//! Tabular Q-learning over the maze
//!
//! The agent never sees the grid directly: it learns from sampled
//! transitions, each costing a small step penalty, a larger penalty for
//! bumping into a wall or the border (the agent stays put), and a reward for
//! entering the goal. After training, the greedy policy of the learned table
//! is walked from the start to produce a path.
//!
//! ## Rewards
//!
//! | Move into | Reward | Next state |
//! |-----------|--------|------------|
//! | Goal | +10.0 | goal |
//! | Wall or off-grid | -1.0 | unchanged |
//! | Any other cell | -0.1 | destination |
//!
//! ## Usage Example
//!
//! ```no_run
//! use maze_solver::{Grid, q_learning::{self, QLearningConfig}};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let grid = Grid::parse("S.###\n...#E\n##.#.\n#....\n#####").unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let run = q_learning::solve(&grid, &QLearningConfig::default(), &mut rng).unwrap();
//!
//! println!("states learned: {}", run.q_table.len());
//! if let Some(path) = run.outcome.path() {
//!     println!("greedy path takes {} steps", path.steps());
//! }
//! ```

pub mod agent;
pub mod config;
pub mod environment;
pub mod q_table;

// Public re-exports
pub use agent::{
    EpisodeSummary, EpsilonSchedule, QLearningRun, QLearningSolver, TrainingStats, extract_path,
    solve, train,
};
pub use config::QLearningConfig;
pub use environment::{Environment, Transition, TransitionKind};
pub use q_table::QTable;
