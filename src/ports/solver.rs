//! Solver port - one interface over every maze-solving strategy
//!
//! Breadth-first search and Q-learning share nothing internally, but both
//! take a grid and yield a [`SearchOutcome`]. Callers such as the comparison
//! pipeline and the CLI work against this trait.

use crate::{Result, grid::Grid, path::SearchOutcome};

/// Solver trait - unified interface for maze-solving strategies
///
/// # Examples
///
/// ```no_run
/// use maze_solver::{Grid, bfs::BfsSolver, ports::Solver};
///
/// fn steps<S: Solver>(solver: &mut S, grid: &Grid) -> maze_solver::Result<Option<usize>> {
///     Ok(solver.solve(grid)?.path().map(|p| p.steps()))
/// }
///
/// let grid = Grid::parse("S.E").unwrap();
/// assert_eq!(steps(&mut BfsSolver::new(), &grid).unwrap(), Some(2));
/// ```
pub trait Solver: Send {
    /// Name used in comparisons and logging.
    fn name(&self) -> &str;

    /// Find a path from the grid's start to its goal.
    ///
    /// # Errors
    ///
    /// Only for failures outside the search itself (invalid configuration,
    /// a failing observer). An unreachable goal is
    /// [`SearchOutcome::NotFound`], not an error.
    fn solve(&mut self, grid: &Grid) -> Result<SearchOutcome>;

    /// Seed the solver's random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for deterministic solvers.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
