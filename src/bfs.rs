//! Breadth-first shortest-path search
//!
//! Cells are nodes of an unweighted graph with edges between orthogonally
//! adjacent passable cells. Level-order exploration from the start reaches
//! the goal along a path with the fewest possible moves. Neighbors are
//! scanned in [`Action::ALL`](crate::grid::Action::ALL) order, so the
//! returned path is deterministic for a given grid.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::{
    Result,
    grid::{Coord, Grid},
    path::{Path, SearchOutcome},
    ports::Solver,
};

/// Outcome of a search together with how much of the maze it touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsReport {
    pub outcome: SearchOutcome,
    /// Cells popped from the frontier, the goal included when reached
    pub expanded: usize,
    /// Cells ever enqueued, the start included
    pub discovered: usize,
}

/// Shortest path from start to goal, or `NotFound` when they are disconnected.
pub fn solve(grid: &Grid) -> SearchOutcome {
    explore(grid).outcome
}

/// Run the search and report exploration counts alongside the outcome.
pub fn explore(grid: &Grid) -> BfsReport {
    let start = grid.start();
    let goal = grid.goal();

    let mut frontier = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut predecessors: HashMap<Coord, Coord> = HashMap::new();
    let mut expanded = 0;

    while let Some(current) = frontier.pop_front() {
        expanded += 1;
        if current == goal {
            let path = reconstruct_path(&predecessors, start, goal);
            debug!(
                steps = path.steps(),
                expanded,
                discovered = visited.len(),
                "bfs reached goal"
            );
            return BfsReport {
                outcome: SearchOutcome::Found(path),
                expanded,
                discovered: visited.len(),
            };
        }

        for (_, neighbor) in grid.neighbors(current) {
            if grid.is_passable(neighbor) && visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                frontier.push_back(neighbor);
            }
        }
    }

    debug!(expanded, "bfs exhausted frontier without reaching goal");
    BfsReport {
        outcome: SearchOutcome::NotFound,
        expanded,
        discovered: visited.len(),
    }
}

/// Walk predecessors back from `goal` to `start`, then reverse.
fn reconstruct_path(predecessors: &HashMap<Coord, Coord>, start: Coord, goal: Coord) -> Path {
    let mut coords = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                coords.push(previous);
                current = previous;
            }
            // Only the start lacks a predecessor.
            None => break,
        }
    }
    coords.reverse();
    Path::new(coords)
}

/// [`Solver`] adapter for breadth-first search
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl BfsSolver {
    pub fn new() -> Self {
        BfsSolver
    }
}

impl Solver for BfsSolver {
    fn name(&self) -> &str {
        "BFS"
    }

    fn solve(&mut self, grid: &Grid) -> Result<SearchOutcome> {
        Ok(solve(grid))
    }
}
