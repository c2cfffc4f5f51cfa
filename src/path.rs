//! Solver results: the path from start to goal, or the lack of one

use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid};

/// Ordered coordinates from start to goal, both inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path(Vec<Coord>);

impl Path {
    pub fn new(coords: Vec<Coord>) -> Self {
        Path(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.0
    }

    /// Number of cells, endpoints included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves taken
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    /// True when the path runs from the grid's start to its goal through
    /// passable, pairwise-adjacent cells.
    pub fn is_valid_for(&self, grid: &Grid) -> bool {
        self.start() == Some(grid.start())
            && self.goal() == Some(grid.goal())
            && self.0.iter().all(|&c| grid.is_passable(c))
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl From<Vec<Coord>> for Path {
    fn from(coords: Vec<Coord>) -> Self {
        Path(coords)
    }
}

/// Terminal result of a solver run
///
/// `NotFound` is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}
