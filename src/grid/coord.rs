//! Coordinates and the four grid moves

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell identifier.
///
/// Signed so that a neighbor one step past the border is still representable;
/// bounds are checked by [`crate::grid::Grid::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// The coordinate reached by applying `action` once.
    pub fn step(self, action: Action) -> Coord {
        let (dr, dc) = action.delta();
        Coord {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// True when `other` differs by exactly one row or one column.
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord { row, col }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move to one of the four orthogonal neighbors
///
/// The declaration order is significant: it is the BFS neighbor scan order
/// and the index into each Q-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Right,
    Left,
    Down,
    Up,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Right, Action::Left, Action::Down, Action::Up];

    pub const COUNT: usize = Self::ALL.len();

    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Right => (0, 1),
            Action::Left => (0, -1),
            Action::Down => (1, 0),
            Action::Up => (-1, 0),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Action::Right => 0,
            Action::Left => 1,
            Action::Down => 2,
            Action::Up => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    /// Single-character arrow used when printing a policy
    pub fn arrow(self) -> char {
        match self {
            Action::Right => '>',
            Action::Left => '<',
            Action::Down => 'v',
            Action::Up => '^',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
        }
        assert_eq!(Action::from_index(4), None);
    }

    #[test]
    fn test_step_applies_delta() {
        let origin = Coord::new(2, 2);
        assert_eq!(origin.step(Action::Right), Coord::new(2, 3));
        assert_eq!(origin.step(Action::Left), Coord::new(2, 1));
        assert_eq!(origin.step(Action::Down), Coord::new(3, 2));
        assert_eq!(origin.step(Action::Up), Coord::new(1, 2));
    }

    #[test]
    fn test_step_can_leave_grid() {
        assert_eq!(Coord::new(0, 0).step(Action::Up), Coord::new(-1, 0));
    }

    #[test]
    fn test_adjacency() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }
}
