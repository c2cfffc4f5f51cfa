//! Cell kinds and their textual symbols

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell of the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Start,
    Goal,
    Wall,
    Open,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::Goal => 'E',
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'S' => Some(Cell::Start),
            'E' => Some(Cell::Goal),
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            _ => None,
        }
    }

    /// Every cell except a wall can be entered.
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// The two designated cells every maze must contain exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    Goal,
}

impl Endpoint {
    pub fn cell(self) -> Cell {
        match self {
            Endpoint::Start => Cell::Start,
            Endpoint::Goal => Cell::Goal,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start ('S')"),
            Endpoint::Goal => write!(f, "goal ('E')"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping_is_symmetric() {
        for cell in [Cell::Start, Cell::Goal, Cell::Wall, Cell::Open] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::from_char(' '), None);
    }

    #[test]
    fn test_only_walls_block() {
        assert!(Cell::Start.is_passable());
        assert!(Cell::Goal.is_passable());
        assert!(Cell::Open.is_passable());
        assert!(!Cell::Wall.is_passable());
    }
}
