//! The maze as seen by a learning agent: transitions and rewards

use crate::grid::{Action, Cell, Coord, Grid};

pub const GOAL_REWARD: f64 = 10.0;
pub const BLOCKED_REWARD: f64 = -1.0;
pub const STEP_REWARD: f64 = -0.1;

/// What an attempted move ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Destination outside the grid; the agent stays put
    OffGrid,
    /// Destination is a wall; the agent stays put
    Wall,
    /// Destination is the goal
    Goal,
    /// Any other passable destination, the start included
    Open,
}

impl TransitionKind {
    pub fn reward(self) -> f64 {
        match self {
            TransitionKind::OffGrid | TransitionKind::Wall => BLOCKED_REWARD,
            TransitionKind::Goal => GOAL_REWARD,
            TransitionKind::Open => STEP_REWARD,
        }
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, TransitionKind::OffGrid | TransitionKind::Wall)
    }
}

/// Result of one simulated move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next_state: Coord,
    pub reward: f64,
    pub kind: TransitionKind,
}

/// Read-only view of a grid that simulates moves for training
#[derive(Debug, Clone, Copy)]
pub struct Environment<'a> {
    grid: &'a Grid,
}

impl<'a> Environment<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Classify the move from `state` along `action` without taking it.
    pub fn classify(&self, state: Coord, action: Action) -> TransitionKind {
        match self.grid.cell(state.step(action)) {
            None => TransitionKind::OffGrid,
            Some(Cell::Wall) => TransitionKind::Wall,
            Some(Cell::Goal) => TransitionKind::Goal,
            Some(Cell::Start | Cell::Open) => TransitionKind::Open,
        }
    }

    /// Simulate the move. Blocked moves are not errors: they cost
    /// [`BLOCKED_REWARD`] and leave the agent where it was.
    pub fn step(&self, state: Coord, action: Action) -> Transition {
        let kind = self.classify(state, action);
        let next_state = if kind.is_blocked() {
            state
        } else {
            state.step(action)
        };
        Transition {
            next_state,
            reward: kind.reward(),
            kind,
        }
    }

    pub fn is_terminal(&self, state: Coord) -> bool {
        self.grid.is_goal(state)
    }
}
