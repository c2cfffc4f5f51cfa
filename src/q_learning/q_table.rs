//! Q-table implementation for temporal difference learning

use serde::{Deserialize, Serialize};

use crate::grid::{Action, Coord, Grid};

/// Q-table mapping each non-wall cell to one value per [`Action`]
///
/// Storage is dense and row-major, mirroring the grid; wall cells hold no
/// entry, so they are not states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    rows: usize,
    cols: usize,
    /// Q-values indexed by row-major cell offset, then [`Action::index`]
    values: Vec<Option<[f64; Action::COUNT]>>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a zero-initialized table with one entry per non-wall cell
    pub fn new(grid: &Grid, learning_rate: f64, discount_factor: f64) -> Self {
        let mut values = vec![None; grid.rows() * grid.cols()];
        for coord in grid.passable_cells() {
            if let Some(i) = grid.index_of(coord) {
                values[i] = Some([0.0; Action::COUNT]);
            }
        }
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            values,
            learning_rate,
            discount_factor,
        }
    }

    fn offset(&self, state: Coord) -> Option<usize> {
        if state.row < 0 || state.col < 0 {
            return None;
        }
        let (row, col) = (state.row as usize, state.col as usize);
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// All four action values for a state, `None` for walls and off-grid cells
    pub fn values(&self, state: Coord) -> Option<&[f64; Action::COUNT]> {
        self.offset(state).and_then(|i| self.values[i].as_ref())
    }

    fn values_mut(&mut self, state: Coord) -> Option<&mut [f64; Action::COUNT]> {
        self.offset(state).and_then(|i| self.values[i].as_mut())
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, state: Coord, action: Action) -> Option<f64> {
        self.values(state).map(|v| v[action.index()])
    }

    /// Set Q-value for a state-action pair.
    ///
    /// Returns `false`, leaving the table untouched, if `state` is not a state.
    pub fn set(&mut self, state: Coord, action: Action, value: f64) -> bool {
        match self.values_mut(state) {
            Some(v) => {
                v[action.index()] = value;
                true
            }
            None => false,
        }
    }

    /// Maximum Q-value in a state; zero for cells that are not states
    pub fn max_q(&self, state: Coord) -> f64 {
        self.values(state)
            .map(|v| v.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(0.0)
    }

    /// Select greedy action (highest Q-value), the earliest action on ties
    pub fn greedy_action(&self, state: Coord) -> Option<Action> {
        let values = self.values(state)?;
        let mut best = 0;
        for (i, &value) in values.iter().enumerate().skip(1) {
            if value > values[best] {
                best = i;
            }
        }
        Action::from_index(best)
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    pub fn q_learning_update(
        &mut self,
        state: Coord,
        action: Action,
        reward: f64,
        next_state: Coord,
    ) {
        let max_next_q = self.max_q(next_state);
        let (alpha, gamma) = (self.learning_rate, self.discount_factor);
        if let Some(values) = self.values_mut(state) {
            let current_q = values[action.index()];
            let td_error = reward + gamma * max_next_q - current_q;
            values[action.index()] = current_q + alpha * td_error;
        }
    }

    /// Number of states (non-wall cells) in the table
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Iterate states in row-major order with their action values
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &[f64; Action::COUNT])> + '_ {
        let cols = self.cols;
        self.values.iter().enumerate().filter_map(move |(i, v)| {
            v.as_ref()
                .map(|v| (Coord::new((i / cols) as i32, (i % cols) as i32), v))
        })
    }
}
