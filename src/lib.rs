//! Grid maze solving
//!
//! This crate provides:
//! - A grid model parsed from `S` / `E` / `#` / `.` text
//! - Breadth-first search for a guaranteed shortest path
//! - Tabular Q-learning that discovers a path from sampled transitions
//! - Observers, seeded evaluation and comparison of the two strategies
//! - A `maze` CLI that loads mazes and draws the solutions

pub mod bfs;
pub mod cli;
pub mod error;
pub mod export;
pub mod grid;
pub mod path;
pub mod pipeline;
pub mod ports;
pub mod q_learning;

pub use error::{Error, Result};
pub use grid::{Action, Cell, Coord, Endpoint, Grid};
pub use path::{Path, SearchOutcome};
pub use q_learning::{QLearningConfig, QLearningRun, QTable};
