//! CLI infrastructure for the maze solver
//!
//! This module provides the command-line interface for solving mazes,
//! training Q-learning agents and comparing the two strategies.

pub mod commands;
pub mod config;
pub mod output;
