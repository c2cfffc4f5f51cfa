//! Ports (trait boundaries) between the solvers and their callers.
//!
//! Solvers implement [`Solver`]; anything that wants to watch Q-learning
//! training implements [`Observer`].

pub mod observer;
pub mod solver;

pub use observer::Observer;
pub use solver::Solver;
