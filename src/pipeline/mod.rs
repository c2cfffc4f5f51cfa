//! Training observation and evaluation pipelines
//!
//! This module provides:
//! - Observers that watch Q-learning training (progress, metrics, JSONL)
//! - Seeded repeated runs for estimating Q-learning success rates
//! - Side-by-side comparison with breadth-first search

pub mod evaluation;
pub mod observers;

pub use evaluation::{
    ComparisonResult, SolverResult, SuccessReport, compare, run_solvers, success_rate,
};
pub use observers::{
    JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver, SharedObserver,
};

pub use crate::ports::{Observer, Solver};
