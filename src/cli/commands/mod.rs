//! Subcommands of the `maze` binary

pub mod compare;
pub mod solve;
pub mod train;
