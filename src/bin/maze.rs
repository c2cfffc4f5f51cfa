//! Maze CLI - solve grid mazes with breadth-first search or Q-learning
//!
//! This CLI provides a unified interface for:
//! - Solving a maze file and drawing the path
//! - Training a Q-learning agent and inspecting its table and policy
//! - Comparing Q-learning against the breadth-first optimum

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "maze")]
#[command(version, about = "Grid maze solver (BFS and Q-learning)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a maze and print the path
    Solve(maze_solver::cli::commands::solve::SolveArgs),

    /// Train a Q-learning agent and report what it learned
    Train(Box<maze_solver::cli::commands::train::TrainArgs>),

    /// Compare BFS with repeated Q-learning runs
    Compare(maze_solver::cli::commands::compare::CompareArgs),
}

fn init_logging() {
    // Logs go to stderr so stdout stays clean for drawings and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => maze_solver::cli::commands::solve::execute(args),
        Commands::Train(args) => maze_solver::cli::commands::train::execute(*args),
        Commands::Compare(args) => maze_solver::cli::commands::compare::execute(args),
    }
}
