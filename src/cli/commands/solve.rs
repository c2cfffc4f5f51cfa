//! Solve command - Find a path through a maze with either strategy

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    bfs::BfsSolver,
    cli::{
        config::QLearningArgs,
        output::{DEFAULT_PATH_MARKER, format_path, print_kv, render_path},
    },
    grid::Grid,
    pipeline::SolverResult,
    ports::Solver,
    q_learning::QLearningSolver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first search (shortest path, deterministic)
    Bfs,
    /// Tabular Q-learning followed by greedy path extraction
    QLearning,
}

#[derive(Parser, Debug)]
#[command(about = "Solve a maze and print the path")]
pub struct SolveArgs {
    /// Maze file: rows of 'S' (start), 'E' (goal), '#' (wall) and '.' (open)
    pub maze: PathBuf,

    /// Solving strategy
    #[arg(long, short = 'a', value_enum, default_value_t = Algorithm::Bfs)]
    pub algorithm: Algorithm,

    #[command(flatten)]
    pub q_learning: QLearningArgs,

    /// Symbol drawn on intermediate path cells
    #[arg(long, default_value_t = DEFAULT_PATH_MARKER)]
    pub marker: char,

    /// Print the result as JSON instead of a drawing
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let grid = Grid::load(&args.maze)
        .with_context(|| format!("Failed to load maze {}", args.maze.display()))?;

    let mut solver: Box<dyn Solver> = match args.algorithm {
        Algorithm::Bfs => Box::new(BfsSolver::new()),
        Algorithm::QLearning => Box::new(QLearningSolver::new(args.q_learning.resolve()?)),
    };

    let outcome = solver.solve(&grid)?;

    if args.json {
        let result = SolverResult {
            solver: solver.name().to_string(),
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match outcome.path() {
        Some(path) => {
            println!("{} path found:", solver.name());
            println!("{}", format_path(path));
            println!();
            println!("{}", render_path(&grid, path, args.marker));
            println!();
            print_kv("Steps", &path.steps().to_string());
            print_kv("Cells", &path.len().to_string());
        }
        None => println!("{}: No path found.", solver.name()),
    }

    Ok(())
}
