//! Compare command - Breadth-first search against seeded Q-learning runs

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        config::QLearningArgs,
        output::{print_section, print_stats_table},
    },
    grid::Grid,
    pipeline::compare,
};

#[derive(Parser, Debug)]
#[command(about = "Compare BFS with repeated Q-learning runs")]
pub struct CompareArgs {
    /// Maze file: rows of 'S' (start), 'E' (goal), '#' (wall) and '.' (open)
    pub maze: PathBuf,

    /// Number of independently seeded Q-learning runs
    #[arg(long, short = 'r', default_value_t = 20)]
    pub runs: u64,

    #[command(flatten)]
    pub q_learning: QLearningArgs,

    /// Print the comparison as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.runs == 0 {
        return Err(anyhow!("--runs must be at least 1"));
    }

    let grid = Grid::load(&args.maze)
        .with_context(|| format!("Failed to load maze {}", args.maze.display()))?;
    let config = args.q_learning.resolve()?;

    // Run i uses seed base + i.
    let base = config.seed.unwrap_or(0);
    let seeds = (0..args.runs).map(|i| base.wrapping_add(i));
    let result = compare(&grid, &config, seeds)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let q = &result.q_learning;
    print_section("BFS vs Q-Learning");
    print_stats_table(&[
        ("Maze", &args.maze.display().to_string()),
        (
            "BFS steps",
            &result
                .bfs_steps
                .map_or_else(|| "no path".to_string(), |s| s.to_string()),
        ),
        ("Q-learning runs", &q.runs.to_string()),
        (
            "Reached goal",
            &format!("{}/{} ({:.1}%)", q.successes, q.runs, q.success_rate * 100.0),
        ),
        (
            "Mean steps",
            &q.mean_steps()
                .map_or_else(|| "-".to_string(), |m| format!("{m:.2}")),
        ),
        (
            "Best steps",
            &q.min_steps()
                .map_or_else(|| "-".to_string(), |m| m.to_string()),
        ),
        ("Optimal runs", &result.optimal_runs.to_string()),
        (
            "Mean gap",
            &result
                .mean_gap()
                .map_or_else(|| "-".to_string(), |g| format!("{g:+.2}")),
        ),
    ]);

    Ok(())
}
