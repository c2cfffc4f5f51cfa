//! Train command - Train a Q-learning agent and inspect what it learned

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        config::QLearningArgs,
        output::{
            DEFAULT_PATH_MARKER, format_path, print_section, print_stats_table, print_subsection,
            render_path, render_policy,
        },
    },
    export::QTableCsvExporter,
    grid::Grid,
    path::SearchOutcome,
    pipeline::{JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver, SharedObserver},
    q_learning::{QLearningConfig, QLearningSolver, TrainingStats},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile<'a> {
    maze: String,
    config: &'a QLearningConfig,
    metrics: MetricsSummary,
    stats: &'a TrainingStats,
    outcome: &'a SearchOutcome,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent on a maze")]
pub struct TrainArgs {
    /// Maze file: rows of 'S' (start), 'E' (goal), '#' (wall) and '.' (open)
    pub maze: PathBuf,

    #[command(flatten)]
    pub q_learning: QLearningArgs,

    /// Show progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Optional file for per-episode JSONL observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Optional CSV file receiving the learned Q-table
    #[arg(long)]
    pub q_table_csv: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Print the greedy action of every open cell
    #[arg(long, default_value_t = false)]
    pub show_policy: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let grid = Grid::load(&args.maze)
        .with_context(|| format!("Failed to load maze {}", args.maze.display()))?;
    let config = args.q_learning.resolve()?;

    print_section("Q-Learning Training");
    print_stats_table(&[
        ("Maze", &args.maze.display().to_string()),
        ("Size", &format!("{} x {}", grid.rows(), grid.cols())),
        ("Episodes", &config.num_episodes.to_string()),
        ("Max steps", &config.max_steps_per_episode.to_string()),
        ("Learning rate", &config.learning_rate.to_string()),
        ("Discount", &config.discount_factor.to_string()),
        (
            "Epsilon",
            &format!(
                "{} (decay {}, floor {})",
                config.epsilon_start, config.epsilon_decay_rate, config.min_epsilon
            ),
        ),
        (
            "Seed",
            &config
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
        ),
    ]);

    let metrics = Arc::new(Mutex::new(MetricsObserver::new()));
    let mut solver = QLearningSolver::new(config.clone())
        .with_observer(Box::new(SharedObserver::new(Arc::clone(&metrics))));
    if args.progress {
        solver = solver.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        let observer = JsonlObserver::new(path)
            .with_context(|| format!("Failed to create observations file {}", path.display()))?;
        solver = solver.with_observer(Box::new(observer));
    }

    let run = solver.train(&grid)?;
    let metrics_summary = metrics
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .summary();

    print_subsection("Training Metrics");
    print_stats_table(&[
        (
            "Reached goal",
            &format!(
                "{}/{} ({:.1}%)",
                metrics_summary.reached_goal,
                metrics_summary.total_episodes,
                metrics_summary.goal_rate * 100.0
            ),
        ),
        (
            "First success",
            &metrics_summary
                .first_goal_episode
                .map_or_else(|| "never".to_string(), |e| format!("episode {e}")),
        ),
        ("Avg steps", &format!("{:.2}", metrics_summary.avg_steps)),
        (
            "Recent avg steps",
            &format!("{:.2}", metrics_summary.recent_avg_steps),
        ),
        ("Avg reward", &format!("{:.2}", metrics_summary.avg_reward)),
        ("Final epsilon", &format!("{:.4}", run.stats.final_epsilon)),
        ("States", &run.q_table.len().to_string()),
    ]);

    if args.show_policy {
        print_subsection("Greedy Policy");
        println!("{}", render_policy(&grid, &run.q_table));
    }

    print_subsection("Greedy Path");
    match run.outcome.path() {
        Some(path) => {
            println!("{}", format_path(path));
            println!();
            println!("{}", render_path(&grid, path, DEFAULT_PATH_MARKER));
            println!("\n{} steps", path.steps());
        }
        None => println!("Q-Learning: No path found."),
    }

    if let Some(path) = &args.q_table_csv {
        QTableCsvExporter::write_to_file(&run.q_table, path)?;
        println!("\nQ-table written to {}", path.display());
    }

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let summary = TrainingSummaryFile {
            maze: args.maze.display().to_string(),
            config: &config,
            metrics: metrics_summary,
            stats: &run.stats,
            outcome: &run.outcome,
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create summary file {}", path.display()))?;
        to_writer_pretty(file, &summary)?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}
