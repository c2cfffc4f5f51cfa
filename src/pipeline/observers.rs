//! Observer implementations for Q-learning training
//!
//! Observers allow composable data collection during training without coupling
//! the training loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{Result, ports::Observer, q_learning::EpisodeSummary};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    reached_goal: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            reached_goal: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        if summary.reached_goal {
            self.reached_goal += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(summary.episode as u64 + 1);
            pb.set_message(format!(
                "goal:{} ε={:.3}",
                self.reached_goal, summary.next_epsilon
            ));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("goal:{}", self.reached_goal));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks training metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    total_episodes: usize,
    reached_goal: usize,
    first_goal_episode: Option<usize>,
    step_counts: Vec<usize>,
    rewards: Vec<f64>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of episodes that entered the goal
    pub fn goal_rate(&self) -> f64 {
        if self.total_episodes == 0 {
            0.0
        } else {
            self.reached_goal as f64 / self.total_episodes as f64
        }
    }

    /// Get average episode length
    pub fn avg_steps(&self) -> f64 {
        mean(self.step_counts.iter().map(|&s| s as f64))
    }

    pub fn avg_reward(&self) -> f64 {
        mean(self.rewards.iter().copied())
    }

    /// Average episode length over the final `window` episodes
    pub fn recent_avg_steps(&self, window: usize) -> f64 {
        let skip = self.step_counts.len().saturating_sub(window);
        mean(self.step_counts[skip..].iter().map(|&s| s as f64))
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_episodes: self.total_episodes,
            reached_goal: self.reached_goal,
            goal_rate: self.goal_rate(),
            first_goal_episode: self.first_goal_episode,
            avg_steps: self.avg_steps(),
            avg_reward: self.avg_reward(),
            recent_avg_steps: self.recent_avg_steps(100),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_episodes: usize,
    pub reached_goal: usize,
    pub goal_rate: f64,
    pub first_goal_episode: Option<usize>,
    pub avg_steps: f64,
    pub avg_reward: f64,
    /// Average length of the last 100 episodes
    pub recent_avg_steps: f64,
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.total_episodes += 1;
        if summary.reached_goal {
            self.reached_goal += 1;
            self.first_goal_episode.get_or_insert(summary.episode);
        }
        self.step_counts.push(summary.steps);
        self.rewards.push(summary.total_reward);
        Ok(())
    }
}

/// JSONL observer - Writes one JSON object per episode
pub struct JsonlObserver<W: Write + Send = BufWriter<File>> {
    writer: W,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to a file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl<W: Write + Send> JsonlObserver<W> {
    /// Create a JSONL observer over any writer
    pub fn from_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Observer for JsonlObserver<W> {
    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        serde_json::to_writer(&mut self.writer, summary)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Observer shared with the caller so its state can be read after training
///
/// Training takes ownership of boxed observers; wrapping one in
/// `Arc<Mutex<_>>` keeps a handle on the outside.
pub struct SharedObserver<O: Observer> {
    inner: Arc<Mutex<O>>,
}

impl<O: Observer> SharedObserver<O> {
    pub fn new(inner: Arc<Mutex<O>>) -> Self {
        Self { inner }
    }
}

impl<O: Observer> Observer for SharedObserver<O> {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_training_start(total_episodes)
    }

    fn on_episode_end(&mut self, summary: &EpisodeSummary) -> Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_episode_end(summary)
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_training_end()
    }
}
