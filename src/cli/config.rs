//! Shared configuration arguments for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::q_learning::QLearningConfig;

/// Q-learning hyperparameters accepted by every command that trains
///
/// Values come from `--config` (JSON) when given, then individual flags
/// override them.
#[derive(Args, Debug, Clone, Default)]
pub struct QLearningArgs {
    /// JSON file with Q-learning parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of training episodes
    #[arg(long, short = 'e')]
    pub episodes: Option<usize>,

    /// Step cap per episode and for greedy path extraction
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Learning rate α (0.0-1.0]
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Discount factor γ [0.0-1.0]
    #[arg(long)]
    pub discount: Option<f64>,

    /// Initial exploration rate ε
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Linear epsilon decay per episode index
    #[arg(long)]
    pub epsilon_decay: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl QLearningArgs {
    /// Resolve the final configuration and validate it.
    pub fn resolve(&self) -> Result<QLearningConfig> {
        let mut config = match &self.config {
            Some(path) => QLearningConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => QLearningConfig::default(),
        };

        if let Some(episodes) = self.episodes {
            config.num_episodes = episodes;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps_per_episode = max_steps;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.learning_rate = learning_rate;
        }
        if let Some(discount) = self.discount {
            config.discount_factor = discount;
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon_start = epsilon;
        }
        if let Some(decay) = self.epsilon_decay {
            config.epsilon_decay_rate = decay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
