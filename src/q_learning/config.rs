//! Hyperparameters for tabular Q-learning

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for a Q-learning run.
///
/// Every field has a default, so a JSON file only needs the values it
/// overrides.
///
/// # Examples
///
/// ```
/// use maze_solver::q_learning::QLearningConfig;
///
/// let config = QLearningConfig::default()
///     .with_episodes(2_000)
///     .with_learning_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearningConfig {
    /// Step size α toward the new estimate
    pub learning_rate: f64,
    /// Weight γ of estimated future reward
    pub discount_factor: f64,
    /// Exploration probability for the first episodes
    pub epsilon_start: f64,
    /// Linear decay coefficient applied per episode index
    pub epsilon_decay_rate: f64,
    /// Floor below which epsilon never drops
    pub min_epsilon: f64,
    /// Number of training episodes
    pub num_episodes: usize,
    /// Step cap per episode, also the cap on greedy path extraction
    pub max_steps_per_episode: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon_start: 1.0,
            epsilon_decay_rate: 0.001,
            min_epsilon: 0.01,
            num_episodes: 1000,
            max_steps_per_episode: 100,
            seed: None,
        }
    }
}

impl QLearningConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_epsilon_start(mut self, epsilon_start: f64) -> Self {
        self.epsilon_start = epsilon_start;
        self
    }

    pub fn with_epsilon_decay_rate(mut self, epsilon_decay_rate: f64) -> Self {
        self.epsilon_decay_rate = epsilon_decay_rate;
        self
    }

    pub fn with_episodes(mut self, num_episodes: usize) -> Self {
        self.num_episodes = num_episodes;
        self
    }

    pub fn with_max_steps(mut self, max_steps_per_episode: usize) -> Self {
        self.max_steps_per_episode = max_steps_per_episode;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(invalid(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(invalid(format!(
                "discount_factor must be in [0, 1], got {}",
                self.discount_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon_start) {
            return Err(invalid(format!(
                "epsilon_start must be in [0, 1], got {}",
                self.epsilon_start
            )));
        }
        if !(self.epsilon_decay_rate.is_finite() && self.epsilon_decay_rate >= 0.0) {
            return Err(invalid(format!(
                "epsilon_decay_rate must be finite and non-negative, got {}",
                self.epsilon_decay_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.min_epsilon) {
            return Err(invalid(format!(
                "min_epsilon must be in [0, 1], got {}",
                self.min_epsilon
            )));
        }
        if self.max_steps_per_episode == 0 {
            return Err(invalid(
                "max_steps_per_episode must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields keep defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfiguration { message }
}
