//! Observer port - abstraction for watching Q-learning training
//!
//! Training reports each finished episode to its observers, so progress
//! bars, metrics and logs can be composed without the training loop knowing
//! about any of them.

use crate::{Result, q_learning::EpisodeSummary};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - once, before the first episode
/// 2. `on_episode_end(summary)` - after every episode, once epsilon has been
///    decayed for the next one
/// 3. `on_training_end()` - once, after the last episode
///
/// # Examples
///
/// ```no_run
/// use maze_solver::{ports::Observer, q_learning::EpisodeSummary};
///
/// struct GoalCounter {
///     reached: usize,
/// }
///
/// impl Observer for GoalCounter {
///     fn on_episode_end(&mut self, summary: &EpisodeSummary) -> maze_solver::Result<()> {
///         if summary.reached_goal {
///             self.reached += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends, by reaching the goal or the step cap.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to record episode results.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to flush outputs or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
