//! Q-learning training loop and greedy path extraction
//!
//! Training runs episodes from the start cell with ε-greedy action selection
//! and the one-step Q-learning update. Afterwards the greedy policy of the
//! learned table is followed from the start to produce a path.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{
    Result,
    grid::{Action, Coord, Grid},
    path::{Path, SearchOutcome},
    ports::{Observer, Solver},
    q_learning::{config::QLearningConfig, environment::Environment, q_table::QTable},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Linear epsilon decay with a floor
///
/// The value after episode `e` is recomputed from the starting epsilon and
/// the raw episode index, `max(start * (1 - rate * e), min)`, rather than
/// compounding from the previous value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonSchedule {
    start: f64,
    decay_rate: f64,
    min: f64,
}

impl EpsilonSchedule {
    pub fn new(start: f64, decay_rate: f64, min: f64) -> Self {
        Self {
            start,
            decay_rate,
            min,
        }
    }

    pub fn from_config(config: &QLearningConfig) -> Self {
        Self::new(
            config.epsilon_start,
            config.epsilon_decay_rate,
            config.min_epsilon,
        )
    }

    /// Epsilon used by the first episode
    pub fn initial(&self) -> f64 {
        self.start
    }

    /// Epsilon in effect once episode `episode` (0-indexed) has finished
    pub fn after_episode(&self, episode: usize) -> f64 {
        (self.start * (1.0 - self.decay_rate * episode as f64)).max(self.min)
    }
}

/// What happened during one training episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Episode index (0-based)
    pub episode: usize,
    /// Moves attempted, blocked ones included
    pub steps: usize,
    /// Sum of rewards collected
    pub total_reward: f64,
    /// Whether the goal was entered before the step cap
    pub reached_goal: bool,
    /// Exploration probability used during the episode
    pub epsilon: f64,
    /// Exploration probability for the next episode
    pub next_epsilon: f64,
}

/// Aggregate counts over a whole training run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    pub episodes: usize,
    pub episodes_reaching_goal: usize,
    pub total_steps: usize,
    pub first_goal_episode: Option<usize>,
    pub final_epsilon: f64,
}

impl TrainingStats {
    fn record(&mut self, summary: &EpisodeSummary) {
        self.episodes += 1;
        self.total_steps += summary.steps;
        if summary.reached_goal {
            self.episodes_reaching_goal += 1;
            self.first_goal_episode.get_or_insert(summary.episode);
        }
        self.final_epsilon = summary.next_epsilon;
    }
}

/// Learned table plus the path its greedy policy yields
///
/// The table is returned even when no path could be extracted.
#[derive(Debug, Clone)]
pub struct QLearningRun {
    pub q_table: QTable,
    pub outcome: SearchOutcome,
    pub stats: TrainingStats,
}

/// Train on `grid` and extract the greedy path, drawing exploration from `rng`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] if `config` fails validation.
pub fn solve<R: Rng>(grid: &Grid, config: &QLearningConfig, rng: &mut R) -> Result<QLearningRun> {
    train(grid, config, rng, &mut [])
}

/// [`solve`] with observers notified of every episode.
pub fn train<R: Rng>(
    grid: &Grid,
    config: &QLearningConfig,
    rng: &mut R,
    observers: &mut [Box<dyn Observer>],
) -> Result<QLearningRun> {
    config.validate()?;

    let env = Environment::new(grid);
    let schedule = EpsilonSchedule::from_config(config);
    let mut q_table = QTable::new(grid, config.learning_rate, config.discount_factor);
    let mut stats = TrainingStats {
        final_epsilon: schedule.initial(),
        ..TrainingStats::default()
    };
    let mut epsilon = schedule.initial();

    for observer in observers.iter_mut() {
        observer.on_training_start(config.num_episodes)?;
    }

    for episode in 0..config.num_episodes {
        let (steps, total_reward, reached_goal) = run_episode(
            &env,
            &mut q_table,
            epsilon,
            config.max_steps_per_episode,
            rng,
        );

        let next_epsilon = schedule.after_episode(episode);
        let summary = EpisodeSummary {
            episode,
            steps,
            total_reward,
            reached_goal,
            epsilon,
            next_epsilon,
        };
        trace!(episode, steps, total_reward, reached_goal, epsilon, "episode finished");

        stats.record(&summary);
        for observer in observers.iter_mut() {
            observer.on_episode_end(&summary)?;
        }
        epsilon = next_epsilon;
    }

    for observer in observers.iter_mut() {
        observer.on_training_end()?;
    }

    let outcome = extract_path(grid, &q_table, config.max_steps_per_episode);
    info!(
        episodes = stats.episodes,
        reached_goal = stats.episodes_reaching_goal,
        found = outcome.is_found(),
        "q-learning training finished"
    );

    Ok(QLearningRun {
        q_table,
        outcome,
        stats,
    })
}

/// One episode from the start; returns (steps, total reward, reached goal).
fn run_episode<R: Rng>(
    env: &Environment<'_>,
    q_table: &mut QTable,
    epsilon: f64,
    max_steps: usize,
    rng: &mut R,
) -> (usize, f64, bool) {
    let mut state = env.grid().start();
    let mut total_reward = 0.0;

    for step in 0..max_steps {
        let action = select_action_epsilon_greedy(q_table, state, epsilon, rng);
        let transition = env.step(state, action);

        q_table.q_learning_update(state, action, transition.reward, transition.next_state);
        total_reward += transition.reward;
        state = transition.next_state;

        if env.is_terminal(state) {
            return (step + 1, total_reward, true);
        }
    }

    (max_steps, total_reward, false)
}

/// ε-greedy action selection
fn select_action_epsilon_greedy<R: Rng>(
    q_table: &QTable,
    state: Coord,
    epsilon: f64,
    rng: &mut R,
) -> Action {
    if rng.random::<f64>() < epsilon {
        // Explore: random action
        Action::ALL[rng.random_range(0..Action::COUNT)]
    } else {
        // Exploit: greedy action based on Q-values
        q_table.greedy_action(state).unwrap_or(Action::ALL[0])
    }
}

/// Follow the greedy policy from the start cell.
///
/// Unlike training, a move into a wall or off the grid is not a no-op here:
/// extraction stops with `NotFound`. So does exceeding `max_steps` moves.
pub fn extract_path(grid: &Grid, q_table: &QTable, max_steps: usize) -> SearchOutcome {
    let mut current = grid.start();
    let mut coords = vec![current];

    for _ in 0..max_steps {
        let Some(action) = q_table.greedy_action(current) else {
            return SearchOutcome::NotFound;
        };
        let next = current.step(action);
        if !grid.is_passable(next) {
            debug!(%current, ?action, "greedy policy points into a wall or off the grid");
            return SearchOutcome::NotFound;
        }

        coords.push(next);
        current = next;
        if grid.is_goal(current) {
            return SearchOutcome::Found(Path::new(coords));
        }
    }

    debug!(max_steps, "greedy policy did not reach the goal within the step cap");
    SearchOutcome::NotFound
}

/// Q-learning agent implementing the [`Solver`] port
///
/// Owns its configuration, a seeded random number generator and any
/// observers. The most recent run stays available through
/// [`QLearningSolver::last_run`] so the learned table can be inspected after
/// [`Solver::solve`].
pub struct QLearningSolver {
    config: QLearningConfig,
    rng: StdRng,
    observers: Vec<Box<dyn Observer>>,
    last_run: Option<QLearningRun>,
}

impl QLearningSolver {
    /// Create a solver; seeds its RNG from `config.seed` when present.
    pub fn new(config: QLearningConfig) -> Self {
        let rng = build_rng(config.seed);
        Self {
            config,
            rng,
            observers: Vec::new(),
            last_run: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
        self
    }

    /// Add an observer notified during every subsequent training run
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    /// Train a fresh table on `grid` and extract its greedy path.
    pub fn train(&mut self, grid: &Grid) -> Result<QLearningRun> {
        train(grid, &self.config, &mut self.rng, &mut self.observers)
    }

    pub fn last_run(&self) -> Option<&QLearningRun> {
        self.last_run.as_ref()
    }

    pub fn take_last_run(&mut self) -> Option<QLearningRun> {
        self.last_run.take()
    }
}

impl Solver for QLearningSolver {
    fn name(&self) -> &str {
        "Q-Learning"
    }

    fn solve(&mut self, grid: &Grid) -> Result<SearchOutcome> {
        let run = self.train(grid)?;
        let outcome = run.outcome.clone();
        self.last_run = Some(run);
        Ok(outcome)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        self.config.seed = Some(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_starts_at_epsilon_start() {
        let schedule = EpsilonSchedule::from_config(&QLearningConfig::default());
        assert_eq!(schedule.initial(), 1.0);
        assert_eq!(schedule.after_episode(0), 1.0);
        assert!((schedule.after_episode(500) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_schedule_is_non_increasing_with_floor() {
        let schedule = EpsilonSchedule::from_config(&QLearningConfig::default());
        let mut previous = schedule.initial();
        for episode in 0..3000 {
            let epsilon = schedule.after_episode(episode);
            assert!(epsilon <= previous);
            assert!(epsilon >= 0.01);
            previous = epsilon;
        }
        assert_eq!(schedule.after_episode(2000), 0.01);
    }

    #[test]
    fn test_select_action_exploits_when_epsilon_zero() {
        let grid = Grid::parse("S.\n.E").unwrap();
        let mut q_table = QTable::new(&grid, 0.1, 0.9);
        q_table.set(grid.start(), Action::Down, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(
                select_action_epsilon_greedy(&q_table, grid.start(), 0.0, &mut rng),
                Action::Down
            );
        }
    }

    #[test]
    fn test_select_action_explores_every_action_when_epsilon_one() {
        let grid = Grid::parse("S.\n.E").unwrap();
        let q_table = QTable::new(&grid, 0.1, 0.9);
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [false; Action::COUNT];
        for _ in 0..200 {
            let action = select_action_epsilon_greedy(&q_table, grid.start(), 1.0, &mut rng);
            seen[action.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_episode_ends_at_goal() {
        let grid = Grid::parse("SE").unwrap();
        let env = Environment::new(&grid);
        let mut q_table = QTable::new(&grid, 0.1, 0.9);
        let mut rng = StdRng::seed_from_u64(3);
        // Greedy from an all-zero table picks Right, straight into the goal.
        let (steps, reward, reached) = run_episode(&env, &mut q_table, 0.0, 10, &mut rng);
        assert_eq!(steps, 1);
        assert_eq!(reward, 10.0);
        assert!(reached);
        assert_eq!(q_table.get(grid.start(), Action::Right), Some(1.0));
    }

    #[test]
    fn test_episode_respects_step_cap() {
        let grid = Grid::parse("S#E").unwrap();
        let env = Environment::new(&grid);
        let mut q_table = QTable::new(&grid, 0.1, 0.9);
        let mut rng = StdRng::seed_from_u64(4);
        let (steps, reward, reached) = run_episode(&env, &mut q_table, 0.5, 7, &mut rng);
        assert_eq!(steps, 7);
        assert!(!reached);
        assert!((reward + 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_extract_refuses_walls() {
        let grid = Grid::parse("S#E\n...").unwrap();
        // All-zero table: greedy picks Right, which is a wall.
        let q_table = QTable::new(&grid, 0.1, 0.9);
        assert_eq!(extract_path(&grid, &q_table, 10), SearchOutcome::NotFound);
    }

    #[test]
    fn test_extract_refuses_leaving_grid() {
        let grid = Grid::parse("S.E").unwrap();
        let mut q_table = QTable::new(&grid, 0.1, 0.9);
        q_table.set(grid.start(), Action::Up, 1.0);
        assert_eq!(extract_path(&grid, &q_table, 10), SearchOutcome::NotFound);
    }

    #[test]
    fn test_extract_stops_at_step_cap() {
        let grid = Grid::parse("S..E").unwrap();
        let mut q_table = QTable::new(&grid, 0.1, 0.9);
        // (0,1) sends the walk back left, so it oscillates forever.
        q_table.set(Coord::new(0, 1), Action::Left, 1.0);
        assert_eq!(extract_path(&grid, &q_table, 50), SearchOutcome::NotFound);
    }

    #[test]
    fn test_extract_follows_policy_to_goal() {
        let grid = Grid::parse("S..E").unwrap();
        let q_table = QTable::new(&grid, 0.1, 0.9);
        let path = extract_path(&grid, &q_table, 3).into_path().unwrap();
        assert_eq!(path.len(), 4);
        assert!(path.is_valid_for(&grid));
        assert_eq!(extract_path(&grid, &q_table, 2), SearchOutcome::NotFound);
    }

    #[test]
    fn test_zero_episodes_returns_untrained_table() {
        let grid = Grid::parse("S#E\n...").unwrap();
        let config = QLearningConfig::default().with_episodes(0);
        let mut rng = StdRng::seed_from_u64(5);
        let run = solve(&grid, &config, &mut rng).unwrap();
        assert_eq!(run.stats.episodes, 0);
        assert_eq!(run.q_table.len(), 5);
        assert!(run.q_table.iter().all(|(_, v)| v == &[0.0; 4]));
        assert_eq!(run.outcome, SearchOutcome::NotFound);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_training() {
        let grid = Grid::parse("SE").unwrap();
        let config = QLearningConfig::default().with_learning_rate(-1.0);
        let mut rng = StdRng::seed_from_u64(6);
        assert!(matches!(
            solve(&grid, &config, &mut rng),
            Err(crate::Error::InvalidConfiguration { .. })
        ));
    }
}
