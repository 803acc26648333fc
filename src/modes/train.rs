//! Training mode for the DQN agent
//!
//! This module implements the training loop: it runs episodes in the Snake
//! environment, learns online from every tick's transition, and performs a
//! batched replay update when each episode ends.
//!
//! # Example
//!
//! ```rust,ignore
//! use snake_dqn::game::GameConfig;
//! use snake_dqn::modes::{TrainConfig, TrainMode};
//! use snake_dqn::rl::{default_device, DqnConfig, TrainingBackend};
//!
//! let config = TrainConfig::new(1000);
//! let device = default_device();
//! let mut train_mode = TrainMode::<TrainingBackend>::new(config, device);
//! train_mode.run()?;
//! ```

use anyhow::Result;
use burn::tensor::backend::AutodiffBackend;

use crate::game::GameConfig;
use crate::metrics::TrainingStats;
use crate::rl::{DqnAgent, DqnConfig, QNetworkConfig, SnakeEnvironment, Transition};

/// Configuration for training mode
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Number of episodes to train
    pub num_episodes: usize,

    /// Log training progress every N episodes
    pub log_frequency: usize,

    /// Window size for rolling statistics
    pub stats_window: usize,

    /// Game configuration (grid size, rewards)
    pub game_config: GameConfig,

    /// Q-learning hyperparameters
    pub dqn_config: DqnConfig,
}

impl TrainConfig {
    /// Create a new training configuration with defaults
    pub fn new(num_episodes: usize) -> Self {
        Self {
            num_episodes,
            log_frequency: 10,
            stats_window: 10,
            game_config: GameConfig::default(),
            dqn_config: DqnConfig::default(),
        }
    }
}

/// Training mode for the DQN agent
///
/// One sequential path per tick: encode, act, step, compute reward, online
/// learn, push to replay memory. At episode end the agent performs a batched
/// update from replay memory and the episode result is recorded.
pub struct TrainMode<B: AutodiffBackend> {
    /// DQN agent being trained
    agent: DqnAgent<B>,

    /// Snake environment for experience collection
    env: SnakeEnvironment,

    /// Training statistics tracker
    stats: TrainingStats,

    /// Training configuration
    config: TrainConfig,
}

impl<B: AutodiffBackend> TrainMode<B> {
    /// Create a new training mode
    pub fn new(config: TrainConfig, device: B::Device) -> Self {
        let network = QNetworkConfig::new().init::<B>(&device);
        let agent = DqnAgent::new(network, config.dqn_config.clone(), device);
        let env = SnakeEnvironment::new(config.game_config.clone());
        let stats = TrainingStats::new(config.stats_window);

        Self {
            agent,
            env,
            stats,
            config,
        }
    }

    /// Run the training loop
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        for episode in 0..self.config.num_episodes {
            let (episode_reward, episode_steps, episode_score) = self.run_episode()?;

            self.stats
                .record_episode(episode_reward, episode_steps, episode_score);
            self.agent.increment_episode();

            if (episode + 1) % self.config.log_frequency == 0 {
                self.print_progress(episode + 1);
            }
        }

        println!("\nTraining complete!");
        println!("{}", self.stats.format_summary());

        Ok(())
    }

    /// Run a single training episode
    ///
    /// Every tick produces one transition that is learned from immediately
    /// and stored in replay memory; episode termination triggers the
    /// batched replay update.
    ///
    /// # Returns
    ///
    /// A tuple of (total episode reward, steps taken, final score).
    fn run_episode(&mut self) -> Result<(f32, usize, u32)> {
        let mut state = self.env.reset();
        let mut episode_reward = 0.0;
        let mut episode_steps = 0;

        loop {
            let action = self.agent.act(&state);
            let (next_state, reward, done) = self.env.step(action);

            let transition = Transition {
                state,
                action,
                next_state,
                reward,
                done,
            };

            let loss = self.agent.learn_online(&transition);
            self.agent.observe(transition);
            self.stats.record_loss(loss);

            episode_reward += reward;
            episode_steps += 1;
            state = next_state;

            if done {
                break;
            }
        }

        if let Some(loss) = self.agent.learn_batch()? {
            self.stats.record_loss(loss);
        }

        let episode_score = self.env.state().score;

        Ok((episode_reward, episode_steps, episode_score))
    }

    /// Get a reference to the statistics tracker
    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// Get a reference to the agent
    pub fn agent(&self) -> &DqnAgent<B> {
        &self.agent
    }

    /// Print training header information
    fn print_header(&self) {
        println!("{}", "=".repeat(70));
        println!("DQN Training - Snake");
        println!("{}", "=".repeat(70));
        println!("Episodes: {}", self.config.num_episodes);
        println!(
            "Game config: {}x{} grid",
            self.config.game_config.grid_width, self.config.game_config.grid_height
        );
        println!("DQN config:");
        println!("  Learning rate: {}", self.config.dqn_config.learning_rate);
        println!("  Gamma: {}", self.config.dqn_config.gamma);
        println!(
            "  Epsilon: {} -> {} (decay {})",
            self.config.dqn_config.epsilon_start,
            self.config.dqn_config.epsilon_min,
            self.config.dqn_config.epsilon_decay
        );
        println!("  Replay batch size: {}", self.config.dqn_config.batch_size);
        println!(
            "  Replay capacity: {}",
            self.config.dqn_config.memory_capacity
        );
        println!("Logging: Every {} episodes", self.config.log_frequency);
        println!("{}", "=".repeat(70));
        println!();
    }

    /// Print training progress
    fn print_progress(&self, episode: usize) {
        println!(
            "[Episode {}/{}] {} | Eps: {:.3}",
            episode,
            self.config.num_episodes,
            self.stats.format_summary(),
            self.agent.epsilon()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rl::{default_device, TrainingBackend};

    #[test]
    fn test_train_config_creation() {
        let config = TrainConfig::new(1000);
        assert_eq!(config.num_episodes, 1000);
        assert_eq!(config.log_frequency, 10);
    }

    #[test]
    fn test_train_mode_creation() {
        let config = TrainConfig::new(10);
        let device = default_device();
        let train_mode = TrainMode::<TrainingBackend>::new(config, device);

        assert_eq!(train_mode.agent().episodes_trained(), 0);
        assert_eq!(train_mode.stats().total_episodes(), 0);
    }

    #[test]
    fn test_run_single_episode() {
        let config = TrainConfig::new(1);
        let device = default_device();
        let mut train_mode = TrainMode::<TrainingBackend>::new(config, device);

        let (reward, steps, _score) = train_mode.run_episode().unwrap();

        assert!(steps > 0);
        // Every episode ends in a collision, so the death penalty is part
        // of the accumulated reward.
        assert!(reward <= steps as f32 * 10.0);
        assert!(train_mode.agent().memory_len() == steps);
    }

    #[test]
    fn test_run_records_episodes() {
        let mut config = TrainConfig::new(2);
        config.log_frequency = 100; // keep test output quiet
        let device = default_device();
        let mut train_mode = TrainMode::<TrainingBackend>::new(config, device);

        train_mode.run().unwrap();

        assert_eq!(train_mode.stats().total_episodes(), 2);
        assert_eq!(train_mode.agent().episodes_trained(), 2);
    }
}
