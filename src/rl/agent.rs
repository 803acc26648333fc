//! Epsilon-greedy DQN agent
//!
//! The agent owns the Q-network, the trainer, and the replay memory, all of
//! which are created once per training session and persist across episodes.
//! Only the game world itself is rebuilt when an episode ends.

use anyhow::Result;
use burn::{module::AutodiffModule, tensor::backend::AutodiffBackend};
use rand::Rng;

use super::buffer::{ReplayMemory, Transition};
use super::config::DqnConfig;
use super::network::QNetwork;
use super::observation::{to_tensor, StateVec};
use super::trainer::QTrainer;
use crate::game::Turn;

/// DQN agent combining an epsilon-greedy policy with online and batched
/// Q-learning
///
/// # Example
///
/// ```rust,ignore
/// use snake_dqn::rl::{default_device, DqnAgent, DqnConfig, QNetworkConfig, TrainingBackend};
///
/// let device = default_device();
/// let network = QNetworkConfig::new().init::<TrainingBackend>(&device);
/// let mut agent = DqnAgent::new(network, DqnConfig::default(), device);
///
/// let action = agent.act(&[0.0; 11]);
/// ```
pub struct DqnAgent<B: AutodiffBackend> {
    /// Q-value approximator; weights survive episode resets
    network: QNetwork<B>,

    /// Trainer holding the optimizer state
    trainer: QTrainer<B>,

    /// Replay memory for batched learning
    memory: ReplayMemory,

    /// Hyperparameters
    config: DqnConfig,

    /// Current exploration rate
    epsilon: f32,

    /// Episode counter
    episodes_trained: usize,

    /// Device for tensor operations
    device: B::Device,
}

impl<B: AutodiffBackend> DqnAgent<B> {
    /// Create a new agent
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn new(network: QNetwork<B>, config: DqnConfig, device: B::Device) -> Self {
        config.validate().expect("Invalid DQN configuration");

        let trainer = QTrainer::new(config.learning_rate, config.gamma, device.clone());
        let memory = ReplayMemory::new(config.memory_capacity);
        let epsilon = config.epsilon_start;

        Self {
            network,
            trainer,
            memory,
            config,
            epsilon,
            episodes_trained: 0,
            device,
        }
    }

    /// Select an action for the given state
    ///
    /// Epsilon decays by a fixed step on every call, floored at the
    /// configured minimum so exploration never fully vanishes. With
    /// probability epsilon a uniformly random action is returned
    /// (exploration); otherwise the action with the highest Q-value
    /// (exploitation), ties broken by the first maximum.
    pub fn act(&mut self, state: &StateVec) -> Turn {
        self.epsilon = (self.epsilon - self.config.epsilon_decay).max(self.config.epsilon_min);

        let mut rng = rand::thread_rng();
        if rng.gen::<f32>() < self.epsilon {
            Turn::from_index(rng.gen_range(0..Turn::ALL.len()))
        } else {
            self.greedy(state)
        }
    }

    /// Action with the highest predicted Q-value, first maximum on ties
    fn greedy(&self, state: &StateVec) -> Turn {
        let q_values: Vec<f32> = self
            .network
            .valid()
            .forward(to_tensor(state, &self.device))
            .into_data()
            .to_vec()
            .expect("Q-values to vec");

        let mut best = 0;
        for (i, &q) in q_values.iter().enumerate().skip(1) {
            if q > q_values[best] {
                best = i;
            }
        }

        Turn::from_index(best)
    }

    /// Record a transition in replay memory
    pub fn observe(&mut self, transition: Transition) {
        self.memory.push(transition);
    }

    /// Train on a single transition, the same tick it was produced
    ///
    /// Returns the training loss for telemetry.
    pub fn learn_online(&mut self, transition: &Transition) -> f32 {
        let (network, loss) = self
            .trainer
            .train_step(self.network.clone(), std::slice::from_ref(transition));
        self.network = network;
        loss
    }

    /// Train on a batch sampled from replay memory, once per episode end
    ///
    /// Samples `min(batch_size, memory len)` transitions. Returns `None`
    /// without training when the memory is empty.
    pub fn learn_batch(&mut self) -> Result<Option<f32>> {
        let k = self.config.batch_size.min(self.memory.len());
        if k == 0 {
            return Ok(None);
        }

        let batch = self.memory.sample(k)?;
        let (network, loss) = self.trainer.train_step(self.network.clone(), &batch);
        self.network = network;

        Ok(Some(loss))
    }

    /// Current exploration rate
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Number of transitions currently held in replay memory
    pub fn memory_len(&self) -> usize {
        self.memory.len()
    }

    /// Get the number of episodes trained
    pub fn episodes_trained(&self) -> usize {
        self.episodes_trained
    }

    /// Increment the episode counter
    pub fn increment_episode(&mut self) {
        self.episodes_trained += 1;
    }

    /// Get a reference to the Q-network
    pub fn network(&self) -> &QNetwork<B> {
        &self.network
    }

    /// Get a reference to the agent configuration
    pub fn config(&self) -> &DqnConfig {
        &self.config
    }
}
