//! Q-learning infrastructure for the Snake game
//!
//! Provides:
//! - 11-feature indicator-vector state encoding
//! - Bounded replay memory with uniform sampling
//! - A small feedforward Q-value approximator
//! - Bellman-target computation and the Adam gradient step
//! - The epsilon-greedy agent tying it all together

pub mod agent;
pub mod backend;
pub mod buffer;
pub mod config;
pub mod environment;
pub mod network;
pub mod observation;
pub mod trainer;

pub use agent::DqnAgent;
pub use backend::{default_device, InferenceBackend, TrainingBackend};
pub use buffer::{ReplayMemory, Transition};
pub use config::DqnConfig;
pub use environment::SnakeEnvironment;
pub use network::{QNetwork, QNetworkConfig};
pub use observation::{encode_state, to_tensor, StateVec, STATE_DIM};
pub use trainer::QTrainer;
