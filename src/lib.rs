//! Snake DQN - A Snake game with a Deep Q-Network agent
//!
//! This library provides:
//! - Core game logic (game module)
//! - Q-learning infrastructure (rl module): state encoding, replay memory,
//!   a small neural value approximator, and the gradient-update machinery
//! - Training statistics tracking (metrics module)
//! - Execution modes (modes module)

pub mod game;
pub mod metrics;
pub mod modes;
pub mod rl;
