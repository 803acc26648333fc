//! Replay memory for experience replay
//!
//! This module implements a bounded FIFO buffer of transitions with uniform
//! random sampling, used to decorrelate the batched learning performed at
//! episode boundaries.

use std::collections::VecDeque;

use anyhow::{bail, Result};
use rand::seq::index;

use super::observation::StateVec;
use crate::game::Turn;

/// One recorded step of experience
///
/// Stored by value; the action is carried as the closed [`Turn`] enum and
/// one-hot encoded only at the value-approximator boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Encoded state the action was taken in
    pub state: StateVec,
    /// Action taken
    pub action: Turn,
    /// Encoded state after the step
    pub next_state: StateVec,
    /// Reward received for the step
    pub reward: f32,
    /// Whether the step terminated the episode
    pub done: bool,
}

/// Bounded replay memory with uniform sampling
///
/// Holds at most `capacity` transitions; pushing past capacity evicts the
/// oldest entry. The memory is created once per training session and
/// persists across episodes.
///
/// # Example
///
/// ```rust
/// use snake_dqn::game::Turn;
/// use snake_dqn::rl::{ReplayMemory, Transition};
///
/// let mut memory = ReplayMemory::new(100);
/// memory.push(Transition {
///     state: [0.0; 11],
///     action: Turn::Straight,
///     next_state: [0.0; 11],
///     reward: 1.0,
///     done: false,
/// });
///
/// assert_eq!(memory.len(), 1);
/// let batch = memory.sample(1).unwrap();
/// assert_eq!(batch.len(), 1);
/// ```
pub struct ReplayMemory {
    memory: VecDeque<Transition>,
    capacity: usize,
}

impl ReplayMemory {
    /// Create a new replay memory with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            memory: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a transition, evicting the oldest entry once at capacity
    pub fn push(&mut self, transition: Transition) {
        if self.memory.len() == self.capacity {
            self.memory.pop_front();
        }
        self.memory.push_back(transition);
    }

    /// Sample `k` distinct transitions uniformly at random
    ///
    /// Sampling is without replacement. Requesting more transitions than the
    /// memory currently holds is an error, never a silent truncation;
    /// callers bound their requests with `min(desired, len())`.
    pub fn sample(&self, k: usize) -> Result<Vec<Transition>> {
        if k > self.memory.len() {
            bail!(
                "insufficient samples: requested {}, memory holds {}",
                k,
                self.memory.len()
            );
        }

        let mut rng = rand::thread_rng();
        let sampled = index::sample(&mut rng, self.memory.len(), k)
            .iter()
            .map(|i| self.memory[i])
            .collect();

        Ok(sampled)
    }

    /// Number of stored transitions
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Maximum number of transitions the memory can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(reward: f32) -> Transition {
        Transition {
            state: [0.0; 11],
            action: Turn::Straight,
            next_state: [0.0; 11],
            reward,
            done: false,
        }
    }

    #[test]
    fn test_new_memory_is_empty() {
        let memory = ReplayMemory::new(10);
        assert_eq!(memory.len(), 0);
        assert!(memory.is_empty());
        assert_eq!(memory.capacity(), 10);
    }

    #[test]
    fn test_push_and_len() {
        let mut memory = ReplayMemory::new(10);
        memory.push(transition(1.0));
        memory.push(transition(2.0));
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_capacity_bound_evicts_oldest() {
        let mut memory = ReplayMemory::new(5);

        // Push capacity + 3 transitions with distinguishable rewards.
        for i in 0..8 {
            memory.push(transition(i as f32));
        }

        assert_eq!(memory.len(), 5);

        // Exactly the most recent 5 pushes remain, oldest-first evicted.
        let rewards: Vec<f32> = memory.memory.iter().map(|t| t.reward).collect();
        assert_eq!(rewards, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_sample_returns_distinct_transitions() {
        let mut memory = ReplayMemory::new(10);
        for i in 0..10 {
            memory.push(transition(i as f32));
        }

        let batch = memory.sample(10).unwrap();
        assert_eq!(batch.len(), 10);

        let mut rewards: Vec<i32> = batch.iter().map(|t| t.reward as i32).collect();
        rewards.sort_unstable();
        assert_eq!(rewards, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sample_subset_size() {
        let mut memory = ReplayMemory::new(10);
        for i in 0..10 {
            memory.push(transition(i as f32));
        }

        let batch = memory.sample(4).unwrap();
        assert_eq!(batch.len(), 4);
    }

    #[test]
    fn test_oversized_sample_is_an_error() {
        let mut memory = ReplayMemory::new(10);
        memory.push(transition(1.0));

        let result = memory.sample(2);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("insufficient samples"));
    }

    #[test]
    fn test_sample_zero_is_empty() {
        let memory = ReplayMemory::new(10);
        let batch = memory.sample(0).unwrap();
        assert!(batch.is_empty());
    }
}
