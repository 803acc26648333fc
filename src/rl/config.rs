//! Q-learning hyperparameter configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Q-learning algorithm
///
/// Contains all hyperparameters used by the agent and trainer. Defaults
/// match the values the training setup was tuned with.
///
/// # Example
///
/// ```rust
/// use snake_dqn::rl::DqnConfig;
///
/// // Use default hyperparameters
/// let config = DqnConfig::default();
///
/// // Or customize specific parameters
/// let config = DqnConfig {
///     gamma: 0.99,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqnConfig {
    /// Learning rate for the Adam optimizer
    ///
    /// Default: 1e-3
    pub learning_rate: f64,

    /// Discount factor for future rewards (gamma)
    ///
    /// Default: 0.97
    pub gamma: f32,

    /// Initial exploration rate
    ///
    /// Default: 1.0
    pub epsilon_start: f32,

    /// Amount subtracted from epsilon on every action selection
    ///
    /// Default: 1e-4
    pub epsilon_decay: f32,

    /// Floor below which epsilon never drops, so exploration never fully
    /// vanishes
    ///
    /// Default: 1e-4
    pub epsilon_min: f32,

    /// Number of transitions sampled for the batched update at episode end
    ///
    /// Fewer are used when the replay memory holds less than this.
    ///
    /// Default: 20
    pub batch_size: usize,

    /// Replay memory capacity
    ///
    /// Default: 10000
    pub memory_capacity: usize,
}

impl DqnConfig {
    /// Create a new configuration with default hyperparameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error
    /// message otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snake_dqn::rl::DqnConfig;
    ///
    /// let mut config = DqnConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.gamma = 1.5;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), String> {
        if self.learning_rate <= 0.0 {
            return Err(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            ));
        }

        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(format!("gamma must be in [0, 1], got {}", self.gamma));
        }

        if !(0.0..=1.0).contains(&self.epsilon_start) {
            return Err(format!(
                "epsilon_start must be in [0, 1], got {}",
                self.epsilon_start
            ));
        }

        if self.epsilon_decay <= 0.0 {
            return Err(format!(
                "epsilon_decay must be positive, got {}",
                self.epsilon_decay
            ));
        }

        if self.epsilon_min < 0.0 {
            return Err(format!(
                "epsilon_min must be non-negative, got {}",
                self.epsilon_min
            ));
        }

        if self.epsilon_min > self.epsilon_start {
            return Err(format!(
                "epsilon_min ({}) cannot exceed epsilon_start ({})",
                self.epsilon_min, self.epsilon_start
            ));
        }

        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }

        if self.memory_capacity == 0 {
            return Err("memory_capacity must be at least 1".to_string());
        }

        if self.batch_size > self.memory_capacity {
            return Err(format!(
                "batch_size ({}) cannot exceed memory_capacity ({})",
                self.batch_size, self.memory_capacity
            ));
        }

        Ok(())
    }
}

impl Default for DqnConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
            gamma: 0.97,
            epsilon_start: 1.0,
            epsilon_decay: 1e-4,
            epsilon_min: 1e-4,
            batch_size: 20,
            memory_capacity: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DqnConfig::default();
        assert_eq!(config.learning_rate, 1e-3);
        assert_eq!(config.gamma, 0.97);
        assert_eq!(config.epsilon_start, 1.0);
        assert_eq!(config.epsilon_decay, 1e-4);
        assert_eq!(config.epsilon_min, 1e-4);
        assert_eq!(config.batch_size, 20);
        assert_eq!(config.memory_capacity, 10_000);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(DqnConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_negative_learning_rate() {
        let mut config = DqnConfig::default();
        config.learning_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_gamma_out_of_range() {
        let mut config = DqnConfig::default();
        config.gamma = 1.5;
        assert!(config.validate().is_err());

        config.gamma = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_epsilon_bounds() {
        let mut config = DqnConfig::default();
        config.epsilon_start = 1.5;
        assert!(config.validate().is_err());

        config.epsilon_start = 1.0;
        config.epsilon_min = -0.1;
        assert!(config.validate().is_err());

        config.epsilon_min = 0.5;
        config.epsilon_start = 0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_decay() {
        let mut config = DqnConfig::default();
        config.epsilon_decay = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_batch_size_exceeds_capacity() {
        let mut config = DqnConfig::default();
        config.batch_size = 20_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_config() {
        let config = DqnConfig {
            gamma: 0.99,
            batch_size: 32,
            ..Default::default()
        };
        assert_eq!(config.gamma, 0.99);
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.learning_rate, 1e-3); // From default
        assert!(config.validate().is_ok());
    }
}
