use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells, including the one-cell wall ring
    pub grid_width: usize,
    /// Height of the game grid in cells, including the one-cell wall ring
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Rewards (for RL)
    /// Reward for eating food
    pub food_reward: f32,
    /// Reward for moving strictly closer to the food without eating
    pub approach_reward: f32,
    /// Penalty for dying
    pub death_penalty: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 16,
            grid_height: 14,
            initial_snake_length: 2,
            food_reward: 10.0,
            approach_reward: 1.0,
            death_penalty: -10.0,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Validate configuration parameters
    ///
    /// The grid must be large enough to place the initial snake and food
    /// inside the playable interior `[1, width-2] x [1, height-2]`.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_snake_length < 2 {
            return Err(format!(
                "initial_snake_length must be at least 2, got {}",
                self.initial_snake_length
            ));
        }

        // Head spawns at (width/2 - 2, height/2) heading Right, body extending
        // left, and the initial food 3 cells to the head's right.
        let head_x = self.grid_width as i32 / 2 - 2;
        let tail_x = head_x - (self.initial_snake_length as i32 - 1);
        let food_x = head_x + 3;
        let head_y = self.grid_height as i32 / 2;

        if tail_x < 1 || food_x > self.grid_width as i32 - 2 {
            return Err(format!(
                "grid_width {} too small for initial snake length {}",
                self.grid_width, self.initial_snake_length
            ));
        }

        if head_y < 1 || head_y > self.grid_height as i32 - 2 {
            return Err(format!("grid_height {} too small", self.grid_height));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 16);
        assert_eq!(config.grid_height, 14);
        assert_eq!(config.initial_snake_length, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_small_config_is_valid() {
        assert!(GameConfig::small().validate().is_ok());
    }

    #[test]
    fn test_validation_short_snake() {
        let mut config = GameConfig::default();
        config.initial_snake_length = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_tiny_grid() {
        let config = GameConfig::new(4, 4);
        assert!(config.validate().is_err());
    }
}
