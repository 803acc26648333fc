use super::observation::{encode_state, StateVec};
use crate::game::{GameConfig, GameEngine, GameState, Turn};

/// Snake environment for reinforcement learning
///
/// Wraps the game engine behind a standard RL interface (reset, step) with
/// encoded vector observations, and computes the reward signal from pre/post
/// step snapshots:
/// - death: `death_penalty`, terminal
/// - food eaten (score increased): `food_reward`
/// - Euclidean head-to-food distance strictly decreased: `approach_reward`
/// - otherwise: 0
pub struct SnakeEnvironment {
    engine: GameEngine,
    state: GameState,
    config: GameConfig,
}

impl SnakeEnvironment {
    /// Create a new Snake environment
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config.clone());
        let state = engine.reset();
        Self {
            engine,
            state,
            config,
        }
    }

    /// Reset the environment for a fresh episode and return the initial
    /// encoded state
    pub fn reset(&mut self) -> StateVec {
        self.state = self.engine.reset();
        encode_state(&self.state)
    }

    /// Step the environment with an agent action
    ///
    /// The turn is resolved against the current heading into an absolute
    /// heading request (`Straight` continues without one). When the head
    /// sits on the food the step is a growing move that also relocates the
    /// food and increments the score.
    ///
    /// Returns `(next_state, reward, done)`.
    pub fn step(&mut self, action: Turn) -> (StateVec, f32, bool) {
        let score_before = self.state.score;
        let distance_before = self.state.distance_to_food();

        let requested = match action {
            Turn::Straight => None,
            turn => Some(self.state.snake.direction.turned(turn)),
        };

        let alive = if self.state.is_food_reached() {
            self.engine.grow_and_step(&mut self.state, requested)
        } else {
            self.engine.step(&mut self.state, requested)
        };

        let reward = if !alive {
            self.config.death_penalty
        } else if self.state.score > score_before {
            self.config.food_reward
        } else if self.state.distance_to_food() < distance_before {
            self.config.approach_reward
        } else {
            0.0
        };

        (encode_state(&self.state), reward, !alive)
    }

    /// Get the current encoded state without stepping
    pub fn observe(&self) -> StateVec {
        encode_state(&self.state)
    }

    /// Read-only snapshot of the underlying game state
    ///
    /// This is the surface a renderer consumes: ordered snake cells, food
    /// cell, score, and the terminal flag.
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
