use super::{
    action::Direction,
    config::GameConfig,
    state::{GameState, Position, Snake},
};
use rand::Rng;

/// The game engine that owns the rules of the simulation
///
/// The engine is stateless between calls apart from its RNG; all episode
/// state lives in [`GameState`], which is rebuilt by [`GameEngine::reset`]
/// at the start of every episode.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (grid too small for the
    /// initial snake and food placement).
    pub fn new(config: GameConfig) -> Self {
        config.validate().expect("Invalid game configuration");
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to its initial state
    ///
    /// The snake spawns left of center heading Right, and the initial food
    /// sits three cells to the head's right on the same row.
    pub fn reset(&mut self) -> GameState {
        let head = Position::new(
            self.config.grid_width as i32 / 2 - 2,
            self.config.grid_height as i32 / 2,
        );

        let snake = Snake::new(head, Direction::Right, self.config.initial_snake_length);
        let food = Position::new(head.x + 3, head.y);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one non-growing step
    ///
    /// The requested heading is resolved against the anti-reversal rule: a
    /// 180-degree request (and `None`) keeps the current heading. The
    /// returned bool is whether the snake is alive after the move.
    ///
    /// Collision is checked twice, asymmetrically: the pre-move head
    /// position gates whether the step executes at all (a world already in
    /// a colliding state never updates again), while the post-move head
    /// position determines the returned liveness.
    pub fn step(&mut self, state: &mut GameState, requested: Option<Direction>) -> bool {
        if state.is_collision(state.snake.head()) {
            state.is_alive = false;
            return false;
        }

        Self::resolve_heading(&mut state.snake, requested);
        state.snake.advance(false);
        state.steps += 1;

        state.is_alive = !state.is_collision(state.snake.head());
        state.is_alive
    }

    /// Execute one growing step: the tail cell is retained, the food is
    /// relocated to a random free interior cell, and the score increments
    ///
    /// Step semantics (heading resolution, pre/post collision checks) match
    /// [`GameEngine::step`]. Food relocation and the score increment happen
    /// before the post-move liveness check.
    pub fn grow_and_step(&mut self, state: &mut GameState, requested: Option<Direction>) -> bool {
        if state.is_collision(state.snake.head()) {
            state.is_alive = false;
            return false;
        }

        Self::resolve_heading(&mut state.snake, requested);
        state.snake.advance(true);
        state.food = self.spawn_food_avoid_snake(&state.snake);
        state.score += 1;
        state.steps += 1;

        state.is_alive = !state.is_collision(state.snake.head());
        state.is_alive
    }

    /// Update the snake heading, ignoring 180-degree reversal requests
    fn resolve_heading(snake: &mut Snake, requested: Option<Direction>) {
        if let Some(direction) = requested {
            if !snake.direction.is_opposite(direction) {
                snake.direction = direction;
            }
        }
    }

    /// Pick a uniformly random free interior cell for the food
    ///
    /// Rejection-sampled against the snake body, so the food never lands on
    /// an occupied cell.
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(1..self.config.grid_width as i32 - 1);
            let y = self.rng.gen_range(1..self.config.grid_height as i32 - 1);
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
