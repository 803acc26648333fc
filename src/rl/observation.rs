//! Indicator-vector state encoding for the Q-network
//!
//! The game state is compressed into 11 binary features:
//! - 0..3: danger one cell ahead in the straight, right-relative, and
//!   left-relative direction from the current heading
//! - 3..7: one-hot heading (Up, Down, Left, Right)
//! - 7..11: food relative position (food left of, right of, above, below
//!   the head, each evaluated independently)

use burn::tensor::{backend::Backend, Tensor, TensorData};

use crate::game::{Direction, GameState, Turn};

/// Number of features in the encoded state vector
pub const STATE_DIM: usize = 11;

/// Encoded game state, as consumed by the value approximator
pub type StateVec = [f32; STATE_DIM];

/// Encode a game state into the 11-feature indicator vector
///
/// Pure and non-mutating: danger flags are produced by probing the three
/// heading-relative neighbor cells with the collision query.
pub fn encode_state(state: &GameState) -> StateVec {
    let head = state.snake.head();
    let heading = state.snake.direction;
    let food = state.food;

    let danger = |direction: Direction| state.is_collision(head.moved_in_direction(direction));

    [
        flag(danger(heading)),
        flag(danger(heading.turned(Turn::TurnRight))),
        flag(danger(heading.turned(Turn::TurnLeft))),
        flag(heading == Direction::Up),
        flag(heading == Direction::Down),
        flag(heading == Direction::Left),
        flag(heading == Direction::Right),
        flag(food.x < head.x),
        flag(food.x > head.x),
        flag(food.y < head.y),
        flag(food.y > head.y),
    ]
}

/// Convert an encoded state into a `[1, STATE_DIM]` tensor
pub fn to_tensor<B: Backend>(state: &StateVec, device: &B::Device) -> Tensor<B, 2> {
    Tensor::from_data(TensorData::new(state.to_vec(), [1, STATE_DIM]), device)
}

fn flag(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}
