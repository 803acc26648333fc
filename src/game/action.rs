/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    ///
    /// The y axis points down, matching screen coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Resolve a heading-relative turn into an absolute direction
    ///
    /// `TurnRight` rotates clockwise and `TurnLeft` counter-clockwise (in
    /// screen coordinates, y down). `Straight` keeps the current heading.
    pub fn turned(self, turn: Turn) -> Direction {
        match turn {
            Turn::Straight => self,
            Turn::TurnRight => match self {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Up,
            },
            Turn::TurnLeft => match self {
                Direction::Up => Direction::Left,
                Direction::Left => Direction::Down,
                Direction::Down => Direction::Right,
                Direction::Right => Direction::Up,
            },
        }
    }
}

/// Action the agent can take, relative to the snake's current heading
///
/// This is the discrete action space of the learning agent. One-hot encoding
/// happens only at the value-approximator boundary; everywhere else the
/// action is carried as this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Keep moving in the current heading
    Straight,
    /// Rotate the heading 90 degrees clockwise
    TurnRight,
    /// Rotate the heading 90 degrees counter-clockwise
    TurnLeft,
}

impl Turn {
    /// All turns, in action-index order
    pub const ALL: [Turn; 3] = [Turn::Straight, Turn::TurnRight, Turn::TurnLeft];

    /// Index of this turn in the approximator's output vector
    pub fn index(&self) -> usize {
        match self {
            Turn::Straight => 0,
            Turn::TurnRight => 1,
            Turn::TurnLeft => 2,
        }
    }

    /// Turn for a given action index
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..3`. An out-of-range index means a caller
    /// bypassed the one-of-3 action contract, which is a programmer error.
    pub fn from_index(idx: usize) -> Turn {
        match idx {
            0 => Turn::Straight,
            1 => Turn::TurnRight,
            2 => Turn::TurnLeft,
            _ => panic!("invalid action index: {idx}"),
        }
    }
}
