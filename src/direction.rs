use super::Square;
use std::ops::{Add, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A difference between two squares. Directions form a vector field, which
/// allows us to define subtraction between squares. Internally, they use the
/// same representation as a Square but with a signed integer.
pub struct Direction(pub i8);

impl Direction {
    /* Cardinal directions */

    /// A `Direction` corresponding to a movement from nowhere to nowhere.
    pub const NODIR: Direction = Direction(0);

    /// A `Direction` corresponding to a move "north" from White's point of
    /// view, in the direction a white pawn would travel.
    pub const NORTH: Direction = Direction(8);

    /// A `Direction` corresponding to a move "east" from White's point of view.
    pub const EAST: Direction = Direction(1);

    /// A `Direction` corresponding to a move "south" from White's point of
    /// view.
    pub const SOUTH: Direction = Direction(-8);

    /// A `Direction` corresponding to a move "west" from White's point of view.
    pub const WEST: Direction = Direction(-1);

    /* Composite directions */

    /// A `Direction` corresponding to a move "northwest" from White's point of
    /// view.
    pub const NORTHWEST: Direction = Direction(Direction::NORTH.0 + Direction::WEST.0);
    /// A `Direction` corresponding to a move "northeast" from White's point of
    /// view.
    pub const NORTHEAST: Direction = Direction(Direction::NORTH.0 + Direction::EAST.0);
    /// A `Direction` corresponding to a move "southeast" from White's point of
    /// view.
    pub const SOUTHEAST: Direction = Direction(Direction::SOUTH.0 + Direction::EAST.0);
    /// A `Direction` corresponding to a move "southwest" from White's point of
    /// view.
    pub const SOUTHWEST: Direction = Direction(Direction::SOUTH.0 + Direction::WEST.0);

    /* Knight directions */

    /// A `Direction` corresponding to a move "north-by-northwest" from White's
    /// point of view.
    pub const NNW: Direction = Direction(2 * Direction::NORTH.0 + Direction::WEST.0);

    /// A `Direction` corresponding to a move "north-by-northeast" from White's
    /// point of view.
    pub const NNE: Direction = Direction(2 * Direction::NORTH.0 + Direction::EAST.0);

    /// A `Direction` corresponding to a move "east-by-northeast" from White's
    /// point of view.
    pub const ENE: Direction = Direction(Direction::NORTH.0 + 2 * Direction::EAST.0);

    /// A `Direction` corresponding to a move "east-by-southeast" from White's
    /// point of view.
    pub const ESE: Direction = Direction(Direction::SOUTH.0 + 2 * Direction::EAST.0);

    /// A `Direction` corresponding to a move "south-by-southeast" from White's
    /// point of view.
    pub const SSE: Direction = Direction(2 * Direction::SOUTH.0 + Direction::EAST.0);

    /// A `Direction` corresponding to a move "south-by-southwest" from White's
    /// point of view.
    pub const SSW: Direction = Direction(2 * Direction::SOUTH.0 + Direction::WEST.0);

    /// A `Direction` corresponding to a move "west-by-southwest" from White's
    /// point of view.
    pub const WSW: Direction = Direction(Direction::SOUTH.0 + 2 * Direction::WEST.0);

    /// A `Direction` corresponding to a move "west-by-northwest" from White's
    /// point of view.
    pub const WNW: Direction = Direction(Direction::NORTH.0 + 2 * Direction::WEST.0);

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Direction; 8] = [
        Direction::NNW,
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
    ];

    /// The steps that a king can make.
    pub const KING_STEPS: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTHEAST,
        Direction::EAST,
        Direction::SOUTHEAST,
        Direction::SOUTH,
        Direction::SOUTHWEST,
        Direction::WEST,
        Direction::NORTHWEST,
    ];
}

impl Neg for Direction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Direction(-self.0)
    }
}

impl Add<Square> for Direction {
    type Output = Square;
    fn add(self, rhs: Square) -> Self::Output {
        rhs + self
    }
}

impl Add<Direction> for Direction {
    type Output = Self;
    fn add(self, rhs: Direction) -> Self::Output {
        Direction(self.0 + rhs.0)
    }
}

impl Sub<Direction> for Direction {
    type Output = Self;
    fn sub(self, rhs: Direction) -> Self::Output {
        Direction(self.0 - rhs.0)
    }
}
