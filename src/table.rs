//! Table geometry: compass directions and integer grid positions.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A compass heading on the table.
///
/// The variants are declared in clockwise order, which is the order rotation
/// walks through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Canonical display name, e.g. `"North"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }

    /// Looks up a direction by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(name))
    }

    /// The direction one quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    /// The direction one quarter turn clockwise.
    pub const fn right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// Unit step on the grid when moving in this direction. North is +Y.
    pub const fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An integer cell coordinate. Carries no bounds of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(IVec2);

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(self) -> i32 {
        self.0.x
    }

    pub const fn y(self) -> i32 {
        self.0.y
    }

    /// The neighbouring cell one unit towards `direction`.
    ///
    /// Saturates at the `i32` range so the result is always defined.
    pub fn step(self, direction: Direction) -> Self {
        Self(self.0.saturating_add(direction.delta()))
    }

    /// Whether both coordinates lie in `[0, grid_size)`.
    pub fn is_within(self, grid_size: u32) -> bool {
        let in_range = |c: i32| u32::try_from(c).is_ok_and(|c| c < grid_size);
        in_range(self.0.x) && in_range(self.0.y)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Self(v)
    }
}

impl From<Position> for IVec2 {
    fn from(p: Position) -> Self {
        p.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.0.x, self.0.y)
    }
}
