//! Robot state and the rules that move it around the table.

use crate::table::{Direction, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Grid size used when none is configured.
pub const DEFAULT_GRID_SIZE: u32 = 5;

/// Where the robot stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub facing: Direction,
}

/// A single robot on a square table of `grid_size` x `grid_size` cells.
///
/// Every operation is defined in every state. Commands that would take the
/// robot off the table, or that arrive before it has been placed, leave the
/// state untouched instead of failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Robot {
    grid_size: u32,
    placement: Option<Placement>,
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Robot {
    /// Creates an unplaced robot. Valid coordinates are `[0, grid_size)` on both axes.
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            placement: None,
        }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn position(&self) -> Option<Position> {
        self.placement.map(|p| p.position)
    }

    pub fn facing(&self) -> Option<Direction> {
        self.placement.map(|p| p.facing)
    }

    /// Puts the robot at `(x, y)` facing `facing`.
    ///
    /// Returns `false`, keeping any previous placement, when the cell is off the table.
    pub fn place(&mut self, x: i32, y: i32, facing: Direction) -> bool {
        let position = Position::new(x, y);
        if !position.is_within(self.grid_size) {
            debug!(x, y, grid_size = self.grid_size, "place ignored: off the table");
            return false;
        }
        self.placement = Some(Placement { position, facing });
        true
    }

    /// Steps one cell forward. Returns `false` if unplaced or the step would leave the table.
    pub fn move_forward(&mut self) -> bool {
        let Some(current) = self.placement.as_mut() else {
            debug!("move ignored: robot not placed");
            return false;
        };

        let next = current.position.step(current.facing);
        if next == current.position || !next.is_within(self.grid_size) {
            debug!(position = %current.position, facing = %current.facing, "move blocked by table edge");
            return false;
        }
        current.position = next;
        true
    }

    /// Quarter turn counter-clockwise. Returns `false` if unplaced.
    pub fn rotate_left(&mut self) -> bool {
        self.rotate(Direction::left)
    }

    /// Quarter turn clockwise. Returns `false` if unplaced.
    pub fn rotate_right(&mut self) -> bool {
        self.rotate(Direction::right)
    }

    fn rotate(&mut self, turn: fn(Direction) -> Direction) -> bool {
        match self.placement.as_mut() {
            Some(p) => {
                p.facing = turn(p.facing);
                true
            }
            None => {
                debug!("rotate ignored: robot not placed");
                false
            }
        }
    }

    /// `"{x}, {y}, {Facing}"` when placed.
    pub fn report(&self) -> Option<String> {
        self.placement.map(|p| format!("{}, {}", p.position, p.facing))
    }
}
