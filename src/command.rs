//! The command grammar.
//!
//! ```text
//! PLACE X,Y,DIRECTION
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! ```
//!
//! Command names and directions are matched ignoring ASCII case. Tokens are
//! separated by single spaces, so `PLACE  1,2,NORTH` (two spaces) is malformed.
//! Text after `MOVE`, `LEFT`, `RIGHT` and `REPORT` is ignored.

use crate::error::CommandError;
use crate::table::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

const TOKEN_SEPARATOR: char = ' ';
const ARGUMENT_SEPARATOR: char = ',';

/// A fully validated command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Place { x: i32, y: i32, facing: Direction },
    Move,
    Left,
    Right,
    Report,
}

/// The command keyword alone, without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandName {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl CommandName {
    pub const ALL: [CommandName; 5] = [
        CommandName::Place,
        CommandName::Move,
        CommandName::Left,
        CommandName::Right,
        CommandName::Report,
    ];

    /// Upper-case keyword as typed by users.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }

    pub fn from_keyword(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.keyword().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Command {
    /// Parses one input line.
    ///
    /// Validation runs in a fixed order: empty input, command keyword, `PLACE`
    /// argument shape, coordinates, direction. The first failure wins.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.is_empty() {
            return Err(CommandError::EmptyInput);
        }

        let tokens: Vec<&str> = line.split(TOKEN_SEPARATOR).collect();
        let name = CommandName::from_keyword(tokens[0])
            .ok_or_else(|| CommandError::UnknownCommand(line.to_string()))?;

        Ok(match name {
            CommandName::Place => Self::parse_place(&tokens)?,
            CommandName::Move => Self::Move,
            CommandName::Left => Self::Left,
            CommandName::Right => Self::Right,
            CommandName::Report => Self::Report,
        })
    }

    pub const fn name(&self) -> CommandName {
        match self {
            Self::Place { .. } => CommandName::Place,
            Self::Move => CommandName::Move,
            Self::Left => CommandName::Left,
            Self::Right => CommandName::Right,
            Self::Report => CommandName::Report,
        }
    }

    fn parse_place(tokens: &[&str]) -> Result<Self, CommandError> {
        let [_, arguments] = tokens else {
            return Err(CommandError::MalformedPlaceArguments);
        };

        let parts: Vec<&str> = arguments.split(ARGUMENT_SEPARATOR).collect();
        let [x, y, facing] = parts.as_slice() else {
            return Err(CommandError::MalformedPlaceArguments);
        };

        let coordinate = |text: &str| {
            text.parse::<i32>()
                .map_err(|_| CommandError::InvalidCoordinate(text.to_string()))
        };
        let x = coordinate(*x)?;
        let y = coordinate(*y)?;

        let facing = Direction::from_name(facing)
            .ok_or_else(|| CommandError::InvalidDirection(facing.to_string()))?;

        Ok(Self::Place { x, y, facing })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, facing } => {
                write!(f, "PLACE {x},{y},{}", facing.name().to_ascii_uppercase())
            }
            other => f.write_str(other.name().keyword()),
        }
    }
}
