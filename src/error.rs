//! Error types for command parsing and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning a text line into a [`Command`](crate::Command).
///
/// The display strings are part of the interface: the session prints them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was empty.
    #[error("Parameter 'command cannot be null or empty'")]
    EmptyInput,

    /// The first token is not a known command. Holds the whole input line.
    #[error("Invalid command value: {0}")]
    UnknownCommand(String),

    /// `PLACE` without exactly one `X,Y,DIRECTION` argument.
    #[error("Invalid PLACE command parameters. Valid format: PLACE X,Y,DIRECTION")]
    MalformedPlaceArguments,

    /// `X` or `Y` is not an integer. Holds the offending text.
    #[error("Invalid location. X and Y must be a number. Example: PLACE 3,2,NORTH")]
    InvalidCoordinate(String),

    /// `DIRECTION` is not a compass name. Holds the offending text.
    #[error("Invalid direction. Valid directions: NORTH|EAST|SOUTH|WEST")]
    InvalidDirection(String),
}

/// Payload-free discriminant of [`CommandError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandErrorKind {
    EmptyInput,
    UnknownCommand,
    MalformedPlaceArguments,
    InvalidCoordinate,
    InvalidDirection,
}

impl CommandError {
    #[must_use]
    pub const fn kind(&self) -> CommandErrorKind {
        match self {
            Self::EmptyInput => CommandErrorKind::EmptyInput,
            Self::UnknownCommand(_) => CommandErrorKind::UnknownCommand,
            Self::MalformedPlaceArguments => CommandErrorKind::MalformedPlaceArguments,
            Self::InvalidCoordinate(_) => CommandErrorKind::InvalidCoordinate,
            Self::InvalidDirection(_) => CommandErrorKind::InvalidDirection,
        }
    }
}

/// Errors raised while loading a [`TableConfig`](crate::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("grid size must be at least 1")]
    ZeroGridSize,
}
