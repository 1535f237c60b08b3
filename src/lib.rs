//! # toy-robot
//!
//! A single robot on a square table, driven by line-based text commands
//! (`PLACE X,Y,DIRECTION`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! The [`Robot`] owns all state and never fails: placements off the table and
//! moves over the edge are ignored. The [`CommandInterpreter`] parses lines into
//! [`Command`]s and reports grammar errors as [`CommandError`]. [`Session`] wraps
//! both in a read-execute-print loop over pluggable input and output ports.

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod robot;
pub mod session;
pub mod table;

pub use command::*;
pub use config::*;
pub use error::*;
pub use interpreter::*;
pub use robot::*;
pub use session::*;
pub use table::*;
