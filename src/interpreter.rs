//! Interpreter that turns text commands into [`Robot`] operations.
//!
//! The entry point is [`CommandInterpreter`]. Build it around a [`Robot`], then
//! feed it lines with [`CommandInterpreter::execute`], or already parsed
//! [`Command`]s with [`CommandInterpreter::apply`].

use crate::command::Command;
use crate::error::CommandError;
use crate::robot::Robot;
use tracing::debug;

/// Drives a single [`Robot`] from parsed commands.
///
/// Holds no state of its own beyond the robot.
#[derive(Clone, Debug, Default)]
pub struct CommandInterpreter {
    robot: Robot,
}

impl CommandInterpreter {
    pub fn new(robot: Robot) -> Self {
        Self { robot }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn into_robot(self) -> Robot {
        self.robot
    }

    /// Parses `line` and applies it to the robot.
    ///
    /// Returns the report text for `REPORT` on a placed robot, and an empty
    /// string for every other successful command. A `PLACE` that lands off the
    /// table is still a success: the robot simply stays where it was.
    pub fn execute(&mut self, line: &str) -> Result<String, CommandError> {
        let command = Command::parse(line)?;
        debug!(%command, "parsed command");
        Ok(self.apply(command))
    }

    /// Applies an already validated command. See [`execute`](Self::execute).
    pub fn apply(&mut self, command: Command) -> String {
        match command {
            Command::Place { x, y, facing } => {
                self.robot.place(x, y, facing);
            }
            Command::Move => {
                self.robot.move_forward();
            }
            Command::Left => {
                self.robot.rotate_left();
            }
            Command::Right => {
                self.robot.rotate_right();
            }
            Command::Report => return self.robot.report().unwrap_or_default(),
        }
        String::new()
    }
}
