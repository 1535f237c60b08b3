//! Table configuration, loadable from TOML.

use crate::error::ConfigError;
use crate::robot::{DEFAULT_GRID_SIZE, Robot};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a robot session.
///
/// ```toml
/// grid_size = 5
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Side length of the square table, in cells. Default: 5.
    pub grid_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl TableConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TableConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        Ok(())
    }

    /// An unplaced robot on a table of this size.
    pub fn build_robot(&self) -> Robot {
        Robot::new(self.grid_size)
    }
}
