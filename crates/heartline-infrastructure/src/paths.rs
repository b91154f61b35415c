//! Path resolution for Heartline's on-disk files.
//!
//! ```text
//! ~/.config/heartline/         # Config directory (platform equivalent elsewhere)
//! └── config.toml              # Client configuration
//! ```

use std::path::PathBuf;

use heartline_core::{HeartlineError, Result};

const APP_DIR: &str = "heartline";

pub struct HeartlinePaths;

impl HeartlinePaths {
    /// Returns the Heartline configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| HeartlineError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        if let Ok(file) = HeartlinePaths::config_file() {
            assert!(file.ends_with("heartline/config.toml"));
        }
    }
}
