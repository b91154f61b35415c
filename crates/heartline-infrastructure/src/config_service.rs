//! Loading and saving `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use heartline_core::Result;
use heartline_core::config::AppConfig;

use crate::paths::HeartlinePaths;

/// Reads and writes the client configuration file.
///
/// A missing or blank file is not an error: it yields [`AppConfig::default`].
/// A file that exists but does not parse is reported as a serialization error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Service for the default location, `~/.config/heartline/config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(HeartlinePaths::config_file()?))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        tracing::info!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }

    /// Writes the config, creating the parent directory if needed.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let toml_string = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml_string)?;
        tracing::info!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartline_core::subscription::GatingPolicy;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_blank_file_yields_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"\n   \n").unwrap();
        temp_file.flush().unwrap();

        let service = ConfigService::with_path(temp_file.path());
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"suggestion_delay_ms = \"soon\"").unwrap();
        temp_file.flush().unwrap();

        let err = ConfigService::with_path(temp_file.path()).load().unwrap_err();
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = AppConfig {
            suggestion_delay_ms: 10,
            gating_policy: GatingPolicy::Legacy,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("gating_policy = \"legacy\""));
        assert_eq!(service.load().unwrap(), config);
    }
}
