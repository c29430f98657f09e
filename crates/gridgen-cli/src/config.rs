//! Configuration file loading and saving for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory),
//! and writing edited rosters and settings back to the file they came from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use gridgen::{GridGenError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

impl From<ConfigError> for GridGenError {
    fn from(err: ConfigError) -> Self {
        GridGenError::Config(err.to_string())
    }
}

/// A loaded configuration and the file it is saved back to.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (gridgen/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found, to be saved in the platform directory
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or contains invalid patterns
/// - No config file exists and no platform directory can be determined
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<LoadedConfig, GridGenError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("gridgen/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    let Some(proj_dirs) = ProjectDirs::from("com", "gridgen", "gridgen") else {
        debug!("Could not determine platform-specific config directory");
        return Err(ConfigError::NoConfigDir.into());
    };

    let system_config = proj_dirs.config_dir().join("config.toml");
    if system_config.exists() {
        info!(path = system_config.display().to_string(); "Loading configuration from system path");
        return load_config_file(system_config);
    }

    // 4. If no config is found, start from defaults
    debug!(
        path = system_config.display().to_string();
        "No configuration file found, using default configuration"
    );
    Ok(LoadedConfig {
        config: AppConfig::default(),
        path: system_config,
    })
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - A configured pattern is not a valid regular expression
fn load_config_file(path: impl AsRef<Path>) -> Result<LoadedConfig, GridGenError> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    // Read file content
    let content = fs::read_to_string(path)?;

    // Parse TOML content
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
    })
}

/// Write configuration to a TOML file, creating parent directories as needed
///
/// # Errors
///
/// Returns error if serialization fails or the file cannot be written.
pub fn save_config(config: &AppConfig, path: impl AsRef<Path>) -> Result<(), GridGenError> {
    let path = path.as_ref();
    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    info!(path = path.display().to_string(); "Configuration saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use gridgen::roster::RosterError;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, GridGenError::Config(msg) if msg.contains("missing.toml")));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[grids\ncount = 1").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, GridGenError::Config(msg) if msg.starts_with("Failed to parse")));
    }

    #[test]
    fn test_invalid_pattern_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[participants]\ngrouping_filter = \"(\"\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(GridGenError::Pattern { .. })
        ));
    }

    #[test]
    fn test_corrupt_roster_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[classes]\nSenior = [\"A1\", \"\", \"A1\"]\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(GridGenError::Roster(RosterError::Empty))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.add_class("Senior").unwrap();
        config
            .set_class_participants("Senior", vec!["A1".to_string(), "2F".to_string()])
            .unwrap();
        config.set_number_of_grids(12);
        save_config(&config, &path).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.config.grids().count(), 12);
        assert_eq!(loaded.config.class_participants("Senior"), ["A1", "2F"]);
    }
}
