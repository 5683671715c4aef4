//! Configuration types and loading for the project board.
//!
//! The main entry point is [`BoardConfig`], which represents the contents of
//! `board.yaml`. Configuration is loaded with [`load_config`] and saved with
//! [`save_config`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use board_core::idgen::{DEFAULT_LENGTH, DEFAULT_PREFIX};
use board_core::store::IdConfig;
use board_core::validation::InputRules;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Project id configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdsConfig {
    /// Prefix placed before the hash (e.g., `"prj"` gives `prj-k3x9a2`).
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Number of base36 characters after the prefix.
    #[serde(default = "default_length")]
    pub length: usize,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            length: default_length(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

/// Form validation configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Optional maximum title length.
    #[serde(default, rename = "title-max-length", skip_serializing_if = "Option::is_none")]
    pub title_max_length: Option<usize>,

    /// Minimum description length.
    #[serde(default = "default_description_min", rename = "description-min-length")]
    pub description_min_length: usize,

    /// Fewest people a project may have.
    #[serde(default = "default_people_min", rename = "people-min")]
    pub people_min: u32,

    /// Most people a project may have.
    #[serde(default = "default_people_max", rename = "people-max")]
    pub people_max: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: default_description_min(),
            people_min: default_people_min(),
            people_max: default_people_max(),
        }
    }
}

fn default_description_min() -> usize {
    5
}

fn default_people_min() -> u32 {
    1
}

fn default_people_max() -> u32 {
    5
}

/// Display configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Whether colored output is allowed at all. Terminal detection still
    /// applies when `true`.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full board configuration, corresponding to `board.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// will be deserialized correctly with sensible default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BoardConfig {
    #[serde(default)]
    pub ids: IdsConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl BoardConfig {
    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.ids.prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "ids.prefix".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(3..=12).contains(&self.ids.length) {
            return Err(ConfigError::InvalidValue {
                key: "ids.length".into(),
                reason: format!("must be between 3 and 12 (got {})", self.ids.length),
            });
        }
        if self.validation.people_min > self.validation.people_max {
            return Err(ConfigError::InvalidValue {
                key: "validation.people-min".into(),
                reason: format!(
                    "must not exceed people-max ({} > {})",
                    self.validation.people_min, self.validation.people_max
                ),
            });
        }
        Ok(())
    }

    /// Id settings for [`board_core::store::ProjectStore::with_id_config`].
    pub fn id_config(&self) -> IdConfig {
        IdConfig {
            prefix: self.ids.prefix.clone(),
            length: self.ids.length,
        }
    }

    /// Rules for the "add project" form.
    pub fn input_rules(&self) -> InputRules {
        InputRules {
            title_max_length: self.validation.title_max_length,
            description_min_length: self.validation.description_min_length,
            people_min: self.validation.people_min,
            people_max: self.validation.people_max,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from the YAML file at `path`.
///
/// If the file does not exist or is empty, a default [`BoardConfig`] is
/// returned. The loaded configuration is checked with
/// [`BoardConfig::validate`].
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// [`ConfigError::ParseError`] if it contains invalid YAML, or
/// [`ConfigError::InvalidValue`] if a value is out of range.
pub fn load_config(path: &Path) -> Result<BoardConfig> {
    if !path.exists() {
        return Ok(BoardConfig::default());
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Ok(BoardConfig::default());
    }

    let config: BoardConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save configuration as YAML to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or [`ConfigError::ParseError`]
/// if serialization fails.
pub fn save_config(path: &Path, config: &BoardConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.ids.prefix, "prj");
        assert_eq!(cfg.ids.length, 6);
        assert_eq!(cfg.input_rules(), InputRules::default());
        assert!(cfg.display.color);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let path = PathBuf::from("/nonexistent/path/board.yaml");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg, BoardConfig::default());
    }

    #[test]
    fn test_load_empty_config_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.yaml");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(load_config(&path).unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_roundtrip_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board.yaml");

        let mut cfg = BoardConfig::default();
        cfg.ids.prefix = "team".to_string();
        cfg.validation.people_max = 10;

        save_config(&path, &cfg).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded, cfg);
        assert_eq!(loaded.id_config().prefix, "team");
        assert_eq!(loaded.input_rules().people_max, 10);
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = "validation:\n  description-min-length: 10\n";
        let cfg: BoardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.validation.description_min_length, 10);
        // Everything else should be default
        assert_eq!(cfg.validation.people_min, 1);
        assert_eq!(cfg.ids, IdsConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.yaml");
        std::fs::write(&path, "validation:\n  people-min: 6\n  people-max: 2\n").unwrap();
        match load_config(&path) {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "validation.people-min"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }

        let mut cfg = BoardConfig::default();
        cfg.ids.length = 2;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.yaml");
        std::fs::write(&path, "ids: [unclosed\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
    }
}
