//! Ledger configuration via `treeledger.toml`
//!
//! Holds the key convention shared by seeding and listing, the decode policy
//! for quantity updates, and the logging settings. A default file can be
//! written next to the host's other configuration; edit it and restart to
//! change settings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "treeledger.toml";

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("config file '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The file is not valid TOML for this config
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// The values parsed but are not usable
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Logging settings, the `[logging]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: `"trace"`, `"debug"`, `"info"`, `"warn"` or `"error"`.
    pub level: String,
    /// Include the module target in each line.
    pub target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            target: false,
        }
    }
}

impl LoggingConfig {
    /// Parse `level` into a `tracing::Level`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an unknown level name.
    pub fn max_level(&self) -> Result<Level, ConfigError> {
        self.level.parse::<Level>().map_err(|_| {
            ConfigError::Invalid(format!(
                "unknown log level '{}', expected trace, debug, info, warn or error",
                self.level
            ))
        })
    }
}

/// Ledger configuration loaded from `treeledger.toml`.
///
/// # Example
///
/// ```toml
/// key_prefix = "CAR"
/// scan_start = "0"
/// scan_end = "999"
/// lenient_decode = false
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Prefix of every seeded key; seeded keys are `prefix + index`.
    pub key_prefix: String,
    /// Suffix of the inclusive lower bound of the listing scan.
    pub scan_start: String,
    /// Suffix of the exclusive upper bound of the listing scan.
    pub scan_end: String,
    /// Treat malformed stored records as empty during quantity updates
    /// instead of failing.
    pub lenient_decode: bool,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            key_prefix: "CAR".to_string(),
            scan_start: "0".to_string(),
            scan_end: "999".to_string(),
            lenient_decode: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl LedgerConfig {
    /// Key of the `index`-th seeded record.
    pub fn seed_key(&self, index: usize) -> String {
        format!("{}{}", self.key_prefix, index)
    }

    /// Half-open key range scanned by the listing.
    pub fn scan_range(&self) -> (String, String) {
        (
            format!("{}{}", self.key_prefix, self.scan_start),
            format!("{}{}", self.key_prefix, self.scan_end),
        )
    }

    /// Check the values are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the prefix is empty, the scan range
    /// is empty, or the log level is unknown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_prefix.is_empty() {
            return Err(ConfigError::Invalid("key_prefix must not be empty".into()));
        }
        if self.scan_start >= self.scan_end {
            return Err(ConfigError::Invalid(format!(
                "scan_start '{}' must sort before scan_end '{}'",
                self.scan_start, self.scan_end
            )));
        }
        self.logging.max_level()?;
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# treeledger configuration
#
# Seeded records are stored under key_prefix + index ("CAR0", "CAR1", ...).
# The listing scans [key_prefix + scan_start, key_prefix + scan_end).
key_prefix = "CAR"
scan_start = "0"
scan_end = "999"

# When true, a quantity update on a malformed stored record starts from an
# empty record instead of failing with a decode error.
lenient_decode = false

[logging]
# trace | debug | info | warn | error
level = "info"
# Include the module path in each log line.
target = false
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LedgerConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}
