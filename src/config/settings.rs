//! TOML-based generator settings.
//!
//! Supports a config file (sqlmodel.toml). Every key is optional.
//!
//! Example configuration:
//! ```toml
//! dialect = "postgres"
//! quote_identifiers = true
//! default_precision = 12
//! default_scale = 4
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::sql::dialect::Dialect;
use crate::sql::error::SqlResult;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Settings a [`SqlStatementGenerator`](crate::sql::generator::SqlStatementGenerator)
/// is constructed from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Target database (ansi, derby, h2, mysql, mariadb, oracle, postgres).
    pub dialect: String,

    /// Wrap identifiers in the dialect's quote character.
    pub quote_identifiers: bool,

    /// DECIMAL precision when a column declares none.
    pub default_precision: Option<u32>,

    /// DECIMAL scale when a column declares none.
    pub default_scale: Option<u32>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            dialect: "ansi".to_string(),
            quote_identifiers: false,
            default_precision: None,
            default_scale: None,
        }
    }
}

impl GeneratorSettings {
    /// Settings for `dialect` with every other key at its default.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect: dialect.to_string(),
            ..Self::default()
        }
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: GeneratorSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SQLMODEL_CONFIG`
    /// 2. `./sqlmodel.toml`
    /// 3. `~/.config/sqlmodel/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SQLMODEL_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("sqlmodel.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sqlmodel").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(GeneratorSettings::default())
    }

    /// The configured dialect.
    pub fn dialect(&self) -> SqlResult<Dialect> {
        Dialect::parse(&self.dialect)
    }

    /// Check the dialect name and the decimal defaults.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.dialect()
            .map_err(|e| SettingsError::InvalidConfig(e.to_string()))?;

        if self.default_precision == Some(0) {
            return Err(SettingsError::InvalidConfig(
                "default_precision must be positive".to_string(),
            ));
        }

        if let (Some(precision), Some(scale)) = (self.default_precision, self.default_scale) {
            if scale > precision {
                return Err(SettingsError::InvalidConfig(format!(
                    "default_scale {} exceeds default_precision {}",
                    scale, precision
                )));
            }
        }

        Ok(())
    }
}
