//! Planner configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BAKEHOUSE_SEED_FILE` - YAML seed file (default: bundled sample data)
//! - `BAKEHOUSE_STORE_ID` - Store whose inventory the planner uses (default: st-001)
//! - `BAKEHOUSE_HQ_ID` - Source location for ingredient orders (default: hq-001)
//! - `BAKEHOUSE_LOG_FORMAT` - `text` or `json` (default: text)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use bakehouse_core::LocationId;

use crate::seed::{SeedData, SeedError};

const DEFAULT_STORE_ID: &str = "st-001";
const DEFAULT_HQ_ID: &str = "hq-001";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Seed file to load instead of the bundled sample
    pub seed_file: Option<PathBuf>,
    /// Store whose inventory production draws from
    pub store_id: LocationId,
    /// Location ingredient orders ship from
    pub hq_id: LocationId,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            store_id: LocationId::new(DEFAULT_STORE_ID),
            hq_id: LocationId::new(DEFAULT_HQ_ID),
            log_format: LogFormat::Text,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed_file = get("BAKEHOUSE_SEED_FILE").map(PathBuf::from);
        let store_id = get_location(&get, "BAKEHOUSE_STORE_ID", DEFAULT_STORE_ID)?;
        let hq_id = get_location(&get, "BAKEHOUSE_HQ_ID", DEFAULT_HQ_ID)?;
        let log_format = get("BAKEHOUSE_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("BAKEHOUSE_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            seed_file,
            store_id,
            hq_id,
            log_format,
        })
    }

    /// Load the configured seed file, or the bundled sample if none is set.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the seed data cannot be loaded.
    pub fn load_seed(&self) -> Result<SeedData, SeedError> {
        match &self.seed_file {
            Some(path) => SeedData::from_path(path),
            None => SeedData::sample(),
        }
    }
}

fn get_location(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<LocationId, ConfigError> {
    let value = get(key).unwrap_or_else(|| default.to_string());
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "location IDs cannot contain whitespace".to_string(),
        ));
    }
    Ok(LocationId::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.store_id.as_str(), "st-001");
        assert_eq!(config.hq_id.as_str(), "hq-001");
    }

    #[test]
    fn test_overrides() {
        let config = PlannerConfig::from_lookup(lookup(&[
            ("BAKEHOUSE_SEED_FILE", "/etc/bakehouse/seed.yaml"),
            ("BAKEHOUSE_STORE_ID", "st-002"),
            ("BAKEHOUSE_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("/etc/bakehouse/seed.yaml"))
        );
        assert_eq!(config.store_id.as_str(), "st-002");
        assert_eq!(config.hq_id.as_str(), "hq-001");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[
            ("BAKEHOUSE_SEED_FILE", ""),
            ("BAKEHOUSE_STORE_ID", "  "),
        ]))
        .unwrap();
        assert!(config.seed_file.is_none());
        assert_eq!(config.store_id.as_str(), "st-001");
    }

    #[test]
    fn test_invalid_log_format() {
        let result = PlannerConfig::from_lookup(lookup(&[("BAKEHOUSE_LOG_FORMAT", "xml")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "BAKEHOUSE_LOG_FORMAT"
        ));
    }

    #[test]
    fn test_invalid_location_id() {
        let result = PlannerConfig::from_lookup(lookup(&[("BAKEHOUSE_HQ_ID", "hq 001")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "BAKEHOUSE_HQ_ID"
        ));
    }

    #[test]
    fn test_load_seed_defaults_to_sample() {
        let seed = PlannerConfig::default().load_seed().unwrap();
        assert_eq!(seed.products.len(), 10);
    }
}
