//! Configuration for new events and the command-line front end
//!
//! Every field has a default, so an empty TOML file (or none at all) is a
//! valid configuration.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{PisteError, Result};

/// Settings read from `piste.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PisteConfig {
    /// Name given to events created without an explicit name
    pub event_name: String,

    /// Name of the tournament every new event starts with
    pub tournament_name: String,

    /// Winning threshold for the default tournament (points)
    ///
    /// Also drives the double-hit tolerance: at 7 points a bout may have
    /// two double hits before both fencers are punished.
    pub winning_threshold: u32,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for PisteConfig {
    fn default() -> Self {
        Self {
            event_name: "Event".to_string(),
            tournament_name: "Tournament".to_string(),
            winning_threshold: 7,
            log_filter: "piste=info".to_string(),
        }
    }
}

impl PisteConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PisteConfig = toml::from_str(content)?;
        config.validate().map_err(PisteError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.event_name.trim().is_empty() {
            return Err("event_name mustn't be blank".into());
        }

        if self.tournament_name.trim().is_empty() {
            return Err("tournament_name mustn't be blank".into());
        }

        if self.winning_threshold == 0 {
            return Err("winning_threshold must be positive".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<PisteConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static PisteConfig {
    CONFIG.get_or_init(PisteConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: PisteConfig) -> std::result::Result<(), PisteConfig> {
    CONFIG.set(config)
}
