//! # lingo-config
//!
//! Layered configuration loading for Lingo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LINGO_*` prefix, `__` as separator)
//! 2. Project-level `.lingo/config.toml`
//! 3. User-level `~/.config/lingo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LINGO_DATABASE__PATH` -> `database.path`,
//! `LINGO_RETRY__MAX_ATTEMPTS` -> `retry.max_attempts`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lingo_config::LingoConfig;
//!
//! let config = LingoConfig::load_with_dotenv().expect("config");
//!
//! if config.database.is_remote() {
//!     println!("Replica of: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod retry;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use retry::RetryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LingoConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl LingoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lingo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LINGO_").split("__"))
    }

    /// Cross-field checks figment cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        if !db.url.is_empty() && db.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        self.retry.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lingo").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if absent.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
