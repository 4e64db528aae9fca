//! # kdecl-config
//!
//! Layered configuration loading for kdecl using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KDECL_*` prefix, `__` as separator)
//! 2. Project-level `.kdecl/config.toml`
//! 3. User-level `~/.config/kdecl/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KDECL_EXTRACT__LAYOUT` -> `extract.layout`,
//! `KDECL_PARSE__LENIENT` -> `parse.lenient`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use kdecl_config::KdeclConfig;
//!
//! let config = KdeclConfig::load_with_dotenv().expect("config");
//! let options = config.extract.options();
//! ```

mod error;
mod extract;
mod output;
mod parse;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use output::OutputConfig;
pub use parse::ParseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".kdecl/config.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KdeclConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl KdeclConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file from the working
    /// directory, if there is one.
    ///
    /// # Errors
    /// Same as [`KdeclConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("KDECL_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kdecl").join("config.toml"))
    }
}
