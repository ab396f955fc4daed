//! # acad-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ACAD_*` prefix, `__` as separator)
//! 2. Project-level `.acad/config.toml`
//! 3. User-level `~/.config/acad/config.toml`
//! 4. Built-in defaults
//!
//! `ACAD_API__TOKEN` maps to `api.token`, `ACAD_GENERAL__SORT_BY_NAME` to
//! `general.sort_by_name`, and so on.
//!
//! ```no_run
//! use acad_config::AcadConfig;
//!
//! let config = AcadConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("backend: {}", config.api.base_url);
//! }
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ACAD_";
const PROJECT_CONFIG: &str = ".acad/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AcadConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AcadConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`AcadConfig::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then every other layer.
    ///
    /// # Errors
    ///
    /// Same as [`AcadConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the provider chain. Public so tests can layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("acad").join("config.toml"))
    }
}
