use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::csv::ImportConfig;
use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "eventpro.toml";
pub const ENV_PREFIX: &str = "EVENTPRO_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    pub import: ImportConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            import: ImportConfig::default(),
        }
    }
}

/// Layered settings: defaults, then the TOML file, then `EVENTPRO_*` env vars
pub struct ConfigService {
    config_file: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            config_file: path.as_ref().to_path_buf(),
        }
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AppSettings::default()))
            .merge(Toml::file(&self.config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(&self) -> Result<AppSettings> {
        let settings: AppSettings = self.figment().extract()?;
        settings.import.validate().map_err(|e| {
            AppError::ConfigError(format!("Invalid import config: {}", e))
        })?;
        Ok(settings)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
