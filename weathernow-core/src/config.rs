use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::ProviderId;

/// City searched automatically when the dashboard starts, unless configured.
pub const FALLBACK_CITY: &str = "London";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional start city shown on launch.
    pub default_city: Option<String>,

    /// Optional provider id, e.g. "mock".
    pub provider: Option<String>,
}

impl Config {
    /// The city the dashboard opens with.
    pub fn start_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(FALLBACK_CITY)
    }

    pub fn set_default_city(&mut self, city: String) {
        self.default_city = Some(city);
    }

    /// Return the configured provider as a strongly-typed ProviderId; the
    /// mock source is the default when nothing is configured.
    pub fn provider_id(&self) -> Result<ProviderId> {
        match self.provider.as_deref() {
            Some(s) => ProviderId::try_from(s),
            None => Ok(ProviderId::Mock),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_city_falls_back_to_london() {
        let cfg = Config::default();
        assert_eq!(cfg.start_city(), "London");
    }

    #[test]
    fn configured_start_city_wins() {
        let mut cfg = Config::default();
        cfg.set_default_city("Reykjavik".to_string());
        assert_eq!(cfg.start_city(), "Reykjavik");
    }

    #[test]
    fn provider_defaults_to_mock() {
        let cfg = Config::default();
        assert_eq!(cfg.provider_id().unwrap(), ProviderId::Mock);
    }

    #[test]
    fn unknown_provider_id_errors() {
        let cfg = Config {
            provider: Some("weatherapi".to_string()),
            ..Config::default()
        };
        let err = cfg.provider_id().unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }
}
