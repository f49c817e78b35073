use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{provider::livedoor::DEFAULT_BASE_URL, region};

/// Place used when neither the command line nor the config names one.
pub const FALLBACK_PLACE: &str = "Tokyo";

/// Timeout applied to the forecast request unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_place = "Hokkaido"
/// base_url = "https://weather.tsukumijima.net/api/forecast"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub default_place: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Configured default place, or `Tokyo`.
    pub fn default_place(&self) -> &str {
        self.default_place.as_deref().unwrap_or(FALLBACK_PLACE)
    }

    /// Store the default place after checking it against the region table.
    pub fn set_default_place(&mut self, place: &str) -> Result<()> {
        if !region::is_known(place) {
            return Err(anyhow!(
                "Unknown place '{place}'.\n\
                 Hint: run `weather places` to list the supported names."
            ));
        }
        self.default_place = Some(place.to_string());
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
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

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-checker", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Parse and validate config file contents.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;

        if let Some(place) = cfg.default_place.as_deref() {
            if !region::is_known(place) {
                return Err(anyhow!("default_place '{place}' is not a supported place"));
            }
        }
        if cfg.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::default();

        assert_eq!(cfg.default_place(), "Tokyo");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn set_default_place_accepts_known_place() {
        let mut cfg = Config::default();

        cfg.set_default_place("Okinawa").expect("known place");

        assert_eq!(cfg.default_place(), "Okinawa");
    }

    #[test]
    fn set_default_place_rejects_unknown_place() {
        let mut cfg = Config::default();

        let err = cfg.set_default_place("California").unwrap_err();

        assert!(err.to_string().contains("Unknown place 'California'"));
        assert_eq!(cfg.default_place, None);
    }

    #[test]
    fn parses_full_toml() {
        let cfg = Config::from_toml(
            r#"
            default_place = "Hokkaido"
            base_url = "https://weather.tsukumijima.net/api/forecast"
            timeout_secs = 5
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.default_place(), "Hokkaido");
        assert_eq!(cfg.base_url(), "https://weather.tsukumijima.net/api/forecast");
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").expect("empty is valid"), Config::default());
    }

    #[test]
    fn rejects_unknown_default_place_and_zero_timeout() {
        assert!(Config::from_toml(r#"default_place = "tokyo""#).is_err());
        assert!(Config::from_toml("timeout_secs = 0").is_err());
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut cfg = Config::default();
        cfg.set_default_place("Kyoto").unwrap();
        cfg.timeout_secs = Some(3);

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }
}
