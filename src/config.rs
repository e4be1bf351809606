//! Configuration management for ReelTUI
//!
//! Handles config file loading and API key resolution.
//! Config is stored at ~/.config/reeltui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TMDB API key (bearer token or v3 key)
    pub tmdb_api_key: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/reeltui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reeltui").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Resolve the TMDB API key:
    /// 1. Environment variable TMDB_API_KEY
    /// 2. Key from the config file
    pub fn tmdb_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        if let Some(key) = self.tmdb_api_key.as_deref() {
            if !key.trim().is_empty() {
                return Ok(key.to_string());
            }
        }

        anyhow::bail!(
            "No TMDB API key configured. Set the TMDB_API_KEY environment variable \
             or add `tmdb_api_key = \"...\"` to {}",
            Self::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "~/.config/reeltui/config.toml".to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_has_no_key() {
        let config = Config::default();
        assert!(config.tmdb_api_key.is_none());
    }

    #[test]
    fn test_config_file_key_is_used() {
        // Keep the env var out of the picture for this test
        if std::env::var("TMDB_API_KEY").is_ok() {
            return;
        }

        let config = Config {
            tmdb_api_key: Some("abc123".to_string()),
        };
        assert_eq!(config.tmdb_api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_blank_config_key_is_rejected() {
        if std::env::var("TMDB_API_KEY").is_ok() {
            return;
        }

        let config = Config {
            tmdb_api_key: Some("   ".to_string()),
        };
        assert!(config.tmdb_api_key().is_err());
    }

    #[test]
    fn test_config_parses_toml() {
        let config: Config = toml::from_str(r#"tmdb_api_key = "secret""#).unwrap();
        assert_eq!(config.tmdb_api_key.as_deref(), Some("secret"));
    }
}
