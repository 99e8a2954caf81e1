use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Presenter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VivaConfig {
    /// Deck document to present instead of the bundled one
    pub deck: Option<PathBuf>,
    /// Show the quick-jump grid under the navigation bar
    pub quick_nav: bool,
    pub logging: LoggingConfig,
}

impl Default for VivaConfig {
    fn default() -> Self {
        Self {
            deck: None,
            quick_nav: true,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    pub directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            directory: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("viva").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

impl VivaConfig {
    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("viva").join("config.toml"))
    }

    /// Load configuration from a TOML or JSON file, chosen by extension
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("can't read config file {}", path.display()))?;

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&contents)
                .with_context(|| format!("invalid JSON config {}", path.display()))
        } else {
            toml::from_str(&contents)
                .with_context(|| format!("invalid TOML config {}", path.display()))
        }
    }

    /// Load configuration, falling back to defaults.
    ///
    /// An explicit path must load; the per-user file is optional and a
    /// broken one only produces a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::config_path() {
                Some(path) if path.exists() => match Self::load_from_file(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", path.display());
                        config
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {e:#}", path.display());
                        Self::default()
                    }
                },
                _ => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `VIVA_DECK` and `VIVA_LOG_DIR` overrides.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(deck) = lookup("VIVA_DECK").filter(|v| !v.is_empty()) {
            self.deck = Some(PathBuf::from(deck));
        }

        if let Some(dir) = lookup("VIVA_LOG_DIR").filter(|v| !v.is_empty()) {
            self.logging.directory = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: VivaConfig = toml::from_str("quick_nav = false\n").unwrap();
        assert!(!config.quick_nav);
        assert!(config.deck.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn loads_json_and_toml_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("viva.json");
        std::fs::write(&json, r#"{ "deck": "talk.json", "logging": { "level": "debug" } }"#)
            .unwrap();
        let config = VivaConfig::load_from_file(&json).unwrap();
        assert_eq!(config.deck, Some(PathBuf::from("talk.json")));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);

        let toml_path = dir.path().join("viva.toml");
        std::fs::write(&toml_path, "[logging]\nenabled = false\n").unwrap();
        let config = VivaConfig::load_from_file(&toml_path).unwrap();
        assert!(!config.logging.enabled);
        assert!(config.quick_nav);
    }

    #[test]
    fn explicit_config_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "quick_nav = [").unwrap();
        assert!(VivaConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn env_overrides_deck_and_log_dir() {
        let env: HashMap<&str, &str> =
            HashMap::from([("VIVA_DECK", "/tmp/deck.json"), ("VIVA_LOG_DIR", "")]);
        let mut config = VivaConfig::default();
        let default_dir = config.logging.directory.clone();

        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.deck, Some(PathBuf::from("/tmp/deck.json")));
        assert_eq!(config.logging.directory, default_dir);
    }
}
