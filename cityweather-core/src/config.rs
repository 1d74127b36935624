use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Current-weather endpoint used when the config file does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Environment overrides, read once at load time. They win over the file so
/// deployments and tests can point the widget elsewhere without touching disk.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5/weather"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { api_key: String::new(), base_url: default_base_url() }
    }
}

impl Config {
    /// Load config from disk (or an empty default if the file doesn't exist
    /// yet), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let cfg = Self::load_file()?;
        Ok(cfg.with_env_overrides(env::var(API_KEY_ENV).ok(), env::var(BASE_URL_ENV).ok()))
    }

    /// Overrides win over file values; either may be absent.
    fn with_env_overrides(mut self, api_key: Option<String>, base_url: Option<String>) -> Self {
        if let Some(key) = api_key {
            self.api_key = key;
        }
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Load config from disk only, ignoring environment overrides. This is
    /// what `configure` edits, so an override never gets baked into the file.
    pub fn load_file() -> Result<Self> {
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
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set/replace the stored API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_when_absent_from_file() {
        let cfg: Config = toml::from_str(r#"api_key = "KEY""#).expect("minimal config parses");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_override_survives_a_roundtrip() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.base_url = "http://localhost:9000".into();

        let serialized = toml::to_string_pretty(&cfg).expect("config serializes");
        let parsed: Config = toml::from_str(&serialized).expect("config parses back");

        assert_eq!(parsed.api_key, "KEY");
        assert_eq!(parsed.base_url, "http://localhost:9000");
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut cfg = Config::default();
        cfg.set_api_key("file-key".into());
        cfg.base_url = "http://file.example".into();

        let cfg = cfg
            .with_env_overrides(Some("env-key".into()), Some("http://localhost:1234".into()));

        assert_eq!(cfg.api_key, "env-key");
        assert_eq!(cfg.base_url, "http://localhost:1234");
    }

    #[test]
    fn each_override_applies_independently() {
        let mut cfg = Config::default();
        cfg.set_api_key("file-key".into());

        let cfg = cfg.with_env_overrides(Some("env-key".into()), None);

        assert_eq!(cfg.api_key, "env-key");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn absent_overrides_leave_file_values_alone() {
        let mut cfg = Config::default();
        cfg.set_api_key("file-key".into());
        cfg.base_url = "http://file.example".into();

        let cfg = cfg.with_env_overrides(None, None);

        assert_eq!(cfg.api_key, "file-key");
        assert_eq!(cfg.base_url, "http://file.example");
    }

    #[test]
    fn empty_and_whitespace_keys_do_not_count_as_configured() {
        let mut cfg = Config::default();
        assert!(!cfg.has_api_key());

        cfg.set_api_key("   ".into());
        assert!(!cfg.has_api_key());

        cfg.set_api_key("KEY".into());
        assert!(cfg.has_api_key());
    }
}
