use crate::error::{JotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: &[&str] = &["color", "download-dir", "show-timestamps"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves `Auto` using the detected terminal capability.
    pub fn use_color(&self, terminal_supports_color: bool) -> bool {
        match self {
            ColorMode::Auto => terminal_supports_color,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for ColorMode {
    type Err = JotzError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(JotzError::Config(format!(
                "invalid color mode '{}' (expected auto, always or never)",
                other
            ))),
        }
    }
}

/// Configuration for jotz, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct JotzConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Where downloads go when no destination is given
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_show_timestamps() -> bool {
    true
}

impl Default for JotzConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            download_dir: default_download_dir(),
            show_timestamps: default_show_timestamps(),
        }
    }
}

impl JotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "color" => Ok(self.color.to_string()),
            "download-dir" => Ok(self.download_dir.display().to_string()),
            "show-timestamps" => Ok(self.show_timestamps.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => self.color = value.parse()?,
            "download-dir" => {
                if value.trim().is_empty() {
                    return Err(JotzError::Config("download-dir cannot be empty".into()));
                }
                self.download_dir = PathBuf::from(value);
            }
            "show-timestamps" => {
                self.show_timestamps = value.parse().map_err(|_| {
                    JotzError::Config(format!(
                        "invalid show-timestamps '{}' (expected true or false)",
                        value
                    ))
                })?
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

fn unknown_key(key: &str) -> JotzError {
    JotzError::Config(format!(
        "unknown config key '{}' (known keys: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JotzConfig::default();
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.download_dir, PathBuf::from("."));
        assert!(config.show_timestamps);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = JotzConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, JotzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("jotz");

        let mut config = JotzConfig::default();
        config.set("color", "never").unwrap();
        config.set("download-dir", "/tmp/downloads").unwrap();
        config.save(&nested).unwrap();

        let loaded = JotzConfig::load(&nested).unwrap();
        assert_eq!(loaded.color, ColorMode::Never);
        assert_eq!(loaded.download_dir, PathBuf::from("/tmp/downloads"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"color":"always"}"#).unwrap();

        let config = JotzConfig::load(dir.path()).unwrap();
        assert_eq!(config.color, ColorMode::Always);
        assert!(config.show_timestamps);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = JotzConfig::default();
        assert!(config.set("color", "sometimes").is_err());
        assert!(config.set("show-timestamps", "yes").is_err());
        assert!(config.set("download-dir", "  ").is_err());
        assert!(config.set("nope", "1").is_err());
        assert_eq!(config, JotzConfig::default());
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Auto.use_color(true));
        assert!(!ColorMode::Auto.use_color(false));
        assert!(ColorMode::Always.use_color(false));
        assert!(!ColorMode::Never.use_color(true));
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<_> = JotzConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS);
    }
}
