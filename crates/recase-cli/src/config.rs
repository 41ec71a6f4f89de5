//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. File passed via `--config`
//! 3. `.recase.toml` in the current directory
//! 4. The user config dir (`directories::ProjectDirs`) `config.toml`
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default formats for `convert` and `parse` when the flags are omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Source format name (any alias accepted by the core parser).
    pub from: Option<String>,
    /// Destination format name.
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to probe the default locations).  An explicitly-passed file that is
    /// missing or unparseable is an error; a missing default-location file
    /// silently yields the built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::read_file(path);
        }

        for candidate in [Some(PathBuf::from(".recase.toml")), Self::user_config_path()]
            .into_iter()
            .flatten()
        {
            if candidate.exists() {
                return Self::read_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the per-user configuration file, if a home directory exists.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "recase", "recase")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_formats() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.from.is_none());
        assert!(cfg.defaults.to.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: AppConfig = toml::from_str("[defaults]\nfrom = \"underscore\"\n").unwrap();
        assert_eq!(cfg.defaults.from.as_deref(), Some("underscore"));
        assert!(cfg.defaults.to.is_none());
    }

    #[test]
    fn parses_output_section() {
        let cfg: AppConfig = toml::from_str("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/recase.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.defaults.from = Some("underscore".into());
        cfg.defaults.to = Some("upper-camel".into());
        let serialized = toml::to_string(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(back.defaults.to.as_deref(), Some("upper-camel"));
    }
}
