//! # Configuration
//!
//! abook configuration is a [`confique`] struct, loaded in layers.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ABOOK_PHONE_FORMAT`, `ABOOK_PAGE_SIZE`, etc.
//! 2. **Data dir config**: `<data dir>/abook.toml`, next to the snapshots.
//! 3. **User config**: `abook.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped. A file that exists but does not parse is an
//! error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `phone_format` | `international` | `international` or `ukrainian` (`+380XXXXXXXXX` only) |
//! | `birthday_format` | `iso` | `iso` (`YYYY-MM-DD`) or `dmy` (`DD-MM-YYYY`) |
//! | `page_size` | `10` | Records per page for `show` |
//! | `birthday_days` | `7` | Default window for `birthdays` |

use crate::error::{AbookError, Result};
use crate::field::{DateFormat, PhoneFormat, Schema};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "abook.toml";

/// Configuration for abook, stored in `abook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AbookConfig {
    /// Accepted phone format: "international" or "ukrainian".
    #[config(default = "international", env = "ABOOK_PHONE_FORMAT")]
    pub phone_format: String,

    /// Accepted birthday format: "iso" (YYYY-MM-DD) or "dmy" (DD-MM-YYYY).
    #[config(default = "iso", env = "ABOOK_BIRTHDAY_FORMAT")]
    pub birthday_format: String,

    /// Records per page when listing contacts. 0 shows everything at once.
    #[config(default = 10, env = "ABOOK_PAGE_SIZE")]
    pub page_size: usize,

    /// Default number of days for the upcoming birthdays view.
    #[config(default = 7, env = "ABOOK_BIRTHDAY_DAYS")]
    pub birthday_days: i64,
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            phone_format: PhoneFormat::default().to_string(),
            birthday_format: DateFormat::default().to_string(),
            page_size: 10,
            birthday_days: 7,
        }
    }
}

impl AbookConfig {
    /// Loads the layered configuration for a data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder().env().file(data_dir.join(CONFIG_FILE));
        if let Some(path) = user_config_path() {
            builder = builder.file(path);
        }
        let config = builder
            .load()
            .map_err(|e| AbookError::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.phone_format.parse::<PhoneFormat>()?;
        self.birthday_format.parse::<DateFormat>()?;
        if self.birthday_days < 0 {
            return Err(AbookError::Config(format!(
                "birthday_days must not be negative, got {}",
                self.birthday_days
            )));
        }
        Ok(())
    }

    /// The field rules selected by this configuration.
    pub fn schema(&self) -> Result<Schema> {
        Ok(Schema::new(
            self.phone_format.parse()?,
            self.birthday_format.parse()?,
        ))
    }

    /// Effective values as `(key, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("phone_format", self.phone_format.clone()),
            ("birthday_format", self.birthday_format.clone()),
            ("page_size", self.page_size.to_string()),
            ("birthday_days", self.birthday_days.to_string()),
        ]
    }
}

/// A commented sample `abook.toml` with every key at its default.
pub fn template() -> String {
    confique::toml::template::<AbookConfig>(confique::toml::FormatOptions::default())
}

pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "abook").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl FromStr for PhoneFormat {
    type Err = AbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "international" => Ok(PhoneFormat::International),
            "ukrainian" | "ua" => Ok(PhoneFormat::Ukrainian),
            other => Err(AbookError::Config(format!(
                "unknown phone_format '{}', expected international or ukrainian",
                other
            ))),
        }
    }
}

impl FromStr for DateFormat {
    type Err = AbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateFormat::Iso),
            "dmy" => Ok(DateFormat::Dmy),
            other => Err(AbookError::Config(format!(
                "unknown birthday_format '{}', expected iso or dmy",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config() {
        let config = AbookConfig::default();
        assert_eq!(config.phone_format, "international");
        assert_eq!(config.birthday_format, "iso");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.birthday_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn schema_follows_formats() {
        let config = AbookConfig {
            phone_format: "ukrainian".into(),
            birthday_format: "dmy".into(),
            ..Default::default()
        };
        let schema = config.schema().unwrap();
        assert!(schema.phone.is_valid("+380501234567"));
        assert!(!schema.phone.is_valid("(050)123-45-67"));
        assert!(schema.birthday.is_valid("15-03-1990"));
        assert!(!schema.birthday.is_valid("1990-03-15"));
    }

    #[test]
    fn unknown_format_is_config_error() {
        let config = AbookConfig {
            phone_format: "martian".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AbookError::Config(_))));
        assert!(matches!(config.schema(), Err(AbookError::Config(_))));
    }

    #[test]
    fn negative_window_rejected() {
        let config = AbookConfig {
            birthday_days: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn data_dir_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let on_disk = AbookConfig {
            page_size: 3,
            birthday_format: "dmy".into(),
            ..Default::default()
        };
        fs::write(
            dir.path().join(CONFIG_FILE),
            toml::to_string(&on_disk).unwrap(),
        )
        .unwrap();

        let loaded = AbookConfig::builder()
            .file(dir.path().join(CONFIG_FILE))
            .load()
            .unwrap();
        assert_eq!(loaded, on_disk);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "page_size = 25\n").unwrap();

        let loaded = AbookConfig::builder()
            .file(dir.path().join(CONFIG_FILE))
            .load()
            .unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.phone_format, "international");
    }

    #[test]
    fn template_lists_every_key() {
        let text = template();
        for (key, _) in AbookConfig::default().entries() {
            assert!(text.contains(key), "missing {key}");
        }
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("UA".parse::<PhoneFormat>().unwrap(), PhoneFormat::Ukrainian);
        assert_eq!(" iso ".parse::<DateFormat>().unwrap(), DateFormat::Iso);
    }
}
