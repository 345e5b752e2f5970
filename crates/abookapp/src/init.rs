//! # Bootstrap
//!
//! Resolves where the data lives, loads configuration from there and opens
//! the API over a [`FileStore`].
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit override (the CLI's `--data` flag) wins.
//! 2. Otherwise `ABOOK_DATA`, if set and non-empty.
//! 3. Otherwise the OS data directory for `abook` (via `directories`), e.g.
//!    `~/.local/share/abook` on Linux.
//!
//! The directory does not need to exist: a fresh directory opens as an empty
//! address book and is created on first save.

use crate::api::AbookApi;
use crate::config::AbookConfig;
use crate::error::{AbookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV: &str = "ABOOK_DATA";

pub struct AbookContext {
    pub api: AbookApi<FileStore>,
    pub config: AbookConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("", "", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Config("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<AbookContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = AbookConfig::load(&data_dir)?;
    let api = AbookApi::open(FileStore::new(&data_dir), config.schema()?)?;
    tracing::debug!(data_dir = %data_dir.display(), "context initialized");
    Ok(AbookContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::contacts::NewContact;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_override_wins() {
        let dir = tempdir().unwrap();
        let resolved = resolve_data_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn initialize_then_reopen() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("abook");

        let mut ctx = initialize(Some(data.clone())).unwrap();
        assert!(ctx.api.contacts().is_empty());
        ctx.api
            .create_contact(NewContact {
                name: "Anna".into(),
                phones: vec!["0501234567".into()],
                ..Default::default()
            })
            .unwrap();
        ctx.api.save().unwrap();

        let reopened = initialize(Some(data)).unwrap();
        assert!(reopened.api.contacts().contains("Anna"));
    }

    #[test]
    fn data_dir_config_selects_schema() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("abook.toml"),
            "phone_format = \"ukrainian\"\n",
        )
        .unwrap();

        let ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.config.phone_format, "ukrainian");
        assert!(!ctx.api.schema().phone.is_valid("0501234567"));
    }

    #[test]
    fn bad_config_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("abook.toml"), "page_size = \"lots\"\n").unwrap();
        assert!(matches!(
            initialize(Some(dir.path().to_path_buf())),
            Err(AbookError::Config(_))
        ));
    }
}
