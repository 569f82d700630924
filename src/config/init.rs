//! Default Alacritty config creation.
//!
//! Creation never clobbers: if any candidate config already exists it is
//! reported instead, and the write itself uses create-new semantics.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::locate;
use crate::platform::Environment;

use super::defaults::DEFAULT_ALACRITTY_CONFIG_TEMPLATE;

/// Outcome of `create_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateConfigResult {
    Created { path: PathBuf },
    AlreadyExists { path: PathBuf },
}

/// Write the default template to the platform default location.
pub fn create_config(env: &dyn Environment) -> Result<CreateConfigResult, ConfigError> {
    if let Ok(path) = locate::config_path(env) {
        return Ok(CreateConfigResult::AlreadyExists { path });
    }
    let path = locate::default_config_path(env).ok_or_else(|| {
        ConfigError::Invalid(
            "unable to resolve a default config location; set HOME (or APPDATA on Windows)"
                .to_string(),
        )
    })?;
    create_config_at_path(&path)
}

pub(super) fn create_config_at_path(path: &Path) -> Result<CreateConfigResult, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_ALACRITTY_CONFIG_TEMPLATE.as_bytes())?;
            tracing::info!(path = %path.display(), "created alacritty config");
            Ok(CreateConfigResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(CreateConfigResult::AlreadyExists {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}
