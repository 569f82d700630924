//! Theme application: rewrite the `[colors]` table of the located config.
//!
//! Only `colors` is replaced; every other table and key survives the round
//! trip through the TOML document model.

use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::error::ConfigError;
use crate::locate;
use crate::platform::Environment;
use crate::themes::Theme;

use super::defaults::COLORS_KEY;

/// Back up the located config, then write `theme`'s colors into it.
///
/// Returns the path that was rewritten. The backup copy runs in the
/// background; its outcome is settled by the caller's exit path.
pub fn apply_theme(
    env: &dyn Environment,
    backups: &BackupManager,
    theme: &Theme,
) -> Result<PathBuf, ConfigError> {
    let path = locate::config_path(env)?;
    backups.create_backup(env);

    let existing = std::fs::read_to_string(&path)?;
    let updated = replace_colors(&existing, &theme.colors)?;
    std::fs::write(&path, updated)?;
    tracing::info!(theme = %theme.name, path = %path.display(), "applied theme");
    Ok(path)
}

/// Replace (or insert) the top-level `colors` table.
pub(super) fn replace_colors(input: &str, colors: &toml::Table) -> Result<String, ConfigError> {
    let mut document: toml::Table = toml::from_str(input)?;
    document.insert(COLORS_KEY.to_string(), toml::Value::Table(colors.clone()));
    Ok(toml::to_string(&document)?)
}
