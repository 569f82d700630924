//! Report which catalog theme the located config currently uses.

use crate::error::ConfigError;
use crate::locate;
use crate::platform::Environment;
use crate::themes::ThemeCatalog;

use super::defaults::COLORS_KEY;

/// Name of the first catalog theme whose colors equal the config's.
///
/// `Ok(None)` means the config has no `colors` table or uses colors that no
/// catalog theme defines.
pub fn current_theme(
    env: &dyn Environment,
    catalog: &ThemeCatalog,
) -> Result<Option<String>, ConfigError> {
    let path = locate::config_path(env)?;
    let text = std::fs::read_to_string(&path)?;
    matching_theme(&text, catalog)
}

pub(super) fn matching_theme(
    config_text: &str,
    catalog: &ThemeCatalog,
) -> Result<Option<String>, ConfigError> {
    let document: toml::Table = toml::from_str(config_text)?;
    let Some(colors) = document.get(COLORS_KEY).and_then(toml::Value::as_table) else {
        return Ok(None);
    };
    Ok(catalog
        .themes()
        .into_iter()
        .find(|theme| &theme.colors == colors)
        .map(|theme| theme.name))
}
