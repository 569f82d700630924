//! Theme catalog: bundled themes or a user-supplied themes directory.
//!
//! A theme is a TOML file named `<Name>.toml` whose `[colors]` table is
//! copied into the Alacritty config when applied. Names are matched
//! case-insensitively and listed in case-insensitive order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ThemeError;

mod bundled;

/// File extension shared by theme files and Alacritty configs.
pub const THEME_EXTENSION: &str = "toml";

/// A parsed theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub colors: toml::Table,
}

impl Theme {
    /// Parse theme text; the `[colors]` table is required.
    pub fn parse(name: &str, text: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(text).map_err(|err| ThemeError::Toml {
            name: name.to_string(),
            err,
        })?;
        let colors = file
            .colors
            .ok_or_else(|| ThemeError::MissingColors(name.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            colors,
        })
    }

    /// `(background, foreground)` from `[colors.primary]`, when both are set.
    pub fn primary_colors(&self) -> Option<(&str, &str)> {
        let primary = self.colors.get("primary")?.as_table()?;
        let background = primary.get("background")?.as_str()?;
        let foreground = primary.get("foreground")?.as_str()?;
        Some((background, foreground))
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    colors: Option<toml::Table>,
}

/// Where a catalog entry's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ThemeOrigin {
    Bundled(&'static str),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ThemeEntry {
    name: String,
    origin: ThemeOrigin,
}

/// Available themes keyed by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    entries: BTreeMap<String, ThemeEntry>,
    directory: Option<PathBuf>,
}

impl ThemeCatalog {
    /// Themes compiled into the binary.
    pub fn bundled() -> Self {
        let mut catalog = Self::default();
        for &(name, text) in bundled::BUNDLED_THEMES {
            catalog.insert(name, ThemeOrigin::Bundled(text));
        }
        catalog
    }

    /// Every `*.toml` file directly under `dir`. Subdirectories are ignored.
    pub fn from_directory(dir: &Path) -> Result<Self, ThemeError> {
        let mut catalog = Self {
            directory: Some(dir.to_path_buf()),
            ..Self::default()
        };
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(THEME_EXTENSION)
            {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping theme with non UTF-8 name");
                continue;
            };
            let name = name.to_string();
            catalog.insert(&name, ThemeOrigin::File(path));
        }
        tracing::debug!(dir = %dir.display(), count = catalog.len(), "loaded themes directory");
        Ok(catalog)
    }

    /// Directory-backed catalog when `dir` is given, bundled otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self, ThemeError> {
        match dir {
            Some(dir) => Self::from_directory(dir),
            None => Ok(Self::bundled()),
        }
    }

    fn insert(&mut self, name: &str, origin: ThemeOrigin) {
        self.entries.insert(
            normalize_theme_name(name),
            ThemeEntry {
                name: name.to_string(),
                origin,
            },
        );
    }

    /// Themes directory backing this catalog, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names in case-insensitive order.
    pub fn names(&self) -> Vec<String> {
        self.entries.values().map(|entry| entry.name.clone()).collect()
    }

    /// Load one theme by case-insensitive name.
    pub fn get(&self, name: &str) -> Result<Theme, ThemeError> {
        let entry = self
            .entries
            .get(&normalize_theme_name(name))
            .ok_or_else(|| ThemeError::UnknownTheme {
                name: name.to_string(),
                available: self.names(),
            })?;
        load_entry(entry)
    }

    /// Resolve a selector that is either a 1-based position in
    /// [`ThemeCatalog::themes`] (as printed by `--list`) or a name.
    pub fn select(&self, selector: &str) -> Result<Theme, ThemeError> {
        let trimmed = selector.trim();
        if let Some(position) = trimmed.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
            if let Some(theme) = self.themes().into_iter().nth(position) {
                return Ok(theme);
            }
        }
        self.get(trimmed)
    }

    /// Parse every theme, skipping files that fail with a warning.
    pub fn themes(&self) -> Vec<Theme> {
        self.entries
            .values()
            .filter_map(|entry| match load_entry(entry) {
                Ok(theme) => Some(theme),
                Err(err) => {
                    tracing::warn!(theme = %entry.name, error = %err, "skipping unreadable theme");
                    None
                }
            })
            .collect()
    }
}

fn load_entry(entry: &ThemeEntry) -> Result<Theme, ThemeError> {
    match &entry.origin {
        ThemeOrigin::Bundled(text) => Theme::parse(&entry.name, text),
        ThemeOrigin::File(path) => {
            let text = std::fs::read_to_string(path)?;
            Theme::parse(&entry.name, &text)
        }
    }
}

fn normalize_theme_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// `<dir>/<name>.toml`.
pub fn theme_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{THEME_EXTENSION}"))
}

/// True when `<dir>/<name>.toml` exists.
pub fn existing_theme(dir: &Path, name: &str) -> bool {
    theme_file_path(dir, name).exists()
}
