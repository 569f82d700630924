//! Runtime settings resolved from CLI flags with environment fallbacks.
//!
//! Precedence (highest wins):
//! 1. CLI flags (`--directory`, `--no-color`)
//! 2. Environment (`ALACRITTY_THEMES_DIR`, `NO_COLOR`, `ALACRITTY_THEMES_LOG`)
//! 3. Built-in defaults (bundled themes, color on, `warn` logging)

use std::path::PathBuf;

use crate::platform::Environment;

pub const THEMES_DIR_VAR: &str = "ALACRITTY_THEMES_DIR";
pub const LOG_FILTER_VAR: &str = "ALACRITTY_THEMES_LOG";
pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Themes directory; `None` selects the bundled themes.
    pub themes_dir: Option<PathBuf>,
    /// Colored terminal output.
    pub color: bool,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Settings {
    pub fn resolve(directory: Option<&str>, no_color: bool, env: &dyn Environment) -> Self {
        let themes_dir = directory
            .map(str::to_string)
            .or_else(|| env.var(THEMES_DIR_VAR))
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        // NO_COLOR disables color whenever present, per no-color.org.
        let color = !no_color && env.var(NO_COLOR_VAR).is_none();
        let log_filter = env
            .var(LOG_FILTER_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            themes_dir,
            color,
            log_filter,
        }
    }
}
