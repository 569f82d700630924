//! Unified error types for config discovery, backups, and themes.

use std::fmt;
use std::path::PathBuf;

/// Suggested remediation shown when no Alacritty config can be located.
pub const CREATE_CONFIG_HINT: &str = "Or you can create a new one using `alacritty-themes --create`";

// ---------------------------------------------------------------------------
// LocateError
// ---------------------------------------------------------------------------

/// Errors when locating the Alacritty configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// None of the candidate locations exist. Carries every path checked.
    NotFound { checked: Vec<PathBuf> },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { checked } => {
                writeln!(f, "No Alacritty configuration file found.")?;
                writeln!(f, "Expected one of the following files to exist:")?;
                for path in checked {
                    writeln!(f, "{}", path.display())?;
                }
                write!(f, "{CREATE_CONFIG_HINT}")
            }
        }
    }
}

impl std::error::Error for LocateError {}

// ---------------------------------------------------------------------------
// BackupError
// ---------------------------------------------------------------------------

/// Errors from automatic config backups.
#[derive(Debug)]
pub enum BackupError {
    /// Reading or writing the backup failed.
    Copy {
        source: PathBuf,
        target: PathBuf,
        err: std::io::Error,
    },
    /// The detached backup task panicked or was cancelled.
    Task(String),
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy { source, target, err } => write!(
                f,
                "failed to back up `{}` to `{}`: {err}",
                source.display(),
                target.display()
            ),
            Self::Task(msg) => write!(f, "backup task failed: {msg}"),
        }
    }
}

impl std::error::Error for BackupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Copy { err, .. } => Some(err),
            Self::Task(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when reading, parsing, or writing the Alacritty config.
#[derive(Debug)]
pub enum ConfigError {
    Locate(LocateError),
    Io(std::io::Error),
    Toml(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locate(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Serialize(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<LocateError> for ConfigError {
    fn from(e: LocateError) -> Self {
        Self::Locate(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors from the theme catalog.
#[derive(Debug)]
pub enum ThemeError {
    /// No theme matched the requested name.
    UnknownTheme { name: String, available: Vec<String> },
    /// The theme file exists but has no `[colors]` table.
    MissingColors(String),
    Io(std::io::Error),
    Toml { name: String, err: toml::de::Error },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme { name, available } => write!(
                f,
                "unknown theme `{name}`. Available themes: {}",
                available.join(", ")
            ),
            Self::MissingColors(name) => {
                write!(f, "theme `{name}` does not define a [colors] table")
            }
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml { name, err } => write!(f, "theme `{name}`: {err}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
