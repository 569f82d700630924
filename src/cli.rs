//! CLI argument parsing via clap.

use clap::Parser;

/// Theme candy for Alacritty, the cross-platform GPU-accelerated terminal
/// emulator.
#[derive(Debug, Parser)]
#[command(name = "alacritty-themes", version)]
pub struct Args {
    /// Theme to apply, by name or by its number in `--list`.
    pub theme: Option<String>,

    /// Create a new Alacritty config file from the default template.
    #[arg(short = 'C', long = "create", conflicts_with_all = ["current", "list"])]
    pub create: bool,

    /// Show the name of the applied theme.
    #[arg(short = 'c', long = "current", conflicts_with = "list")]
    pub current: bool,

    /// List all available themes.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Themes directory to use instead of the bundled themes.
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// What one invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create,
    Current,
    List,
    Apply(String),
}

impl Args {
    /// Flags win over a positional theme; no input at all lists themes.
    pub fn action(&self) -> Action {
        if self.create {
            Action::Create
        } else if self.current {
            Action::Current
        } else if self.list {
            Action::List
        } else {
            match &self.theme {
                Some(theme) => Action::Apply(theme.clone()),
                None => Action::List,
            }
        }
    }
}
