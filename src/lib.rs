//! alacritty-themes — theme management for the Alacritty terminal emulator.
//!
//! The core locates Alacritty's config file across Windows, WSL, and
//! Linux/Unix hosts and backs it up before any mutation. On top of that the
//! crate lists, applies, and reports themes and can create a default config.
//!
//! # Quick start
//!
//! ```no_run
//! use alacritty_themes::backup::BackupManager;
//! use alacritty_themes::config::apply_theme;
//! use alacritty_themes::platform::SystemEnvironment;
//! use alacritty_themes::themes::ThemeCatalog;
//!
//! # async fn example() {
//! let env = SystemEnvironment;
//! let backups = BackupManager::new(tokio::runtime::Handle::current());
//! let theme = ThemeCatalog::bundled().get("Dracula").unwrap();
//! apply_theme(&env, &backups, &theme).unwrap();
//! backups.settle().await.unwrap();
//! # }
//! ```

pub mod backup;
pub mod config;
pub mod error;
pub mod locate;
pub mod logging;
pub mod platform;
pub mod render;
pub mod settings;
#[cfg(test)]
pub mod testsupport;
pub mod themes;
