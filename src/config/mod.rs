//! Operations on the user's Alacritty configuration file.
//!
//! Discovery lives in [`crate::locate`]; this module builds on it to create a
//! default config, apply a theme, and report the active one.

mod current;
mod defaults;
mod init;
mod persist;

pub use current::current_theme;
pub use init::{create_config, CreateConfigResult};
pub use persist::apply_theme;
