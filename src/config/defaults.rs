//! Default Alacritty config template and shared constants.

/// Embedded `alacritty.toml` written by `alacritty-themes --create`.
pub(super) const DEFAULT_ALACRITTY_CONFIG_TEMPLATE: &str =
    include_str!("../templates/alacritty.toml");

/// Top-level config table that themes replace.
pub(super) const COLORS_KEY: &str = "colors";
