//! Themes compiled into the binary.

pub(super) const BUNDLED_THEMES: &[(&str, &str)] = &[
    ("Dracula", include_str!("../templates/themes/Dracula.toml")),
    ("Gruvbox-Dark", include_str!("../templates/themes/Gruvbox-Dark.toml")),
    ("Nord", include_str!("../templates/themes/Nord.toml")),
    ("One-Dark", include_str!("../templates/themes/One-Dark.toml")),
    ("Solarized-Dark", include_str!("../templates/themes/Solarized-Dark.toml")),
    ("Tokyo-Night", include_str!("../templates/themes/Tokyo-Night.toml")),
];
