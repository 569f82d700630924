//! Terminal output for status lines and theme listings.
//!
//! Status/diagnostic lines go to stderr; the theme list and current-theme
//! answer go to stdout so they can be piped.

use crossterm::style::{Color, Stylize};

use crate::themes::Theme;

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_SECTION_BULLET: &str = "•";
const INDENT_1: &str = "  ";
const SWATCH_SAMPLE: &str = " Aa ";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a small section header in status-style output.
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print one key/value field row.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White),
            );
        } else {
            eprintln!("{INDENT_1}{key}: {value}");
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    /// Print the numbered theme list, marking `active` and showing swatches.
    pub fn theme_list(&self, themes: &[Theme], active: Option<&str>) {
        for (idx, theme) in themes.iter().enumerate() {
            let is_active = active.is_some_and(|name| name.eq_ignore_ascii_case(&theme.name));
            println!("{}", self.theme_row(idx + 1, theme, is_active));
        }
    }

    fn theme_row(&self, position: usize, theme: &Theme, active: bool) -> String {
        let marker = if active { "*" } else { " " };
        let label = format!("{position}.{marker} {}", theme.name);
        if !self.color {
            return label;
        }
        match swatch_colors(theme) {
            Some((bg, fg)) => format!("{} {label}", SWATCH_SAMPLE.with(fg).on(bg)),
            None => format!("{} {label}", " ".repeat(SWATCH_SAMPLE.len())),
        }
    }
}

fn swatch_colors(theme: &Theme) -> Option<(Color, Color)> {
    let (background, foreground) = theme.primary_colors()?;
    Some((parse_hex_color(background)?, parse_hex_color(foreground)?))
}

/// Parse Alacritty's `#RRGGBB` / `0xRRGGBB` color notation.
fn parse_hex_color(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name: &str) -> Theme {
        Theme::parse(
            name,
            "[colors.primary]\nbackground = \"#010203\"\nforeground = \"0xffffff\"\n",
        )
        .expect("theme")
    }

    #[test]
    fn parse_hex_color_supports_both_prefixes() {
        assert_eq!(
            parse_hex_color("#010203"),
            Some(Color::Rgb { r: 1, g: 2, b: 3 })
        );
        assert_eq!(
            parse_hex_color("0xFFfF00"),
            Some(Color::Rgb {
                r: 255,
                g: 255,
                b: 0
            })
        );
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn plain_rows_are_numbered_with_active_marker() {
        let renderer = Renderer::new(false);
        assert_eq!(renderer.theme_row(1, &theme("Nord"), true), "1.* Nord");
        assert_eq!(renderer.theme_row(2, &theme("Dracula"), false), "2.  Dracula");
    }

    #[test]
    fn swatch_uses_primary_colors() {
        assert_eq!(
            swatch_colors(&theme("Nord")),
            Some((
                Color::Rgb { r: 1, g: 2, b: 3 },
                Color::Rgb {
                    r: 255,
                    g: 255,
                    b: 255
                }
            ))
        );
    }
}
