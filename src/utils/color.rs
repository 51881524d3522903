use std::str::FromStr;

use ratatui::style::Color;

/// Named palette accepted for the memo marker in the config file
const PALETTE: &[(&str, Color)] = &[
    ("red", Color::Rgb(220, 76, 62)),
    ("orange", Color::Rgb(199, 113, 0)),
    ("yellow", Color::Rgb(178, 145, 4)),
    ("green", Color::Rgb(54, 147, 7)),
    ("mint", Color::Rgb(66, 163, 147)),
    ("teal", Color::Rgb(20, 143, 173)),
    ("blue", Color::Rgb(65, 128, 255)),
    ("violet", Color::Rgb(202, 63, 238)),
    ("magenta", Color::Rgb(224, 80, 149)),
    ("gray", Color::Rgb(153, 153, 153)),
    ("grey", Color::Rgb(153, 153, 153)),
];

/// Resolve a color name from the config, falling back to ratatui's own
/// parser (`"#rrggbb"`, `"lightblue"`, indexed colors, ...).
#[must_use]
pub fn parse_color(name: &str) -> Option<Color> {
    let lower = name.trim().to_lowercase();
    PALETTE
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, c)| *c)
        .or_else(|| Color::from_str(&lower).ok())
}

/// Color used to mark days that carry a memo
#[must_use]
pub fn memo_marker_color(name: &str) -> Color {
    parse_color(name).unwrap_or(Color::Rgb(178, 145, 4)) // Default to yellow
}
