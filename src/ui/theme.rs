use crossterm::style::{Color, Stylize};

/// Design tokens for rld output.
pub mod colors {
    use super::Color;

    /// Normal `[rld]` tag
    pub const TAG: Color = Color::Cyan;
    /// Restarts and launches
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    /// Debug-level events
    pub const DIM: Color = Color::DarkGrey;
}

/// Prefix on every human-readable line
pub const TAG: &str = "[rld]";

/// Colour `text` when `supports_color` is set.
pub fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(color))
}
