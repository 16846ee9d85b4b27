//! Hex color parsing shared by the TUI widgets.

use ratatui::style::Color;

/// Parse "#rrggbb" (leading '#' optional) into a ratatui Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse a configured color, falling back to `default` when invalid
pub fn color_or(hex: &str, default: Color) -> Color {
    parse_hex_color(hex).unwrap_or(default)
}
