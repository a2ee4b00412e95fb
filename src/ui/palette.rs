//! Colour mapping from catalog styling hints to terminal colours

use crate::contact::StatusTone;
use ratatui::style::Color;

/// Terminal colour for a project tag's CSS colour class
pub fn tag_color(color_class: &str) -> Color {
    match color_class.split('-').next() {
        Some("blue") => Color::LightBlue,
        Some("green") => Color::LightGreen,
        Some("pink") => Color::LightMagenta,
        Some("orange") => Color::LightRed,
        Some("yellow") => Color::LightYellow,
        _ => Color::Gray,
    }
}

/// Parse `#rgb` or `#rrggbb`
pub fn hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color::Rgb(it.next()??, it.next()??, it.next()??))
        }
        6 => Some(Color::Rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

/// Colour of the contact status line
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Success => Color::Green,
        StatusTone::Error => Color::Red,
    }
}
