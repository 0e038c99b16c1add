use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color representation for clock elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const YELLOW: Color = Color::new(0xff, 0xff, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from the low 24 bits of `value` (`0xRRGGBB`).
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }

    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { color: self, alpha }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidColor {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| invalid("expected a leading '#'"))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hex digits"));
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid("bad digit"));
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid("bad digit"));

        match hex.len() {
            // #rgb expands every digit, #abc == #aabbcc
            3 => Ok(Color::new(digit(0)? * 0x11, digit(1)? * 0x11, digit(2)? * 0x11)),
            6 => Ok(Color::new(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(invalid("expected 3 or 6 hex digits")),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color with straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Color,
    pub alpha: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Color::BLACK.with_alpha(0.0);
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.color.as_tuple();
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#A4031F".parse::<Color>().unwrap(), Color::new(0xa4, 0x03, 0x1f));
        assert_eq!("#00f289".parse::<Color>().unwrap(), Color::new(0x00, 0xf2, 0x89));
        assert_eq!("#333".parse::<Color>().unwrap(), Color::new(0x33, 0x33, 0x33));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["030303", "#12", "#12345", "#zzzzzz", ""] {
            assert!(bad.parse::<Color>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Color::new(0xbf, 0x0a, 0x30).to_string(), "#bf0a30");
        assert_eq!(Color::from_u32(0x12_34_56), Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn rgba_matches_canvas_fill_style() {
        let rgba = Color::new(3, 3, 3).with_alpha(0.5);
        assert_eq!(rgba.to_string(), "rgba(3, 3, 3, 0.5)");
    }
}
