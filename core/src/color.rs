use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// RGB color attached to a locked row, written as `#rrggbb`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "ColorString")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Category colors handed out in order when the player does not pick one.
pub const PALETTE: [Color; 4] = [
    Color::rgb(0xf9, 0xdf, 0x6d),
    Color::rgb(0xa0, 0xc3, 0x5a),
    Color::rgb(0xb0, 0xc4, 0xef),
    Color::rgb(0xba, 0x81, 0xc5),
];

impl Default for Color {
    fn default() -> Self {
        PALETTE[0]
    }
}

impl FromStr for Color {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(PuzzleError::InvalidColor)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PuzzleError::InvalidColor);
        }

        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| PuzzleError::InvalidColor)
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct ColorString(String);

impl From<Color> for ColorString {
    fn from(color: Color) -> Self {
        Self(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_hex_form() {
        let color: Color = "#FF0000".parse().unwrap();

        assert_eq!(color, Color::rgb(255, 0, 0));
        assert_eq!(color.to_string(), "#ff0000");
    }

    #[test]
    fn rejects_malformed_colors() {
        for input in ["ff0000", "#ff00", "#gg0000", "#ff00000", "#ff00é"] {
            assert_eq!(input.parse::<Color>(), Err(PuzzleError::InvalidColor), "{input}");
        }
    }
}
