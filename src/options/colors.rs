use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScrollscapeError;

/// An sRGB color with 8-bit channels, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Color from channel bytes.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as sRGB-encoded floats in [0, 1] (no linearization).
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl FromStr for Color {
    type Err = ScrollscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScrollscapeError::InvalidColor(s.to_owned());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ScrollscapeError;

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

/// Base color shared by the objects and the particle field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colors", inline)]
#[serde(default)]
pub struct ColorOptions {
    /// Material color as `#rrggbb`.
    #[schemars(title = "Material Color", with = "String", extend("format" = "color"))]
    pub material_color: Color,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            material_color: Color::rgb(0xff, 0xee, 0x8c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        let c: Color = "#ffee8c".parse().unwrap();
        assert_eq!(c, Color::rgb(255, 238, 140));
        assert_eq!(c.to_string(), "#ffee8c");
    }

    #[test]
    fn rejects_malformed() {
        assert!("ffee8c".parse::<Color>().is_err());
        assert!("#ffee8".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#ffé8c".parse::<Color>().is_err());
    }

    #[test]
    fn channels_normalize() {
        assert_eq!(Color::rgb(255, 0, 51).to_array(), [1.0, 0.0, 0.2]);
    }
}
