use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour {input:?}: {reason}")]
pub struct InvalidColor {
    pub input: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Swatch – one configured colour
// ---------------------------------------------------------------------------

/// An sRGB colour written as `#rrggbb` (or `#rgb`) in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const WHITE: Swatch = Swatch::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Swatch = Swatch::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Swatch { r, g, b }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    /// Lower-case `#rrggbb`, as written into SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Swatch {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s.trim().parse().map_err(|e| InvalidColor {
            input: s.to_string(),
            reason: format!("{e}"),
        })?;
        Ok(Swatch::rgb(rgb.red, rgb.green, rgb.blue))
    }
}

impl TryFrom<String> for Swatch {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Swatch> for String {
    fn from(swatch: Swatch) -> Self {
        swatch.to_hex()
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c: Swatch = "#4B4897".parse().unwrap();
        assert_eq!(c, Swatch::rgb(0x4B, 0x48, 0x97));
        assert_eq!(c.to_hex(), "#4b4897");
        assert_eq!(c.to_color32(), Color32::from_rgb(0x4B, 0x48, 0x97));
    }

    #[test]
    fn test_parse_short_hex() {
        let c: Swatch = "#fff".parse().unwrap();
        assert_eq!(c, Swatch::WHITE);
    }

    #[test]
    fn test_reject_garbage() {
        let err = "purple-ish".parse::<Swatch>().unwrap_err();
        assert_eq!(err.input, "purple-ish");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Swatch::rgb(0xE0, 0xE0, 0xE0)).unwrap();
        assert_eq!(json, "\"#e0e0e0\"");
        let back: Swatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Swatch::rgb(0xE0, 0xE0, 0xE0));
        assert!(serde_json::from_str::<Swatch>("\"nope\"").is_err());
    }
}
