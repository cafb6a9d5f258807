//! RGBA color values used to fill status icons.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An 8-bit-per-channel RGBA color.
///
/// Serializes as a `#rrggbbaa` hex string. Deserializes from any hex form
/// accepted by [`FromStr`] (`#rgb`, `#rrggbb`, `#rrggbbaa`, CSS color names)
/// or from a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Gray used for the idle/inactive state.
    pub const INACTIVE: Self = Self::rgba(128, 128, 128, 255);
    /// Green used for the active/connected states.
    pub const ACTIVE: Self = Self::rgba(0, 180, 0, 255);
    /// Red used for the error state.
    pub const ERROR: Self = Self::rgba(255, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// Returns the pixel value for an `image::RgbaImage`.
    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason: String| Error::InvalidColor {
            input: s.to_string(),
            reason,
        };

        if let Some(named) = palette::named::from_str(&input.to_ascii_lowercase()) {
            return Ok(named.into());
        }

        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.is_ascii() {
            return Err(invalid("not a hex color".into()));
        }
        match hex.len() {
            3 | 6 => {
                let rgb = Srgb::<u8>::from_str(hex).map_err(|e| invalid(e.to_string()))?;
                Ok(rgb.into())
            }
            8 => {
                let rgb = Srgb::<u8>::from_str(&hex[..6]).map_err(|e| invalid(e.to_string()))?;
                let alpha =
                    u8::from_str_radix(&hex[6..], 16).map_err(|e| invalid(e.to_string()))?;
                Ok(Self::rgba(rgb.red, rgb.green, rgb.blue, alpha))
            }
            _ => Err(invalid("expected #rgb, #rrggbb, #rrggbbaa or a color name".into())),
        }
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels([u8; 4]),
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(s) => s.parse(),
            ColorRepr::Channels([r, g, b, a]) => Ok(Self::rgba(r, g, b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#808080".parse::<Color>().unwrap(), Color::INACTIVE);
        assert_eq!("00b400".parse::<Color>().unwrap(), Color::ACTIVE);
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::ERROR);
        assert_eq!(
            "#ff000080".parse::<Color>().unwrap(),
            Color::rgba(255, 0, 0, 128)
        );
    }

    #[test]
    fn parses_color_names() {
        assert_eq!("gray".parse::<Color>().unwrap(), Color::INACTIVE);
        assert_eq!("Red".parse::<Color>().unwrap(), Color::ERROR);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(Error::InvalidColor { .. })
        ));
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn display_is_rrggbbaa() {
        assert_eq!(Color::ACTIVE.to_string(), "#00b400ff");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn serde_accepts_string_and_array() {
        let c: Color = serde_json::from_str("\"#ff0000ff\"").unwrap();
        assert_eq!(c, Color::ERROR);

        let c: Color = serde_json::from_str("[0, 180, 0, 255]").unwrap();
        assert_eq!(c, Color::ACTIVE);

        assert_eq!(serde_json::to_string(&Color::INACTIVE).unwrap(), "\"#808080ff\"");
    }
}
