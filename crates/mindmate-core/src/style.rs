//! Stroke style for the doodle surface.

use crate::palette::{DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Palette};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Invalid color token: {0}")]
    InvalidColor(String),
    #[error("Brush width out of range (1..=10): {0}")]
    WidthOutOfRange(u8),
    #[error("Unknown palette color: {0}")]
    UnknownPaletteColor(String),
}

/// Serializable color representation (RGBA8, straight alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a hex color token: `#RRGGBB`, `#RRGGBBAA`, or the same without `#`.
    pub fn from_hex(token: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor(token.to_string());
        let hex = token.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as an uppercase `#RRGGBB` token (alpha appended when not opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Color and width applied to a stroke at the time it is drawn.
///
/// A constructed style is always valid: the width is within
/// [`MIN_BRUSH_SIZE`]..=[`MAX_BRUSH_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStrokeStyle")]
pub struct StrokeStyle {
    color: Rgba,
    width: u8,
}

/// Unchecked wire form of [`StrokeStyle`].
#[derive(Deserialize)]
struct RawStrokeStyle {
    color: Rgba,
    width: u8,
}

impl TryFrom<RawStrokeStyle> for StrokeStyle {
    type Error = StyleError;

    fn try_from(raw: RawStrokeStyle) -> Result<Self, Self::Error> {
        Self::new(raw.color, raw.width)
    }
}

impl StrokeStyle {
    /// Create a style, rejecting widths outside the brush range.
    pub fn new(color: Rgba, width: u8) -> Result<Self, StyleError> {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&width) {
            return Err(StyleError::WidthOutOfRange(width));
        }
        Ok(Self { color, width })
    }

    /// Create a style from a hex token or a palette name.
    pub fn parse(token: &str, width: u8) -> Result<Self, StyleError> {
        let color = match Palette::by_name(token) {
            Some(entry) => entry.color,
            None => Rgba::from_hex(token)?,
        };
        Self::new(color, width)
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Stroke width in device pixels.
    pub fn stroke_width(&self) -> f64 {
        f64::from(self.width)
    }

    /// Copy of this style with another color.
    pub fn with_color(self, color: Rgba) -> Self {
        Self { color, ..self }
    }

    /// Copy of this style with another width.
    pub fn with_width(self, width: u8) -> Result<Self, StyleError> {
        Self::new(self.color, width)
    }

    /// The stroke color as a peniko color.
    pub fn stroke(&self) -> Color {
        self.color.into()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Palette::default_entry().color,
            width: DEFAULT_BRUSH_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgba::from_hex("#B9FBC0").unwrap(), Rgba::rgb(0xB9, 0xFB, 0xC0));
        assert_eq!(Rgba::from_hex("2e2e2e").unwrap(), Rgba::rgb(0x2E, 0x2E, 0x2E));
        assert_eq!(Rgba::from_hex("#FF000080").unwrap(), Rgba::new(255, 0, 0, 128));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(Rgba::from_hex("#12345"), Err(StyleError::InvalidColor(_))));
        assert!(matches!(Rgba::from_hex("#GGGGGG"), Err(StyleError::InvalidColor(_))));
        assert!(matches!(Rgba::from_hex(""), Err(StyleError::InvalidColor(_))));
        assert!(matches!(Rgba::from_hex("#ééé"), Err(StyleError::InvalidColor(_))));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgba::rgb(0xB9, 0xFB, 0xC0).to_hex(), "#B9FBC0");
        assert_eq!(Rgba::new(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_width_bounds() {
        assert!(StrokeStyle::new(Rgba::black(), 1).is_ok());
        assert!(StrokeStyle::new(Rgba::black(), 10).is_ok());
        assert_eq!(
            StrokeStyle::new(Rgba::black(), 0),
            Err(StyleError::WidthOutOfRange(0))
        );
        assert_eq!(
            StrokeStyle::new(Rgba::black(), 11),
            Err(StyleError::WidthOutOfRange(11))
        );
    }

    #[test]
    fn test_parse_palette_name_or_hex() {
        let named = StrokeStyle::parse("graphite", 4).unwrap();
        assert_eq!(named.color(), Rgba::rgb(0x2E, 0x2E, 0x2E));

        let hex = StrokeStyle::parse("#FF0000", 2).unwrap();
        assert_eq!(hex.color(), Rgba::rgb(255, 0, 0));
        assert_eq!(hex.width(), 2);
    }

    #[test]
    fn test_default_style() {
        let style = StrokeStyle::default();
        assert_eq!(style.color().to_hex(), "#B9FBC0");
        assert_eq!(style.width(), 3);
    }

    #[test]
    fn test_deserialize_validates_width() {
        let style: StrokeStyle =
            serde_json::from_str(r#"{"color":{"r":1,"g":2,"b":3,"a":255},"width":4}"#).unwrap();
        assert_eq!(style, StrokeStyle::new(Rgba::rgb(1, 2, 3), 4).unwrap());

        let zero = serde_json::from_str::<StrokeStyle>(
            r#"{"color":{"r":1,"g":2,"b":3,"a":255},"width":0}"#,
        );
        assert!(zero.is_err());
        let wide = serde_json::from_str::<StrokeStyle>(
            r#"{"color":{"r":1,"g":2,"b":3,"a":255},"width":255}"#,
        );
        assert!(wide.is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let style = StrokeStyle::parse("Sky Glow", 7).unwrap();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(serde_json::from_str::<StrokeStyle>(&json).unwrap(), style);
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = Rgba::rgb(10, 20, 30).into();
        assert_eq!(Rgba::from(color), Rgba::rgb(10, 20, 30));
    }
}
