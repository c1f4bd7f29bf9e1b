//! Doodle color palette and brush size range.

use crate::style::{Rgba, StyleError};

/// Smallest selectable brush size in pixels.
pub const MIN_BRUSH_SIZE: u8 = 1;
/// Largest selectable brush size in pixels.
pub const MAX_BRUSH_SIZE: u8 = 10;
/// Brush size selected when the doodle space opens.
pub const DEFAULT_BRUSH_SIZE: u8 = 3;

/// A named palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Display name (e.g., "Electric Mint").
    pub name: &'static str,
    pub color: Rgba,
}

impl PaletteEntry {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Rgba::rgb(r, g, b),
        }
    }
}

/// The fixed doodle palette.
pub struct Palette;

impl Palette {
    /// Get all colors in the palette, in display order.
    pub fn all() -> &'static [PaletteEntry] {
        DOODLE_COLORS
    }

    /// Get color by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static PaletteEntry> {
        let name = name.trim();
        DOODLE_COLORS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Get color by name, failing for names outside the palette.
    pub fn require(name: &str) -> Result<&'static PaletteEntry, StyleError> {
        Self::by_name(name).ok_or_else(|| StyleError::UnknownPaletteColor(name.to_string()))
    }

    /// Find the palette entry with this exact color.
    pub fn by_color(color: Rgba) -> Option<&'static PaletteEntry> {
        DOODLE_COLORS.iter().find(|c| c.color == color)
    }

    /// The color selected when the doodle space opens.
    pub fn default_entry() -> &'static PaletteEntry {
        &DOODLE_COLORS[0]
    }
}

pub const DOODLE_COLORS: &[PaletteEntry] = &[
    PaletteEntry::new("Electric Mint", 0xB9, 0xFB, 0xC0),
    PaletteEntry::new("Bubblegum Pink", 0xFF, 0xB3, 0xC6),
    PaletteEntry::new("Sky Glow", 0xA0, 0xC4, 0xFF),
    PaletteEntry::new("Sunshine Peach", 0xFF, 0xD6, 0xA5),
    PaletteEntry::new("Lavender Mist", 0xCA, 0xBB, 0xE9),
    PaletteEntry::new("Lemon Zest", 0xFD, 0xFF, 0xB6),
    PaletteEntry::new("Cosmic Lilac", 0xE0, 0xAA, 0xFF),
    PaletteEntry::new("Graphite", 0x2E, 0x2E, 0x2E),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_eight_colors() {
        assert_eq!(Palette::all().len(), 8);
        assert_eq!(Palette::default_entry().name, "Electric Mint");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let entry = Palette::by_name("sky glow").unwrap();
        assert_eq!(entry.color.to_hex(), "#A0C4FF");
        assert!(Palette::by_name("Neon Orange").is_none());
    }

    #[test]
    fn test_require_unknown() {
        assert_eq!(
            Palette::require("Neon Orange"),
            Err(StyleError::UnknownPaletteColor("Neon Orange".to_string()))
        );
    }

    #[test]
    fn test_by_color() {
        let graphite = Rgba::rgb(0x2E, 0x2E, 0x2E);
        assert_eq!(Palette::by_color(graphite).map(|e| e.name), Some("Graphite"));
        assert!(Palette::by_color(Rgba::white()).is_none());
    }
}
