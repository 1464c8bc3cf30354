//! Status indicator glyph description
//!
//! The indicator is a square of `background` with a `foreground` disc in the
//! middle half. Rasterizing it is left to whatever hosts the indicator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An RGB color, parsed from `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("expected a color like #rrggbb, got '{}'", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("invalid color '{}': {}", s, e))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Size and colors of the indicator glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSpec {
    pub size: u32,
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Bounding box of the disc, inclusive pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl GlyphSpec {
    pub fn disc_bounds(&self) -> DiscBounds {
        let inset = self.size / 4;
        let far = self.size - inset;
        DiscBounds {
            left: inset,
            top: inset,
            right: far,
            bottom: far,
        }
    }
}
