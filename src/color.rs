// src/color.rs

//! Defines the RGB `Color` triple, a small named palette, and the per-channel
//! blend used by antialiased text.

use serde::{Deserialize, Serialize}; // Colors appear in the JSON config

/// Common annotation colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0, // Discriminants follow the ANSI palette order
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl NamedColor {
    /// Every palette entry, in discriminant order.
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Lowercase name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }

    /// Looks up a palette entry by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<NamedColor> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Returns the full-intensity RGB value of this named color.
    pub const fn to_color(self) -> Color {
        match self {
            NamedColor::Black => Color::new(0, 0, 0),
            NamedColor::Red => Color::new(255, 0, 0),
            NamedColor::Green => Color::new(0, 255, 0),
            NamedColor::Yellow => Color::new(255, 255, 0),
            NamedColor::Blue => Color::new(0, 0, 255),
            NamedColor::Magenta => Color::new(255, 0, 255),
            NamedColor::Cyan => Color::new(0, 255, 255),
            NamedColor::White => Color::new(255, 255, 255),
        }
    }
}

/// An 8-bit-per-channel RGB color. There is no alpha channel; partial
/// coverage is expressed as a blend weight at draw time.
///
/// Serializes as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = NamedColor::Black.to_color();
    pub const WHITE: Color = NamedColor::White.to_color();

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an RGB byte array
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Blends `self` over `dst` with a coverage weight in `0..=255`.
    ///
    /// Each channel is `round((src * w + dst * (255 - w)) / 255)`, so a weight
    /// of 255 yields exactly `self` and a weight of 0 yields exactly `dst`.
    pub fn blend_over(self, dst: Color, weight: u8) -> Color {
        Color::new(
            blend_channel(self.r, dst.r, weight),
            blend_channel(self.g, dst.g, weight),
            blend_channel(self.b, dst.b, weight),
        )
    }
}

#[inline]
fn blend_channel(src: u8, dst: u8, weight: u8) -> u8 {
    let w = weight as u32;
    let mixed = src as u32 * w + dst as u32 * (255 - w);
    // Rounded division; the result is at most 255.
    ((mixed + 127) / 255) as u8
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        named.to_color()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_bytes()
    }
}
