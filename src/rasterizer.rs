// src/rasterizer.rs

//! Turns a composed [`TextRaster`] into a sparse list of pixel writes.
//!
//! ```text
//! TextRaster  →  [rasterize]  →  Fragment[]  →  [compositor]  →  Canvas
//!  intensities                   (row, col, Paint)
//! ```
//!
//! Zero-intensity cells never produce a fragment, so pixels the text does not
//! cover are never touched.

use crate::color::Color;
use crate::layout::TextRaster;

/// What a fragment does to the destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Overwrite with the color.
    Solid(Color),
    /// Blend the color over the destination with a coverage weight.
    Blend { color: Color, weight: u8 },
}

impl Paint {
    /// The color the destination pixel ends up with.
    pub fn resolve(self, dst: Color) -> Color {
        match self {
            Paint::Solid(color) => color,
            Paint::Blend { color, weight } => color.blend_over(dst, weight),
        }
    }
}

/// A single write in raster-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub row: usize,
    pub col: usize,
    pub paint: Paint,
}

/// Converts raster intensities into fragments.
///
/// Without antialiasing every covered cell becomes [`Paint::Solid`]. With it,
/// the cell's intensity becomes the blend weight.
pub fn rasterize(raster: &TextRaster, color: Color, antialias: bool) -> Vec<Fragment> {
    raster
        .cells()
        .filter(|&(_, _, intensity)| intensity > 0)
        .map(|(row, col, intensity)| Fragment {
            row,
            col,
            paint: if antialias {
                Paint::Blend {
                    color,
                    weight: intensity,
                }
            } else {
                Paint::Solid(color)
            },
        })
        .collect()
}
