// src/compositor.rs

//! Writes rendered text onto a [`Canvas`].
//!
//! The compositor places a [`TextRaster`] at an origin, optionally centered
//! on it, and applies the rasterizer's fragments. Destinations that fall off
//! the canvas are dropped without error, so text may hang over any edge.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::GlyphError;
use crate::layout::{layout, TextRaster};
use crate::rasterizer::rasterize; // Raster to sparse fragments
use log::{debug, trace};

/// Top-left corner at which a raster lands so that its center is on `(x, y)`.
///
/// Uses floor division, so an odd dimension puts the extra pixel after the
/// center. Returns `None` when the shifted origin would underflow `isize`;
/// such a raster cannot reach the canvas.
pub fn centered_origin(raster: &TextRaster, x: isize, y: isize) -> Option<(isize, isize)> {
    let half_width = (raster.width() / 2) as isize;
    let half_height = (raster.height() / 2) as isize;
    Some((x.checked_sub(half_width)?, y.checked_sub(half_height)?))
}

/// Applies `raster` to `canvas` with its top-left corner (or center, when
/// `center` is set) at `(origin_x, origin_y)`.
pub fn composite(
    canvas: &mut Canvas,
    raster: &TextRaster,
    origin_x: isize,
    origin_y: isize,
    color: Color,
    antialias: bool,
    center: bool,
) {
    let origin = if center {
        centered_origin(raster, origin_x, origin_y)
    } else {
        Some((origin_x, origin_y))
    };
    let Some((ox, oy)) = origin else {
        trace!(
            "Centered origin for ({}, {}) is out of range; nothing drawn",
            origin_x,
            origin_y
        );
        return;
    };

    let mut clipped = 0usize;
    for fragment in rasterize(raster, color, antialias) {
        // Overflowing coordinates are off-canvas by definition
        let dest = ox
            .checked_add(fragment.col as isize)
            .zip(oy.checked_add(fragment.row as isize));
        match dest.and_then(|(x, y)| canvas.pixel(x, y).map(|dst| (x, y, dst))) {
            Some((x, y, dst)) => {
                canvas.set_pixel(x, y, fragment.paint.resolve(dst));
            }
            None => clipped += 1,
        }
    }

    if clipped > 0 {
        trace!(
            "Clipped {} text pixels outside {}x{} canvas at origin ({}, {})",
            clipped,
            canvas.width(),
            canvas.height(),
            ox,
            oy
        );
    }
}

/// Lays out `text` and composites it onto `canvas`.
///
/// An unknown character fails the whole call before any pixel is written.
pub fn text_at(
    canvas: &mut Canvas,
    text: &str,
    x: isize,
    y: isize,
    color: Color,
    antialias: bool,
    center: bool,
) -> Result<(), GlyphError> {
    let raster = layout(text)?;
    debug!(
        "Drawing {:?} ({}x{}) at ({}, {}) center={} antialias={}",
        text,
        raster.width(),
        raster.height(),
        x,
        y,
        center,
        antialias
    );
    composite(canvas, &raster, x, y, color, antialias, center);
    Ok(())
}
