// src/layout.rs

//! Text layout: composes glyph bitmaps into a single intensity raster.
//!
//! Glyphs are placed left to right. Each glyph after the first starts at the
//! previous glyph's origin plus its width plus the pair's kerning. Glyphs are
//! bottom-aligned, which puts them on a shared baseline because every glyph
//! bitmap extends down to the descender row.
//!
//! Text containing `\n` is laid out one line at a time and the lines are
//! stacked in bands of [`GlyphTable::line_height`] rows.

use crate::config::CONFIG; // For the default line spacing
use crate::error::GlyphError;
use crate::font::{glyph_table, Glyph, GlyphTable};
use log::trace;

/// A rectangular grid of intensities, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl TextRaster {
    /// A zero-filled raster.
    pub fn new(width: usize, height: usize) -> Self {
        TextRaster {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True for the degenerate 0x0 (or zero-area) raster.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Intensity at `(col, row)`, 0 outside the raster.
    pub fn get(&self, col: usize, row: usize) -> u8 {
        if col >= self.width || row >= self.height {
            return 0;
        }
        self.data[row * self.width + col]
    }

    /// Iterates every cell as `(row, col, intensity)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / width, i % width, v))
    }

    /// Writes `value` at `(col, row)` unless a higher intensity is already there.
    fn merge_max(&mut self, col: usize, row: usize, value: u8) {
        let idx = row * self.width + col;
        if value > self.data[idx] {
            self.data[idx] = value;
        }
    }

    fn blit_glyph(&mut self, glyph: &Glyph, x: usize, y: usize) {
        for (row, cells) in glyph.rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value > 0 {
                    self.merge_max(x + col, y + row, value);
                }
            }
        }
    }

    fn blit_raster(&mut self, src: &TextRaster, x: usize, y: usize) {
        for (row, col, value) in src.cells() {
            if value > 0 {
                self.merge_max(x + col, y + row, value);
            }
        }
    }
}

/// Where one glyph landed on the line.
#[derive(Debug, Clone, Copy)]
struct Placement<'a> {
    x: usize,
    glyph: &'a Glyph,
}

/// Lays out `text` with the built-in font and the configured line spacing.
pub fn layout(text: &str) -> Result<TextRaster, GlyphError> {
    layout_with(glyph_table(), text, CONFIG.text.line_spacing)
}

/// Lays out `text` against `table`.
///
/// A single line is as tall as its tallest glyph. With several lines, each
/// line is bottom-aligned in a band of `table.line_height()` rows and bands
/// are separated by `line_spacing` blank rows.
pub fn layout_with(
    table: &GlyphTable,
    text: &str,
    line_spacing: usize,
) -> Result<TextRaster, GlyphError> {
    if !text.contains('\n') {
        return layout_line(table, text);
    }

    // Resolve every line before allocating so an unknown glyph anywhere
    // aborts the whole call.
    let lines = text
        .split('\n')
        .map(|line| layout_line(table, line))
        .collect::<Result<Vec<_>, _>>()?;

    let band = table.line_height();
    let width = lines.iter().map(TextRaster::width).max().unwrap_or(0);
    let height = lines.len() * band + (lines.len() - 1) * line_spacing;
    let mut raster = TextRaster::new(width, height);

    for (i, line) in lines.iter().enumerate() {
        let band_top = i * (band + line_spacing);
        raster.blit_raster(line, 0, band_top + band - line.height());
    }

    trace!(
        "Laid out {} lines into {}x{} raster",
        lines.len(),
        width,
        height
    );
    Ok(raster)
}

fn layout_line(table: &GlyphTable, line: &str) -> Result<TextRaster, GlyphError> {
    let mut placements: Vec<Placement> = Vec::with_capacity(line.len());
    let mut previous: Option<Placement> = None;
    let mut cursor: isize = 0;

    for c in line.chars() {
        let glyph = table.lookup(c)?;
        if let Some(prev) = previous {
            cursor += prev.glyph.width as isize + table.kerning(prev.glyph.c, c) as isize;
        }
        // Kerning never pulls a glyph left of the line origin.
        let placement = Placement {
            x: cursor.max(0) as usize,
            glyph,
        };
        placements.push(placement);
        previous = Some(placement);
    }

    let width = placements
        .iter()
        .map(|p| p.x + p.glyph.width)
        .max()
        .unwrap_or(0);
    let height = placements
        .iter()
        .map(|p| p.glyph.height)
        .max()
        .unwrap_or(0);

    let mut raster = TextRaster::new(width, height);
    for p in &placements {
        raster.blit_glyph(p.glyph, p.x, height - p.glyph.height);
    }

    trace!("Laid out {:?} into {}x{} raster", line, width, height);
    Ok(raster)
}
