// src/font/mod.rs

//! The built-in bitmap font.
//!
//! Glyph bitmaps are parsed once, on first use, into a process-wide
//! [`GlyphTable`]. The table is never mutated afterwards, so it can be read
//! from any thread without synchronization.

mod glyphs;
mod kerning;

use crate::error::GlyphError;
use glyphs::GLYPH_SOURCE;
use kerning::KERNING_PAIRS;
use log::{debug, trace};
use once_cell::sync::Lazy; // The table is parsed once on first lookup
use std::collections::HashMap;
use std::fmt;

/// Columns of blank gutter appended to the right of every glyph.
pub const GLYPH_GUTTER: usize = 1;

/// Intensity of a fully covered glyph cell.
pub const FULL_INTENSITY: u8 = 255;

/// A single character's bitmap.
///
/// `width` includes the gutter column. The bitmap starts at the glyph's
/// topmost ink row and always ends on the bottom descender row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// The character this glyph draws.
    pub c: char,
    /// Width in pixels, gutter included.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Row-major intensities, `width * height` long.
    bitmap: Vec<u8>,
}

impl Glyph {
    /// Parses a `|`-separated row source into a glyph.
    ///
    /// # Panics
    /// Panics if the rows have different lengths. Glyph sources are static
    /// data, so this can only fire for a malformed built-in entry.
    fn parse(c: char, source: &str) -> Self {
        let rows: Vec<&str> = source.split('|').collect();
        let ink_width = rows[0].chars().count();
        let width = ink_width + GLYPH_GUTTER;
        let height = rows.len();

        let mut bitmap = Vec::with_capacity(width * height);
        for row in &rows {
            assert_eq!(
                row.chars().count(),
                ink_width,
                "glyph {:?} has ragged rows",
                c
            );
            bitmap.extend(row.chars().map(cell_intensity));
            bitmap.extend(std::iter::repeat(0).take(GLYPH_GUTTER));
        }

        Glyph {
            c,
            width,
            height,
            bitmap,
        }
    }

    /// Intensity at a glyph-local column and row, 0 outside the bitmap.
    pub fn intensity(&self, col: usize, row: usize) -> u8 {
        if col >= self.width || row >= self.height {
            return 0;
        }
        self.bitmap[row * self.width + col]
    }

    /// Raw row-major intensities.
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Iterates the bitmap one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.bitmap.chunks_exact(self.width.max(1))
    }

    /// True if every cell is zero (e.g. the space glyph).
    pub fn is_blank(&self) -> bool {
        self.bitmap.iter().all(|&v| v == 0)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.c)
    }
}

fn cell_intensity(cell: char) -> u8 {
    match cell {
        '#' => FULL_INTENSITY,
        '+' => 170, // Two thirds coverage
        '.' => 85, // One third coverage
        _ => 0,
    }
}

/// Character to glyph mapping plus the kerning pair table.
#[derive(Debug)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
    kerning: HashMap<(char, char), i32>,
    line_height: usize,
}

impl GlyphTable {
    /// Builds the table from the built-in glyph and kerning sources.
    fn builtin() -> Self {
        let glyphs: HashMap<char, Glyph> = GLYPH_SOURCE
            .iter()
            .map(|&(c, source)| (c, Glyph::parse(c, source)))
            .collect();
        let kerning: HashMap<(char, char), i32> = KERNING_PAIRS.iter().copied().collect();
        let line_height = glyphs.values().map(|g| g.height).max().unwrap_or(0);

        debug!(
            "Built glyph table: {} glyphs, {} kerning pairs, line height {}px",
            glyphs.len(),
            kerning.len(),
            line_height
        );

        GlyphTable {
            glyphs,
            kerning,
            line_height,
        }
    }

    /// Looks up the glyph for `c`.
    pub fn lookup(&self, c: char) -> Result<&Glyph, GlyphError> {
        self.glyphs.get(&c).ok_or_else(|| {
            trace!("No glyph for {:?} (U+{:04X})", c, c as u32);
            GlyphError::UnknownGlyph(c)
        })
    }

    /// Horizontal adjustment between `left` and `right`, 0 if the pair has no entry.
    pub fn kerning(&self, left: char, right: char) -> i32 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0)
    }

    /// Height of the tallest glyph; the band height of one line of text.
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterates every defined character, in no particular order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

static GLYPH_TABLE: Lazy<GlyphTable> = Lazy::new(GlyphTable::builtin);

/// The process-wide built-in glyph table.
pub fn glyph_table() -> &'static GlyphTable {
    &GLYPH_TABLE
}
