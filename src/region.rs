// src/region.rs

//! Boolean pixel masks used to select canvas cells for masking.

use crate::error::CanvasError;

/// A `width x height` selection of pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Region {
    /// An empty selection.
    pub fn new(width: usize, height: usize) -> Self {
        Region {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Selects every `(x, y)` for which `f` returns true.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Region {
            width,
            height,
            cells,
        }
    }

    /// Wraps an existing row-major selection.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, CanvasError> {
        if cells.len() != width * height {
            return Err(CanvasError::DataLength {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Region {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Sets one cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, selected: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = selected;
        }
    }

    /// Selects a `width x height` rectangle with its top-left corner at
    /// `(x, y)`, clipped to the region.
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let x_end = x.saturating_add(width).min(self.width); // Clip to the mask
        let y_end = y.saturating_add(height).min(self.height);
        for row in y.min(y_end)..y_end {
            let start = row * self.width;
            self.cells[start + x.min(x_end)..start + x_end].fill(true);
        }
    }

    /// Number of selected cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
