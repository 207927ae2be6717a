// src/canvas.rs

//! The RGB pixel buffer that annotations are drawn onto.
//!
//! A `Canvas` is a plain owned value: `height * width` cells of three 8-bit
//! channels, row-major. Every drawing operation takes `&mut Canvas`, so only
//! one caller can write at a time. Coordinates are `x` = column and
//! `y` = row; drawing operations accept signed coordinates and silently drop
//! anything outside the canvas.

use crate::color::Color;
use crate::config::CONFIG; // Defaults for the *_default wrappers
use crate::error::{CanvasError, GlyphError};
use crate::region::Region;
use bitflags::bitflags; // Channel enable mask
use log::{debug, trace};

/// Number of channels per pixel.
pub const CHANNELS: usize = 3; // RGB, no alpha

bitflags! {
    /// Which channels a grayscale import populates.
    ///
    /// `Channels::RED | Channels::GREEN | Channels::BLUE` (i.e. `all()`)
    /// gives a gray canvas; a single flag tints the image in that channel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct Channels: u8 {
        const RED   = 1 << 0;
        const GREEN = 1 << 1;
        const BLUE  = 1 << 2;
    }
}

impl Channels {
    /// Builds the mask from three enable flags in RGB order.
    pub fn from_enabled(red: bool, green: bool, blue: bool) -> Self {
        let mut channels = Channels::empty();
        channels.set(Channels::RED, red);
        channels.set(Channels::GREEN, green);
        channels.set(Channels::BLUE, blue);
        channels
    }

    /// Enable flags in RGB order.
    pub fn enabled(self) -> [bool; CHANNELS] {
        [
            self.contains(Channels::RED),
            self.contains(Channels::GREEN),
            self.contains(Channels::BLUE),
        ]
    }
}

impl Default for Channels {
    fn default() -> Self {
        Channels::all()
    }
}

/// An RGB annotation canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// A zero-filled (black) canvas.
    pub fn blank(width: usize, height: usize) -> Result<Self, CanvasError> {
        check_dimensions(width, height)?;
        debug!("Allocating blank {}x{} canvas", width, height);
        Ok(Canvas {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        })
    }

    /// Builds a canvas from a single-channel image.
    ///
    /// `gray` is row-major and must hold `width * height` values. Each enabled
    /// channel receives a copy of the image; disabled channels stay 0.
    pub fn from_grayscale(
        width: usize,
        height: usize,
        gray: &[u8],
        channels: Channels,
    ) -> Result<Self, CanvasError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if gray.len() != expected {
            return Err(CanvasError::DataLength {
                expected,
                actual: gray.len(),
            });
        }

        let enabled = channels.enabled();
        let mut data = vec![0; expected * CHANNELS];
        for (pixel, &value) in data.chunks_exact_mut(CHANNELS).zip(gray) {
            for (channel, &on) in pixel.iter_mut().zip(&enabled) {
                if on {
                    *channel = value;
                }
            }
        }

        debug!(
            "Imported {}x{} grayscale image into channels {:?}",
            width, height, channels
        );
        Ok(Canvas {
            width,
            height,
            data,
        })
    }

    /// [`Canvas::from_grayscale`] with the configured channel mask.
    pub fn from_grayscale_default(
        width: usize,
        height: usize,
        gray: &[u8],
    ) -> Result<Self, CanvasError> {
        Self::from_grayscale(width, height, gray, CONFIG.import.channels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// One channel (0 = red, 1 = green, 2 = blue) as a row-major plane.
    ///
    /// # Panics
    /// Panics if `channel >= 3`.
    pub fn channel(&self, channel: usize) -> Vec<u8> {
        assert!(channel < CHANNELS, "channel index {} out of range", channel);
        self.data
            .iter()
            .skip(channel)
            .step_by(CHANNELS)
            .copied()
            .collect()
    }

    /// True if `(x, y)` lies on the canvas. Negative coordinates never wrap.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Byte offset of the pixel at `(x, y)`, `None` when off-canvas.
    fn offset(&self, x: isize, y: isize) -> Option<usize> {
        if self.contains(x, y) {
            Some((y as usize * self.width + x as usize) * CHANNELS)
        } else {
            None
        }
    }

    /// Color at `(x, y)`, `None` when off-canvas.
    pub fn pixel(&self, x: isize, y: isize) -> Option<Color> {
        self.offset(x, y).map(|i| {
            Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
        })
    }

    /// Writes `color` at `(x, y)`. Returns `false` (and writes nothing) when
    /// the coordinate is off-canvas.
    pub fn set_pixel(&mut self, x: isize, y: isize, color: Color) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.data[i..i + CHANNELS].copy_from_slice(&color.to_bytes());
                true
            }
            None => false,
        }
    }

    /// Draws a plus-shaped marker centered on `(x, y)`.
    ///
    /// Each arm extends `radius` pixels from the center. Arm pixels that fall
    /// off the canvas are dropped, including when the center itself is
    /// off-canvas.
    pub fn draw_cross(&mut self, x: isize, y: isize, color: Color, radius: usize) {
        let mut written = 0usize;
        // Visit canvas pixels only; abs_diff cannot overflow for any center
        // or radius.
        if y >= 0 && (y as usize) < self.height {
            for col in 0..self.width as isize {
                if col.abs_diff(x) <= radius {
                    written += self.set_pixel(col, y, color) as usize;
                }
            }
        }
        if x >= 0 && (x as usize) < self.width {
            for row in 0..self.height as isize {
                if row.abs_diff(y) <= radius {
                    written += self.set_pixel(x, row, color) as usize;
                }
            }
        }
        trace!(
            "Cross at ({}, {}) radius {}: {} pixel writes",
            x,
            y,
            radius,
            written
        );
    }

    /// [`Canvas::draw_cross`] with the configured color and radius.
    pub fn draw_cross_default(&mut self, x: isize, y: isize) {
        let cross = &CONFIG.cross;
        self.draw_cross(x, y, cross.color, cross.radius);
    }

    /// Overwrites every cell selected by `region` with `color`.
    pub fn mask_region(&mut self, region: &Region, color: Color) -> Result<(), CanvasError> {
        if region.width() != self.width || region.height() != self.height {
            return Err(CanvasError::RegionMismatch {
                region_width: region.width(),
                region_height: region.height(),
                canvas_width: self.width,
                canvas_height: self.height,
            });
        }

        let bytes = color.to_bytes();
        let mut painted = 0usize;
        for (pixel, &selected) in self.data.chunks_exact_mut(CHANNELS).zip(region.cells()) {
            if selected {
                pixel.copy_from_slice(&bytes);
                painted += 1;
            }
        }
        trace!("Masked {} pixels with {:?}", painted, color);
        Ok(())
    }

    /// [`Canvas::mask_region`] with the configured mask color.
    pub fn mask_region_default(&mut self, region: &Region) -> Result<(), CanvasError> {
        self.mask_region(region, CONFIG.mask.color)
    }

    /// Renders `text` with its top-left corner (or center) at `(x, y)`.
    /// See [`crate::compositor::text_at`].
    pub fn text_at(
        &mut self,
        text: &str,
        x: isize,
        y: isize,
        color: Color,
        antialias: bool,
        center: bool,
    ) -> Result<(), GlyphError> {
        crate::compositor::text_at(self, text, x, y, color, antialias, center)
    }

    /// [`Canvas::text_at`] with the configured color, antialias and center flags.
    pub fn text_default(&mut self, text: &str, x: isize, y: isize) -> Result<(), GlyphError> {
        let style = &CONFIG.text;
        self.text_at(text, x, y, style.color, style.antialias, style.center)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), CanvasError> {
    if width == 0 || height == 0 {
        return Err(CanvasError::ZeroDimension { width, height });
    }
    Ok(())
}
