// src/error.rs

//! Error types for the annotation canvas.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning text into a raster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    #[error("No glyph defined for character {0:?}")]
    UnknownGlyph(char),
}

/// Precondition violations when building or masking a canvas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Canvas dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("Expected {expected} intensity values, got {actual}")]
    DataLength { expected: usize, actual: usize },
    #[error("Region is {region_width}x{region_height} but canvas is {canvas_width}x{canvas_height}")]
    RegionMismatch {
        region_width: usize,
        region_height: usize,
        canvas_width: usize,
        canvas_height: usize,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
