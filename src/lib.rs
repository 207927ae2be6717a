// src/lib.rs

//! Annotated diagnostic images for microscopy pipelines.
//!
//! A [`Canvas`] is an RGB pixel buffer. Annotations are drawn straight into
//! it: cross markers, colored masks over boolean [`Region`]s, and text
//! rendered with a built-in bitmap font.
//!
//! ```text
//! text → font (glyph lookup) → layout (TextRaster) → rasterizer (Fragment[]) → compositor → Canvas
//! ```

pub mod canvas;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod rasterizer;
pub mod region;

pub use canvas::{Canvas, Channels};
pub use color::{Color, NamedColor};
pub use compositor::text_at;
pub use error::{CanvasError, ConfigError, GlyphError};
pub use region::Region;
