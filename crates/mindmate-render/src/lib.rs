//! MindMate Render Library
//!
//! CPU raster drawing surface for the doodle space, built on tiny-skia,
//! with PNG export.

pub mod export;
mod surface;

pub use export::encode_png;
pub use surface::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DrawingSurface, SurfaceConfig, SurfaceError,
    SurfaceResult,
};
