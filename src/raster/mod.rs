//! Rasterization: turning a source image into an RGBA frame of an exact size.
//!
//! The pipeline only depends on the [`Rasterize`] trait. [`ImageSource`] is
//! the file-backed implementation; closures can stand in for it in tests or
//! when frames come from elsewhere.

mod error;
mod source;

pub use error::RasterError;
pub use source::{ImageSource, MAX_FILE_SIZE, SUPPORTED_FORMATS};

use crate::braille::RgbaFrame;

/// Produces an RGBA frame of exactly `width x height` pixels.
///
/// Scaling quality is up to the implementation; areas without image data
/// must come out white.
pub trait Rasterize {
    fn rasterize(&mut self, width: u32, height: u32) -> Result<RgbaFrame, RasterError>;
}

impl<F> Rasterize for F
where
    F: FnMut(u32, u32) -> Result<RgbaFrame, RasterError>,
{
    fn rasterize(&mut self, width: u32, height: u32) -> Result<RgbaFrame, RasterError> {
        self(width, height)
    }
}
