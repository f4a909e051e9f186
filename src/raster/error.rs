//! Error types for rasterization.

use std::path::PathBuf;

use crate::braille::BufferError;

/// Errors that can occur while loading or rasterizing a source image.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Failed to read image '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image is too large ({size} bytes). Use a file of {limit} bytes or less")]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported image type ({format}). Only PNG and JPEG are accepted")]
    UnsupportedFormat { format: String },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Source image has no pixels")]
    EmptySource,

    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error("Cannot rasterize to an empty {width}x{height} frame")]
    EmptyTarget { width: u32, height: u32 },
}
