//! Braille renderer module for converting RGBA frames to dot-art text.
//!
//! The conversion runs in three stages, each in its own submodule:
//!
//! 1. **Luminance** - RGB to BT.709 luminance with brightness/contrast
//! 2. **Binarization** - flat threshold or Floyd-Steinberg dithering
//! 3. **Cell encoding** - 2x4 pixel blocks to U+2800..U+28FF characters
//!
//! [`dimensions`] holds the grid bounds and the grid-to-pixel mapping the
//! pipeline uses to size the rasterized frame.

mod cell;
pub mod dimensions;
mod dither;
mod error;
mod frame;
mod luminance;

pub use cell::{
    cell_mask, encode, mask_to_braille, BrailleGrid, BRAILLE_BASE, CELL_HEIGHT, CELL_WIDTH, DOT_MAP,
};
pub use dimensions::{
    pixel_dimensions, rows_for_aspect, GridLimits, LimitsError, DEFAULT_CHAR_ASPECT_RATIO,
    DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_GRID_EXTENT, MAX_ROWS, MIN_COLUMNS, MIN_ROWS,
};
pub use dither::{floyd_steinberg, threshold_convert, Binarization, DEFAULT_THRESHOLD};
pub use error::BufferError;
pub use frame::{BinaryField, LuminanceField, RgbaFrame, RGBA_CHANNELS};
pub use luminance::{luma, to_luminance, ToneAdjust, LUMA_B, LUMA_G, LUMA_R, TONE_MAX, TONE_MIN};
