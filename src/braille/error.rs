//! Buffer error types

/// Errors raised when a pixel buffer does not have the shape a stage expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// RGBA byte length does not match `width * height * 4`
    #[error("RGBA buffer for {width}x{height} must be {expected} bytes, got {actual}")]
    Length {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel field cannot be split into whole 2x4 braille cells of the requested grid
    #[error("{width}x{height} pixel field does not match a {cols}x{rows} braille grid")]
    Grid {
        width: u32,
        height: u32,
        cols: u32,
        rows: u32,
    },
}
