//! Pixel buffers flowing between the conversion stages.

use super::error::BufferError;

/// Bytes per RGBA pixel.
pub const RGBA_CHANNELS: usize = 4;

/// A rasterized RGBA image, row-major, top-to-bottom.
///
/// The byte length is checked on construction, so every stage reading a
/// frame can index it without bounds surprises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbaFrame {
    /// Wrap raw RGBA bytes, failing if the length is not `width * height * 4`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if data.len() != expected {
            return Err(BufferError::Length {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A frame filled with one colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * RGBA_CHANNELS);
        for _ in 0..pixel_count {
            data.extend_from_slice(&rgba);
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over `[r, g, b, a]` pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(RGBA_CHANNELS)
    }
}

/// Single-channel perceptual brightness, one `f32` per pixel in [0, 255].
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceField {
    values: Vec<f32>,
    width: u32,
    height: u32,
}

impl LuminanceField {
    /// Build a field from raw values, failing if the length is not `width * height`.
    ///
    /// Values are clamped into [0, 255].
    pub fn new(values: Vec<f32>, width: u32, height: u32) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(BufferError::Length {
                width,
                height,
                expected,
                actual: values.len(),
            });
        }
        let values = values.into_iter().map(|v| v.clamp(0.0, 255.0)).collect();
        Ok(Self {
            values,
            width,
            height,
        })
    }

    pub(crate) fn from_clamped(values: Vec<f32>, width: u32, height: u32) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            values,
            width,
            height,
        }
    }

    /// A field with the same luminance everywhere.
    pub fn uniform(width: u32, height: u32, value: f32) -> Self {
        let value = value.clamp(0.0, 255.0);
        Self::from_clamped(vec![value; width as usize * height as usize], width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Luminance at `(x, y)`, or `None` outside the field.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Ink/background decision per pixel; `true` means the dot is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    pixels: Vec<bool>,
    width: u32,
    height: u32,
}

impl BinaryField {
    /// Build a field from raw bits, failing if the length is not `width * height`.
    pub fn new(pixels: Vec<bool>, width: u32, height: u32) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BufferError::Length {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub(crate) fn from_parts(pixels: Vec<bool>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Whether the pixel at `(x, y)` is ink. Out-of-bounds pixels are off.
    pub fn is_on(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Number of ink pixels.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_frame_rejects_short_buffer() {
        let err = RgbaFrame::new(vec![0; 15], 2, 2).unwrap_err();
        assert_eq!(
            err,
            BufferError::Length {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_rgba_frame_accepts_exact_buffer() {
        let frame = RgbaFrame::new(vec![0; 2 * 3 * 4], 2, 3).unwrap();
        assert_eq!(frame.dimensions(), (2, 3));
        assert_eq!(frame.pixels().count(), 6);
    }

    #[test]
    fn test_rgba_frame_filled() {
        let frame = RgbaFrame::filled(3, 1, [1, 2, 3, 4]);
        assert_eq!(frame.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_luminance_field_clamps_values() {
        let field = LuminanceField::new(vec![-10.0, 300.0], 2, 1).unwrap();
        assert_eq!(field.values(), &[0.0, 255.0]);
        assert_eq!(field.get(2, 0), None);
    }

    #[test]
    fn test_binary_field_bounds() {
        let field = BinaryField::new(vec![true, false, false, true], 2, 2).unwrap();
        assert!(field.is_on(0, 0));
        assert!(field.is_on(1, 1));
        assert!(!field.is_on(2, 0));
        assert_eq!(field.count_on(), 2);
        assert!(BinaryField::new(vec![true], 2, 2).is_err());
    }
}
