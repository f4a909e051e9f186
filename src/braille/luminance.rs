//! RGBA to luminance conversion using ITU-R BT.709 weights, with
//! brightness/contrast adjustment.

use super::frame::{LuminanceField, RgbaFrame};

/// BT.709 red weight.
pub const LUMA_R: f64 = 0.2126;
/// BT.709 green weight.
pub const LUMA_G: f64 = 0.7152;
/// BT.709 blue weight.
pub const LUMA_B: f64 = 0.0722;

/// Lowest accepted brightness/contrast setting.
pub const TONE_MIN: i32 = -50;
/// Highest accepted brightness/contrast setting.
pub const TONE_MAX: i32 = 50;

/// Setting units are percent of the 0-255 range.
const TONE_SCALE: f64 = 2.55;

/// Precomputed brightness offset and contrast factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneAdjust {
    brightness_offset: f64,
    contrast_factor: f64,
}

impl ToneAdjust {
    /// Build the adjustment for `brightness` and `contrast`, both clamped to
    /// [`TONE_MIN`, `TONE_MAX`].
    ///
    /// Contrast uses the classic remap
    /// `259 * (c + 255) / (255 * (259 - c))` with `c = contrast * 2.55`.
    pub fn new(brightness: i32, contrast: i32) -> Self {
        let brightness = brightness.clamp(TONE_MIN, TONE_MAX);
        let contrast = contrast.clamp(TONE_MIN, TONE_MAX);

        let brightness_offset = f64::from(brightness) * TONE_SCALE;
        let contrast_value = f64::from(contrast) * TONE_SCALE;
        let denominator = 255.0 * (259.0 - contrast_value);
        // Unreachable within the clamped range (contrast_value <= 127.5).
        let contrast_factor = if denominator <= 0.0 {
            f64::MAX
        } else {
            259.0 * (contrast_value + 255.0) / denominator
        };

        Self {
            brightness_offset,
            contrast_factor,
        }
    }

    pub fn brightness_offset(&self) -> f64 {
        self.brightness_offset
    }

    pub fn contrast_factor(&self) -> f64 {
        self.contrast_factor
    }

    /// Apply the adjustment to a raw luma value and clamp into [0, 255].
    pub fn apply(&self, luma: f64) -> f64 {
        let value = self.contrast_factor * (luma - 128.0) + 128.0 + self.brightness_offset;
        value.clamp(0.0, 255.0)
    }
}

impl Default for ToneAdjust {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Relative luminance of one RGB triple (alpha is not considered).
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * f64::from(r) + LUMA_G * f64::from(g) + LUMA_B * f64::from(b)
}

/// Convert an RGBA frame to a luminance field.
///
/// Each pixel becomes `contrast_factor * (luma - 128) + 128 + brightness_offset`,
/// clamped to [0, 255]. The frame's length invariant is enforced by
/// [`RgbaFrame::new`], so this cannot fail.
pub fn to_luminance(frame: &RgbaFrame, tone: &ToneAdjust) -> LuminanceField {
    let pixel_count = frame.width() as usize * frame.height() as usize;
    let mut values = Vec::with_capacity(pixel_count);

    for px in frame.pixels() {
        let value = tone.apply(luma(px[0], px[1], px[2]));
        values.push(value as f32);
    }

    LuminanceField::from_clamped(values, frame.width(), frame.height())
}
