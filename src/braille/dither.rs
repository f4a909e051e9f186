//! Binarization of a luminance field into ink/background pixels.
//!
//! Provides Floyd-Steinberg error-diffusion dithering and simple threshold
//! conversion. In both, a pixel is ink when its (possibly error-adjusted)
//! luminance is strictly below the threshold, so dark image regions become
//! visible dots.

use super::frame::{BinaryField, LuminanceField};

/// Default threshold value for binarization.
pub const DEFAULT_THRESHOLD: f32 = 128.0;

/// Strategy used to turn luminance into dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binarization {
    /// Flat threshold, no error diffusion
    Threshold,
    /// Floyd-Steinberg error diffusion
    #[default]
    FloydSteinberg,
}

impl Binarization {
    /// Pick the strategy from the user-facing dithering toggle.
    pub fn from_dithering(dithering: bool) -> Self {
        if dithering {
            Binarization::FloydSteinberg
        } else {
            Binarization::Threshold
        }
    }

    /// Run this strategy over `field`.
    pub fn apply(self, field: &LuminanceField, threshold: f32) -> BinaryField {
        match self {
            Binarization::Threshold => threshold_convert(field, threshold),
            Binarization::FloydSteinberg => floyd_steinberg(field, threshold),
        }
    }
}

/// Simple threshold conversion without dithering.
///
/// Pixels with luminance `< threshold` become ink.
pub fn threshold_convert(field: &LuminanceField, threshold: f32) -> BinaryField {
    let pixels = field.values().iter().map(|&v| v < threshold).collect();
    BinaryField::from_parts(pixels, field.width(), field.height())
}

/// Apply Floyd-Steinberg dithering to a luminance field.
///
/// Pixels are visited top-to-bottom, left-to-right over a private copy of
/// the field. Each pixel is quantized to 0 or 255 and the error is pushed
/// to the neighbours that have not been visited yet:
/// ```text
///          [*]   7/16
///   3/16  5/16   1/16
/// ```
pub fn floyd_steinberg(field: &LuminanceField, threshold: f32) -> BinaryField {
    let w = field.width() as usize;
    let h = field.height() as usize;

    let mut buffer: Vec<f32> = field.values().to_vec();
    let mut output = vec![false; w * h];

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_value = buffer[idx];
            let new_value = if old_value < threshold { 0.0 } else { 255.0 };
            output[idx] = new_value == 0.0;

            let error = f64::from(old_value) - new_value;

            // Right: 7/16
            if x + 1 < w {
                diffuse(&mut buffer, idx + 1, error * 7.0 / 16.0);
            }
            if y + 1 < h {
                // Bottom-left: 3/16
                if x > 0 {
                    diffuse(&mut buffer, idx + w - 1, error * 3.0 / 16.0);
                }
                // Bottom: 5/16
                diffuse(&mut buffer, idx + w, error * 5.0 / 16.0);
                // Bottom-right: 1/16
                if x + 1 < w {
                    diffuse(&mut buffer, idx + w + 1, error / 16.0);
                }
            }
        }
    }

    BinaryField::from_parts(output, field.width(), field.height())
}

fn diffuse(buffer: &mut [f32], idx: usize, amount: f64) {
    buffer[idx] = (f64::from(buffer[idx]) + amount) as f32;
}
