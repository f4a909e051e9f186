//! Image to braille text conversion pipeline.
//!
//! Sequences rasterization, luminance extraction, binarization and cell
//! encoding, and computes the output statistics callers check against
//! comment length limits.

use std::time::Instant;

use serde::Serialize;

use crate::braille::{
    self, pixel_dimensions, to_luminance, Binarization, BufferError, GridLimits, RgbaFrame,
    ToneAdjust, DEFAULT_THRESHOLD,
};
use crate::raster::{RasterError, Rasterize};
use crate::settings::Settings;

/// Errors that can occur during a conversion. Conversions are all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A stage received a buffer of the wrong size
    #[error("conversion failed: {0}")]
    InvalidBuffer(#[from] BufferError),

    /// The rasterizer could not produce a frame for the source
    #[error("conversion failed: {0}")]
    UnsupportedSource(#[from] RasterError),
}

/// Size statistics for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputStats {
    pub rows: u32,
    pub cols: u32,
    /// Unicode scalar values in the text, newlines included
    pub char_count: usize,
    /// `rows * (cols + 1)`, an upper bound on `char_count`
    pub safe_char_count: usize,
}

impl OutputStats {
    /// Stats for an empty output of the given grid size.
    pub fn empty(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            char_count: 0,
            safe_char_count: safe_char_count(rows, cols),
        }
    }

    /// Whether a text of this grid size fits in `limit` characters
    /// regardless of image content.
    pub fn fits_within(&self, limit: usize) -> bool {
        self.safe_char_count <= limit
    }
}

/// Result of converting one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Rows joined by `\n`, no trailing newline
    pub text: String,
    #[serde(flatten)]
    pub stats: OutputStats,
}

/// `rows * (cols + 1)`: every row plus one separator.
pub fn safe_char_count(rows: u32, cols: u32) -> usize {
    rows as usize * (cols as usize + 1)
}

/// Conversion pipeline with its grid bounds and binarization threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    limits: GridLimits,
    threshold: f32,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(GridLimits::default())
    }
}

impl Pipeline {
    pub fn new(limits: GridLimits) -> Self {
        Self {
            limits,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Override the binarization threshold (default 128).
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn limits(&self) -> &GridLimits {
        &self.limits
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Convert `source` to braille text.
    ///
    /// Rows and columns are clamped into the pipeline's limits (never
    /// rejected), the source is rasterized at `cols * 2` by `rows * 4`
    /// pixels, and the frame is run through the three stages.
    pub fn convert<R>(
        &self,
        source: &mut R,
        settings: &Settings,
    ) -> Result<Conversion, ConvertError>
    where
        R: Rasterize + ?Sized,
    {
        let settings = self.clamp_settings(settings);
        let (width, height) = pixel_dimensions(settings.cols, settings.rows);

        let start = Instant::now();
        let frame = source.rasterize(width, height)?;
        log::debug!("Rasterized {}x{} frame in {:?}", width, height, start.elapsed());

        self.encode_frame(&frame, &settings)
    }

    /// Convert an already-rasterized frame.
    ///
    /// The frame must be exactly the pixel size of the clamped grid.
    pub fn convert_frame(
        &self,
        frame: &RgbaFrame,
        settings: &Settings,
    ) -> Result<Conversion, ConvertError> {
        let settings = self.clamp_settings(settings);
        self.encode_frame(frame, &settings)
    }

    fn clamp_settings(&self, settings: &Settings) -> Settings {
        let clamped = settings.clamped(&self.limits);
        if (clamped.rows, clamped.cols) != (settings.rows, settings.cols) {
            log::info!(
                "Requested {}x{} grid clamped to {}x{}",
                settings.cols,
                settings.rows,
                clamped.cols,
                clamped.rows
            );
        }
        clamped
    }

    fn encode_frame(
        &self,
        frame: &RgbaFrame,
        settings: &Settings,
    ) -> Result<Conversion, ConvertError> {
        let (width, height) = pixel_dimensions(settings.cols, settings.rows);
        if frame.dimensions() != (width, height) {
            return Err(BufferError::Grid {
                width: frame.width(),
                height: frame.height(),
                cols: settings.cols,
                rows: settings.rows,
            }
            .into());
        }

        let start = Instant::now();
        let tone = ToneAdjust::new(settings.brightness, settings.contrast);
        let luminance = to_luminance(frame, &tone);
        let binarization = Binarization::from_dithering(settings.dithering);
        let pixels = binarization.apply(&luminance, self.threshold);
        let grid = braille::encode(&pixels, settings.cols, settings.rows)?;
        let text = grid.to_text();

        let stats = OutputStats {
            rows: settings.rows,
            cols: settings.cols,
            char_count: text.chars().count(),
            safe_char_count: safe_char_count(settings.rows, settings.cols),
        };
        log::debug!(
            "Encoded {}x{} grid ({:?}, {} ink pixels) in {:?}",
            settings.cols,
            settings.rows,
            binarization,
            pixels.count_on(),
            start.elapsed()
        );

        Ok(Conversion { text, stats })
    }
}

/// Convert `source` with the default pipeline.
pub fn convert<R>(source: &mut R, settings: &Settings) -> Result<Conversion, ConvertError>
where
    R: Rasterize + ?Sized,
{
    Pipeline::default().convert(source, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::BRAILLE_BASE;

    fn solid(rgba: [u8; 4]) -> impl FnMut(u32, u32) -> Result<RgbaFrame, RasterError> {
        move |w, h| Ok(RgbaFrame::filled(w, h, rgba))
    }

    #[test]
    fn test_white_image_is_blank_braille() {
        let settings = Settings {
            dithering: false,
            ..Settings::default()
        };
        let out = convert(&mut solid([255, 255, 255, 255]), &settings).unwrap();
        let expected = vec![BRAILLE_BASE.to_string().repeat(20); 12].join("\n");
        assert_eq!(out.text, expected);
    }

    #[test]
    fn test_black_image_is_full_braille() {
        let out = convert(&mut solid([0, 0, 0, 255]), &Settings::default()).unwrap();
        assert!(out.text.lines().all(|l| l.chars().all(|c| c == '\u{28FF}')));
        assert_eq!(out.text.lines().count(), 12);
    }

    #[test]
    fn test_stats() {
        let out = convert(&mut solid([0, 0, 0, 255]), &Settings::default()).unwrap();
        assert_eq!(out.stats.rows, 12);
        assert_eq!(out.stats.cols, 20);
        assert_eq!(out.stats.char_count, 12 * 20 + 11);
        assert_eq!(out.stats.safe_char_count, 12 * 21);
        assert!(out.stats.char_count < out.stats.safe_char_count);
    }

    #[test]
    fn test_requests_clamped_pixel_size() {
        let mut requested = None;
        let mut raster = |w: u32, h: u32| -> Result<RgbaFrame, RasterError> {
            requested = Some((w, h));
            Ok(RgbaFrame::filled(w, h, [255, 255, 255, 255]))
        };
        let settings = Settings {
            rows: 0,
            cols: 999,
            ..Settings::default()
        };
        let out = convert(&mut raster, &settings).unwrap();
        let limits = GridLimits::default();
        assert_eq!(requested, Some((limits.max_cols * 2, limits.min_rows * 4)));
        assert_eq!(out.stats.cols, limits.max_cols);
        assert_eq!(out.stats.rows, limits.min_rows);
    }

    #[test]
    fn test_wrong_size_frame_is_invalid_buffer() {
        let mut raster = |_: u32, _: u32| -> Result<RgbaFrame, RasterError> {
            Ok(RgbaFrame::filled(3, 3, [0, 0, 0, 255]))
        };
        let err = convert(&mut raster, &Settings::default()).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidBuffer(BufferError::Grid { .. })));
    }

    #[test]
    fn test_raster_failure_propagates() {
        let mut raster = |_: u32, _: u32| -> Result<RgbaFrame, RasterError> {
            Err(RasterError::EmptySource)
        };
        let err = convert(&mut raster, &Settings::default()).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedSource(RasterError::EmptySource)));
        assert!(err.to_string().starts_with("conversion failed"));
    }

    #[test]
    fn test_huge_unchecked_limits_do_not_overflow() {
        let limits = GridLimits {
            min_rows: 1,
            max_rows: u32::MAX,
            min_cols: 1,
            max_cols: u32::MAX,
        };
        let mut requested = None;
        let mut raster = |w: u32, h: u32| -> Result<RgbaFrame, RasterError> {
            requested = Some((w, h));
            Err(RasterError::EmptyTarget { width: w, height: h })
        };
        let settings = Settings {
            rows: 2_000_000_000,
            cols: 3_000_000_000,
            ..Settings::default()
        };
        let err = Pipeline::new(limits).convert(&mut raster, &settings).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedSource(_)));
        assert_eq!(requested, Some((u32::MAX, u32::MAX)));
    }

    #[test]
    fn test_convert_frame_matches_convert() {
        let settings = Settings::default();
        let frame = RgbaFrame::filled(40, 48, [90, 90, 90, 255]);
        let direct = Pipeline::default().convert_frame(&frame, &settings).unwrap();
        let via_raster = convert(&mut solid([90, 90, 90, 255]), &settings).unwrap();
        assert_eq!(direct, via_raster);
    }

    #[test]
    fn test_threshold_override() {
        let settings = Settings {
            dithering: false,
            ..Settings::default()
        };
        // Mid grey luma ~100: ink at 128, paper at 64.
        let pipeline = Pipeline::default().with_threshold(64.0);
        let out = pipeline.convert(&mut solid([100, 100, 100, 255]), &settings).unwrap();
        assert!(out.text.lines().all(|l| l.chars().all(|c| c == BRAILLE_BASE)));
    }

    #[test]
    fn test_empty_stats() {
        let stats = OutputStats::empty(12, 20);
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.safe_char_count, 252);
        assert!(stats.fits_within(252));
        assert!(!stats.fits_within(251));
    }
}
