//! Decoded source images resampled to exact pixel sizes.
//!
//! Uses Lanczos3 filtering for high-quality downsampling. Transparent areas
//! are composited onto white before resampling, matching a white canvas
//! background.

use std::io::Cursor;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbaImage};

use super::error::RasterError;
use super::Rasterize;
use crate::braille::RgbaFrame;

/// Largest accepted input file, in bytes (8 MiB).
pub const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Formats accepted by [`ImageSource::open`] and [`ImageSource::from_bytes`].
pub const SUPPORTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

/// A decoded image, already flattened onto white, ready to be resampled.
#[derive(Debug, Clone)]
pub struct ImageSource {
    flattened: RgbaImage,
}

impl ImageSource {
    /// Read, validate and decode an image file.
    ///
    /// Files over [`MAX_FILE_SIZE`] or not in a supported format are rejected
    /// before decoding.
    pub fn open(path: &Path) -> Result<Self, RasterError> {
        let io_err = |source: std::io::Error| RasterError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        check_size(size)?;

        let bytes = std::fs::read(path).map_err(io_err)?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(&bytes)
    }

    /// Validate and decode an in-memory encoded image.
    ///
    /// An EXIF orientation tag is applied, so phone photos come out upright.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RasterError> {
        check_size(bytes.len() as u64)?;

        let format = image::guess_format(bytes).map_err(|_| RasterError::UnsupportedFormat {
            format: "unknown".to_string(),
        })?;
        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(RasterError::UnsupportedFormat {
                format: format!("{:?}", format),
            });
        }

        let mut decoder = ImageReader::with_format(Cursor::new(bytes), format).into_decoder()?;
        let orientation = decoder.orientation()?;
        let mut image = DynamicImage::from_decoder(decoder)?;
        if orientation != Orientation::NoTransforms {
            image.apply_orientation(orientation);
        }
        log::debug!(
            "Decoded {:?} image ({}x{}, {:?})",
            format,
            image.width(),
            image.height(),
            orientation
        );
        Self::from_image(image)
    }

    /// Wrap an already-decoded image.
    pub fn from_image(image: DynamicImage) -> Result<Self, RasterError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(RasterError::EmptySource);
        }
        let mut flattened = image.to_rgba8();
        flatten_onto_white(&mut flattened);
        Ok(Self { flattened })
    }

    /// Source size `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.flattened.dimensions()
    }
}

impl Rasterize for ImageSource {
    fn rasterize(&mut self, width: u32, height: u32) -> Result<RgbaFrame, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyTarget { width, height });
        }

        let (orig_w, orig_h) = self.dimensions();
        log::debug!(
            "Resampling {}x{} source to {}x{}",
            orig_w,
            orig_h,
            width,
            height
        );

        let resized = if (orig_w, orig_h) == (width, height) {
            self.flattened.clone()
        } else {
            imageops::resize(&self.flattened, width, height, FilterType::Lanczos3)
        };

        Ok(RgbaFrame::new(resized.into_raw(), width, height)?)
    }
}

fn check_size(size: u64) -> Result<(), RasterError> {
    if size > MAX_FILE_SIZE {
        return Err(RasterError::TooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}

/// Composite every pixel over opaque white, leaving alpha at 255.
fn flatten_onto_white(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let alpha = u32::from(px.0[3]);
        if alpha == 255 {
            continue;
        }
        for channel in px.0.iter_mut().take(3) {
            let blended = (u32::from(*channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            *channel = blended as u8;
        }
        px.0[3] = 255;
    }
}
