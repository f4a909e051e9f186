//! End-to-end tests: image files on disk through to braille text.

use clap::Parser;
use dotart::cli::{render_output, run_convert, Args, OutputFormat};
use dotart::config::Config;
use dotart::raster::{ImageSource, RasterError, Rasterize, MAX_FILE_SIZE};
use dotart::{convert, ConvertError, Settings};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_image(dir: &Path, name: &str, img: &RgbaImage, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    match format {
        ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(img.clone())
            .to_rgb8()
            .save_with_format(&path, format)
            .unwrap(),
        _ => img.save_with_format(&path, format).unwrap(),
    }
    path
}

/// Left half black, right half white.
fn split_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

#[test]
fn test_png_split_image() {
    let dir = TempDir::new().unwrap();
    let path = write_image(dir.path(), "split.png", &split_image(400, 240), ImageFormat::Png);

    let mut source = ImageSource::open(&path).unwrap();
    let settings = Settings {
        dithering: false,
        ..Settings::default()
    };
    let out = convert(&mut source, &settings).unwrap();

    assert_eq!(out.stats.rows, 12);
    assert_eq!(out.stats.cols, 20);
    for line in out.text.lines() {
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars.len(), 20);
        // Well away from the edge the halves are solid
        assert!(chars[..8].iter().all(|&c| c == '\u{28FF}'), "line {line}");
        assert!(chars[12..].iter().all(|&c| c == '\u{2800}'), "line {line}");
    }
}

#[test]
fn test_jpeg_black_image() {
    let dir = TempDir::new().unwrap();
    let img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
    let path = write_image(dir.path(), "black.jpg", &img, ImageFormat::Jpeg);

    let mut source = ImageSource::open(&path).unwrap();
    let out = convert(&mut source, &Settings::default()).unwrap();
    assert!(out.text.chars().all(|c| c == '\u{28FF}' || c == '\n'));
}

#[test]
fn test_transparent_png_renders_blank() {
    let dir = TempDir::new().unwrap();
    let img = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 0]));
    let path = write_image(dir.path(), "clear.png", &img, ImageFormat::Png);

    let mut source = ImageSource::open(&path).unwrap();
    let out = convert(&mut source, &Settings::default()).unwrap();
    assert!(out.text.chars().all(|c| c == '\u{2800}' || c == '\n'));
}

#[test]
fn test_rasterizer_output_is_white_filled_and_exact() {
    let img = RgbaImage::from_pixel(3, 3, Rgba([10, 10, 10, 0]));
    let mut source = ImageSource::from_image(image::DynamicImage::ImageRgba8(img)).unwrap();
    let frame = source.rasterize(8, 12).unwrap();
    assert_eq!(frame.dimensions(), (8, 12));
    assert!(frame.pixels().all(|px| px[3] == 255 && px[..3].iter().all(|&c| c >= 250)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ImageSource::open(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, RasterError::Io { .. }));
}

#[test]
fn test_oversize_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huge.png");
    std::fs::write(&path, vec![0u8; (MAX_FILE_SIZE + 1) as usize]).unwrap();
    let err = ImageSource::open(&path).unwrap_err();
    assert!(matches!(err, RasterError::TooLarge { .. }));
}

#[test]
fn test_non_image_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.png");
    std::fs::write(&path, "just some text").unwrap();
    let err = ImageSource::open(&path).unwrap_err();
    assert!(matches!(err, RasterError::UnsupportedFormat { .. }));
}

#[test]
fn test_raster_error_surfaces_as_conversion_failure() {
    let mut failing = |_: u32, _: u32| -> Result<dotart::braille::RgbaFrame, RasterError> {
        Err(RasterError::EmptySource)
    };
    let err = convert(&mut failing, &Settings::default()).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedSource(_)));
}

#[test]
fn test_json_output_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_image(dir.path(), "split.png", &split_image(80, 80), ImageFormat::Png);
    let mut source = ImageSource::open(&path).unwrap();
    let out = convert(&mut source, &Settings::default()).unwrap();

    let json = render_output(&out, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["text"], out.text);
    assert_eq!(value["rows"], 12);
    assert_eq!(value["cols"], 20);
    assert_eq!(value["charCount"], out.stats.char_count);
    assert_eq!(value["safeCharCount"], 252);
}

#[test]
fn test_cli_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let image = write_image(dir.path(), "in.png", &split_image(120, 120), ImageFormat::Png);
    let output = dir.path().join("out.txt");

    let args = Args::parse_from([
        "dotart",
        image.to_str().unwrap(),
        "--cols",
        "16",
        "--rows",
        "5",
        "--no-dither",
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    run_convert(&args, &Config::default()).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.ends_with('\n'));
    let lines: Vec<&str> = written.trim_end_matches('\n').split('\n').collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.chars().count() == 16));
}

#[test]
fn test_cli_fit_uses_aspect_ratio() {
    let dir = TempDir::new().unwrap();
    // 2:1 wide image, 40 cols -> 40 / (2 * 2) = 10 rows
    let image = write_image(dir.path(), "wide.png", &split_image(200, 100), ImageFormat::Png);
    let output = dir.path().join("out.txt");

    let args = Args::parse_from([
        "dotart",
        image.to_str().unwrap(),
        "--cols",
        "40",
        "--fit",
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    run_convert(&args, &Config::default()).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.trim_end_matches('\n').split('\n').count(), 10);
}

#[test]
fn test_cli_config_defaults_applied() {
    let dir = TempDir::new().unwrap();
    let image = write_image(dir.path(), "in.png", &split_image(60, 60), ImageFormat::Png);
    let output = dir.path().join("out.txt");
    let config = Config::from_toml("[grid]\nrows = 6\ncols = 12\n").unwrap();

    let args = Args::parse_from([
        "dotart",
        image.to_str().unwrap(),
        "-q",
        "-o",
        output.to_str().unwrap(),
    ]);
    run_convert(&args, &config).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.trim_end_matches('\n').split('\n').collect();
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.chars().count() == 12));
}
