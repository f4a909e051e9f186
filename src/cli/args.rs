//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::OutputFormat;
use crate::settings::SettingsUpdate;

/// Convert an image into braille dot art for pasting into comments
#[derive(Parser, Debug)]
#[command(name = "dotart")]
#[command(version, about = "Convert images to braille dot art text", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXAMPLES:
    # Default 20x12 output
    dotart photo.png

    # Wider, brighter, no dithering
    dotart photo.jpg --cols 40 --brightness 15 --no-dither

    # Pick rows from the image aspect ratio and save to a file
    dotart photo.png --cols 30 --fit -o art.txt

    # Text plus size stats as JSON
    dotart photo.png --format json")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert (PNG or JPEG, up to 8 MiB)
    pub image: Option<PathBuf>,

    /// Output rows (clamped to the configured bounds)
    #[arg(short, long)]
    pub rows: Option<u32>,

    /// Output columns (clamped to the configured bounds)
    #[arg(short, long)]
    pub cols: Option<u32>,

    /// Brightness, -50 to 50
    #[arg(short, long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast, -50 to 50
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub contrast: Option<i32>,

    /// Use Floyd-Steinberg dithering
    #[arg(long, overrides_with = "no_dither")]
    pub dither: bool,

    /// Use a flat threshold instead of dithering
    #[arg(long, overrides_with = "dither")]
    pub no_dither: bool,

    /// Choose rows from the image aspect ratio (ignored when --rows is given)
    #[arg(long)]
    pub fit: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Don't print size stats to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// The dithering choice from `--dither` / `--no-dither`, if any.
    pub fn dithering(&self) -> Option<bool> {
        if self.dither {
            Some(true)
        } else if self.no_dither {
            Some(false)
        } else {
            None
        }
    }

    /// Settings overrides given on the command line.
    pub fn settings_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            rows: self.rows,
            cols: self.cols,
            brightness: self.brightness,
            contrast: self.contrast,
            dithering: self.dithering(),
        }
    }
}
