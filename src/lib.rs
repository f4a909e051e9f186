//! dotart library crate.
//!
//! Converts raster images into grids of Unicode braille characters for
//! pasting into plain-text contexts. The modules are exposed for the binary
//! and for integration testing.

pub mod braille;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod raster;
pub mod settings;

pub use pipeline::{convert, Conversion, ConvertError, OutputStats, Pipeline};
pub use raster::{ImageSource, Rasterize, RasterError};
pub use settings::{Settings, SettingsUpdate};
