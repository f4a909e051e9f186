//! CLI error type

use std::path::PathBuf;

use crate::braille::LimitsError;
use crate::config::ConfigError;
use crate::pipeline::ConvertError;
use crate::raster::RasterError;

/// Everything that can stop a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("No image given. Run `dotart <IMAGE>` or see `dotart --help`.")]
    MissingImage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid grid bounds: {0}")]
    Limits(#[from] LimitsError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
