//! CLI enum types.

use clap::ValueEnum;

/// How the conversion result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Braille text only
    #[default]
    Text,
    /// JSON object with the text and size stats
    Json,
}
