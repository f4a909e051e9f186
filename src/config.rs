//! Configuration file handling for dotart.
//!
//! Loads configuration from `~/.config/dotart/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::braille::{
    GridLimits, LimitsError, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS,
    MIN_ROWS,
};
use crate::settings::{Settings, DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, DEFAULT_DITHERING};

/// Configuration file structure for dotart.
/// Loaded from ~/.config/dotart/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub tone: ToneConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub min_rows: u32,
    pub max_rows: u32,
    pub min_cols: u32,
    pub max_cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLUMNS,
            min_rows: MIN_ROWS,
            max_rows: MAX_ROWS,
            min_cols: MIN_COLUMNS,
            max_cols: MAX_COLUMNS,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToneConfig {
    pub brightness: i32,
    pub contrast: i32,
    pub dithering: bool,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            dithering: DEFAULT_DITHERING,
        }
    }
}

/// Template written by `dotart config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# dotart configuration

[grid]
# Output size in braille characters (each covers 2x4 pixels)
rows = 12
cols = 20
# Requests outside these bounds are clamped (maximums up to 1024)
min_rows = 4
max_rows = 48
min_cols = 10
max_cols = 60

[tone]
# Brightness and contrast, -50 to 50
brightness = 0
contrast = 0
# Floyd-Steinberg dithering (false = flat threshold)
dithering = true
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or has invalid bounds.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::from_toml(&content).map_err(|e| match e {
                ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                    path: path.clone(),
                    source,
                },
                ConfigError::InvalidLimits { source, .. } => ConfigError::InvalidLimits {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;
        config.limits().map_err(|e| ConfigError::InvalidLimits {
            path: PathBuf::new(),
            source: e,
        })?;
        Ok(config)
    }

    /// Grid bounds from the `[grid]` section.
    pub fn limits(&self) -> Result<GridLimits, LimitsError> {
        GridLimits::new(
            self.grid.min_rows,
            self.grid.max_rows,
            self.grid.min_cols,
            self.grid.max_cols,
        )
    }

    /// Default settings described by this config (not yet clamped).
    pub fn settings(&self) -> Settings {
        Settings {
            rows: self.grid.rows,
            cols: self.grid.cols,
            brightness: self.tone.brightness,
            contrast: self.tone.contrast,
            dithering: self.tone.dithering,
        }
    }
}

/// Errors that can occur when loading or writing configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidLimits {
        path: PathBuf,
        source: LimitsError,
    },
    AlreadyExists {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to access config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidLimits { path, source } => {
                write!(
                    f,
                    "Invalid grid bounds in config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::AlreadyExists { path } => {
                write!(
                    f,
                    "Config file already exists: {}\n\
                     Use 'dotart config show' to view current settings.",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidLimits { source, .. } => Some(source),
            ConfigError::AlreadyExists { .. } => None,
        }
    }
}

/// Write the default config template to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let io_err = |e: std::io::Error| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(io_err)?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("dotart").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/dotart/config.toml")
        })
}
