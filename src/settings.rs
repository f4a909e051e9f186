//! Conversion settings and their defaults.

use crate::braille::{GridLimits, DEFAULT_COLUMNS, DEFAULT_ROWS, TONE_MAX, TONE_MIN};

pub const DEFAULT_BRIGHTNESS: i32 = 0;
pub const DEFAULT_CONTRAST: i32 = 0;
pub const DEFAULT_DITHERING: bool = true;

/// User-facing knobs for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub rows: u32,
    pub cols: u32,
    /// Brightness shift, -50..=50
    pub brightness: i32,
    /// Contrast, -50..=50
    pub contrast: i32,
    /// Floyd-Steinberg dithering instead of a flat threshold
    pub dithering: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLUMNS,
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            dithering: DEFAULT_DITHERING,
        }
    }
}

/// A partial change to [`Settings`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub rows: Option<u32>,
    pub cols: Option<u32>,
    pub brightness: Option<i32>,
    pub contrast: Option<i32>,
    pub dithering: Option<bool>,
}

impl Settings {
    /// Copy with rows/cols clamped into `limits` and tone into -50..=50.
    pub fn clamped(&self, limits: &GridLimits) -> Self {
        let (rows, cols) = limits.clamp(self.rows, self.cols);
        Self {
            rows,
            cols,
            brightness: self.brightness.clamp(TONE_MIN, TONE_MAX),
            contrast: self.contrast.clamp(TONE_MIN, TONE_MAX),
            dithering: self.dithering,
        }
    }

    /// Merge `update` into these settings, then re-clamp.
    pub fn apply(&self, update: SettingsUpdate, limits: &GridLimits) -> Self {
        let merged = Self {
            rows: update.rows.unwrap_or(self.rows),
            cols: update.cols.unwrap_or(self.cols),
            brightness: update.brightness.unwrap_or(self.brightness),
            contrast: update.contrast.unwrap_or(self.contrast),
            dithering: update.dithering.unwrap_or(self.dithering),
        };
        merged.clamped(limits)
    }

    /// Back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
