//! Grid bounds and the mapping from character grid to pixel size.

use super::cell::{CELL_HEIGHT, CELL_WIDTH};

/// Default output rows (mobile comment friendly).
pub const DEFAULT_ROWS: u32 = 12;
/// Default output columns (mobile comment friendly).
pub const DEFAULT_COLUMNS: u32 = 20;

pub const MIN_ROWS: u32 = 4;
pub const MAX_ROWS: u32 = 48;
pub const MIN_COLUMNS: u32 = 10;
pub const MAX_COLUMNS: u32 = 60;

/// Largest configurable row or column count. Keeps the rasterized frame
/// (at most 2048x4096 pixels) well inside `u32` and memory.
pub const MAX_GRID_EXTENT: u32 = 1024;

/// Comment and terminal glyphs are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Inclusive bounds on the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    pub min_rows: u32,
    pub max_rows: u32,
    pub min_cols: u32,
    pub max_cols: u32,
}

/// Rejected grid bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitsError {
    #[error("{axis} minimum must be at least 1")]
    ZeroMinimum { axis: &'static str },

    #[error("{axis} minimum {min} is greater than maximum {max}")]
    Inverted {
        axis: &'static str,
        min: u32,
        max: u32,
    },

    #[error("{axis} maximum {max} exceeds the limit of {limit}")]
    TooLarge {
        axis: &'static str,
        max: u32,
        limit: u32,
    },
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            min_rows: MIN_ROWS,
            max_rows: MAX_ROWS,
            min_cols: MIN_COLUMNS,
            max_cols: MAX_COLUMNS,
        }
    }
}

impl GridLimits {
    /// Build limits, requiring `1 <= min <= max <= MAX_GRID_EXTENT` on both axes.
    pub fn new(
        min_rows: u32,
        max_rows: u32,
        min_cols: u32,
        max_cols: u32,
    ) -> Result<Self, LimitsError> {
        check_axis("rows", min_rows, max_rows)?;
        check_axis("cols", min_cols, max_cols)?;
        Ok(Self {
            min_rows,
            max_rows,
            min_cols,
            max_cols,
        })
    }

    /// Clamp a requested row count into bounds.
    pub fn clamp_rows(&self, rows: u32) -> u32 {
        rows.max(self.min_rows).min(self.max_rows)
    }

    /// Clamp a requested column count into bounds.
    pub fn clamp_cols(&self, cols: u32) -> u32 {
        cols.max(self.min_cols).min(self.max_cols)
    }

    /// Clamp `(rows, cols)` into bounds.
    pub fn clamp(&self, rows: u32, cols: u32) -> (u32, u32) {
        (self.clamp_rows(rows), self.clamp_cols(cols))
    }

    pub fn contains(&self, rows: u32, cols: u32) -> bool {
        (self.min_rows..=self.max_rows).contains(&rows)
            && (self.min_cols..=self.max_cols).contains(&cols)
    }
}

fn check_axis(axis: &'static str, min: u32, max: u32) -> Result<(), LimitsError> {
    if min == 0 {
        return Err(LimitsError::ZeroMinimum { axis });
    }
    if min > max {
        return Err(LimitsError::Inverted { axis, min, max });
    }
    if max > MAX_GRID_EXTENT {
        return Err(LimitsError::TooLarge {
            axis,
            max,
            limit: MAX_GRID_EXTENT,
        });
    }
    Ok(())
}

/// Pixel size `(width, height)` for a `cols x rows` braille grid.
///
/// Saturates at `u32::MAX` for grids outside any valid [`GridLimits`].
pub fn pixel_dimensions(cols: u32, rows: u32) -> (u32, u32) {
    (cols.saturating_mul(CELL_WIDTH), rows.saturating_mul(CELL_HEIGHT))
}

/// Row count that keeps the source aspect ratio for a fixed column count.
///
/// A braille cell is 2x4 dots and a glyph is about `char_aspect` times taller
/// than wide, so one row spans `char_aspect` columns' worth of height.
/// Returns at least 1; callers still clamp the result into [`GridLimits`].
pub fn rows_for_aspect(img_width: u32, img_height: u32, cols: u32, char_aspect: f32) -> u32 {
    if img_width == 0 || img_height == 0 || cols == 0 || char_aspect <= 0.0 {
        return 1;
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let target_char_aspect = img_aspect * char_aspect;
    let rows = (cols as f32 / target_char_aspect).round();

    if rows < 1.0 {
        1
    } else if rows > u32::MAX as f32 {
        u32::MAX
    } else {
        rows as u32
    }
}
