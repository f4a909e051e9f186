//! Braille cell encoding.
//!
//! Each braille character represents a 2x4 dot matrix, so one output
//! character covers a 2-wide by 4-tall block of the binary field.

use std::fmt;

use super::error::BufferError;
use super::frame::BinaryField;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Pixel width of one braille cell.
pub const CELL_WIDTH: u32 = 2;
/// Pixel height of one braille cell.
pub const CELL_HEIGHT: u32 = 4;

/// Dot offsets within a cell and the bit each one sets.
///
/// ```text
/// (0,0)=0x01  (1,0)=0x08
/// (0,1)=0x02  (1,1)=0x10
/// (0,2)=0x04  (1,2)=0x20
/// (0,3)=0x40  (1,3)=0x80
/// ```
pub const DOT_MAP: [(u32, u32, u8); 8] = [
    (0, 0, 0x01),
    (0, 1, 0x02),
    (0, 2, 0x04),
    (0, 3, 0x40),
    (1, 0, 0x08),
    (1, 1, 0x10),
    (1, 2, 0x20),
    (1, 3, 0x80),
];

/// Map a dot mask to its braille character (`U+2800 + mask`).
///
/// Mask 0 is the blank braille cell, not a space.
pub fn mask_to_braille(mask: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 + u32::from(mask)).unwrap_or(BRAILLE_BASE)
}

/// Dot mask of the cell whose top-left pixel is `(base_x, base_y)`.
pub fn cell_mask(field: &BinaryField, base_x: u32, base_y: u32) -> u8 {
    DOT_MAP
        .iter()
        .filter(|(dx, dy, _)| field.is_on(base_x + dx, base_y + dy))
        .fold(0u8, |mask, (_, _, bit)| mask | bit)
}

/// A `rows x cols` grid of braille characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleGrid {
    lines: Vec<String>,
    cols: u32,
}

impl BrailleGrid {
    /// One string per row, each exactly `cols` characters.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn rows(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Rows joined by `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for BrailleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Encode a binary field as a `cols x rows` braille grid.
///
/// The field must be exactly `cols * 2` pixels wide and `rows * 4` pixels
/// tall so that every pixel lands in exactly one cell.
pub fn encode(field: &BinaryField, cols: u32, rows: u32) -> Result<BrailleGrid, BufferError> {
    let fits = u64::from(field.width()) == u64::from(cols) * u64::from(CELL_WIDTH)
        && u64::from(field.height()) == u64::from(rows) * u64::from(CELL_HEIGHT);
    if !fits {
        return Err(BufferError::Grid {
            width: field.width(),
            height: field.height(),
            cols,
            rows,
        });
    }

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let base_y = row * CELL_HEIGHT;
        let line: String = (0..cols)
            .map(|col| mask_to_braille(cell_mask(field, col * CELL_WIDTH, base_y)))
            .collect();
        lines.push(line);
    }

    Ok(BrailleGrid { lines, cols })
}
