//! Row-major grid placement of expanded glyph keys.

use kurbo::Point;

use tessera_glyphs::GlyphKey;

use crate::error::{PaintError, PaintResult};

/// Side length of one grid cell in canvas units.
pub const CELL_UNITS: f64 = 3.0;

/// One placed glyph: grid coordinates plus the key rendered there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCell {
    pub row: usize,
    pub col: usize,
    pub key: GlyphKey,
}

impl GlyphCell {
    /// Canvas origin of this cell: `(col × 3, −row × 3)`.
    ///
    /// Rows extend downward in negative y; the cell's polygons span the 3×3
    /// area above and to the right of this point.
    pub fn origin(&self) -> Point {
        cell_origin(self.row, self.col)
    }
}

pub fn cell_origin(row: usize, col: usize) -> Point {
    Point::new(col as f64 * CELL_UNITS, -(row as f64) * CELL_UNITS)
}

/// Place each key at `(index / columns, index % columns)`, top-to-bottom,
/// left-to-right.
///
/// The column count is authoritative and the row count grows to fit the
/// sequence; there is no upper capacity to overflow.
pub fn grid_cells(keys: &[GlyphKey], columns: usize) -> PaintResult<Vec<GlyphCell>> {
    if columns == 0 {
        return Err(PaintError::InvalidLayout { columns });
    }
    Ok(keys
        .iter()
        .enumerate()
        .map(|(index, key)| GlyphCell {
            row: index / columns,
            col: index % columns,
            key: key.clone(),
        })
        .collect())
}

/// Number of rows a sequence of `len` glyphs occupies at `columns` per row.
pub fn row_count(len: usize, columns: usize) -> PaintResult<usize> {
    if columns == 0 {
        return Err(PaintError::InvalidLayout { columns });
    }
    Ok(len.div_ceil(columns))
}
