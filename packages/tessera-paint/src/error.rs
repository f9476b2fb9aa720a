use thiserror::Error;

use tessera_glyphs::GlyphError;

/// Errors raised while laying out or painting a sentence.
#[derive(Debug, Error)]
pub enum PaintError {
    /// The grid needs at least one column.
    #[error("column count must be at least 1, got {columns}")]
    InvalidLayout { columns: usize },

    /// Expansion or key resolution against the glyph catalog failed.
    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

/// Result type alias for layout and paint operations.
pub type PaintResult<T> = Result<T, PaintError>;
