//! Lay out square-code sentences and paint them by pushing drawing commands
//! into an impl [`tessera_canvas::PaintSurface`].
//!
//! The pipeline is: expand the input through the glyph catalog
//! ([`tessera_glyphs::GlyphCatalog::expand`]), place the resulting keys into
//! a row-major grid ([`grid_cells`]), then emit five polygon fills, five
//! border strokes, and an optional label per glyph ([`paint_sentence`]).
//!
//! The surface implementation is responsible for handling the commands,
//! whether that means rasterizing them or writing out a vector document.

mod error;
mod layout;
mod options;
mod render;
mod templates;

pub use error::{PaintError, PaintResult};
pub use layout::{CELL_UNITS, GlyphCell, cell_origin, grid_cells, row_count};
pub use options::RenderOptions;
pub use render::{SentencePainter, base_transform, paint_sentence, viewport_size};
