//! High-level API for rendering square-code glyph grids.
//!
//! Square code draws each letter, digit, punctuation mark, or Vietnamese
//! diacritic as a 3×3 square split into five colored polygons. This crate
//! ties the pipeline together behind one call: catalog lookup and
//! decomposition from [`tessera_glyphs`], grid layout and painting from
//! [`tessera_paint`], and the SVG backend from [`tessera_svg`].
//!
//! ```
//! use tessera::{RenderOptions, render_svg};
//!
//! let svg = render_svg("XIN CHÀO", &RenderOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), tessera::Error>(())
//! ```
//!
//! For other backends, implement [`PaintSurface`] and drive
//! [`paint_sentence`] directly.

use thiserror::Error;

pub use tessera_canvas::{CommandRecorder, PaintCommand, PaintSurface};
pub use tessera_glyphs::{Case, Glyph, GlyphCatalog, GlyphError, GlyphKey};
pub use tessera_paint::{
    CELL_UNITS, GlyphCell, PaintError, RenderOptions, SentencePainter, grid_cells,
    paint_sentence, viewport_size,
};
pub use tessera_svg::SvgSurface;

/// Top-level error for the one-call rendering API.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error(transparent)]
    Paint(#[from] PaintError),
}

/// Render `text` as a square-code grid and return the SVG document.
///
/// Expands against the built-in catalog, sizes the viewport to the grid
/// (growing rows as needed, never clipping), and paints into an
/// [`SvgSurface`]. An empty input produces a valid document with no glyphs.
pub fn render_svg(text: &str, options: &RenderOptions) -> Result<String, Error> {
    let catalog = GlyphCatalog::builtin();
    let keys = catalog.expand(text)?;
    let size = viewport_size(keys.len(), options)?;

    let mut surface = SvgSurface::new(size.width, size.height);
    SentencePainter::new(catalog, options).paint_keys(&mut surface, &keys)?;
    Ok(surface.finish())
}
