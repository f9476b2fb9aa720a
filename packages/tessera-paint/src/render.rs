//! The sentence painter: turns placed glyphs into fill/stroke/label commands.

use kurbo::{Affine, Point, Size, Stroke, Vec2};
use peniko::Fill;

use tessera_canvas::PaintSurface;
use tessera_glyphs::{Glyph, GlyphCatalog, GlyphKey};

use crate::error::PaintResult;
use crate::layout::{CELL_UNITS, GlyphCell, grid_cells, row_count};
use crate::options::RenderOptions;
use crate::templates::{case_polygons, polygon_path};

/// Center of a cell, in cell-local coordinates.
const LABEL_ANCHOR: Point = Point::new(1.5, 1.5);

/// The canvas-units → surface-pixels mapping.
///
/// Canvas coordinates put row 0's top edge at y = 3 and grow rows downward
/// in negative y; surfaces have y growing downward from the top-left corner.
/// This transform flips y, shifts the top edge to 0, and scales by `scale`
/// pixels per unit.
pub fn base_transform(scale: f64) -> Affine {
    Affine::FLIP_Y
        .then_translate(Vec2::new(0.0, CELL_UNITS))
        .then_scale(scale)
}

/// Pixel size of the viewport for `glyph_count` glyphs under `options`.
///
/// The height covers `max(rows needed, options.min_rows)`: the grid always
/// grows to fit the input, and `min_rows` only reserves extra blank extent.
pub fn viewport_size(glyph_count: usize, options: &RenderOptions) -> PaintResult<Size> {
    let rows = row_count(glyph_count, options.columns)?.max(options.min_rows);
    Ok(Size::new(
        options.columns as f64 * CELL_UNITS * options.scale,
        rows as f64 * CELL_UNITS * options.scale,
    ))
}

/// Paints expanded sentences into a [`PaintSurface`].
///
/// Holds only borrowed, read-only inputs; every call rebuilds the layout
/// from scratch.
pub struct SentencePainter<'a> {
    catalog: &'a GlyphCatalog,
    options: &'a RenderOptions,
}

impl<'a> SentencePainter<'a> {
    pub fn new(catalog: &'a GlyphCatalog, options: &'a RenderOptions) -> Self {
        Self { catalog, options }
    }

    /// Expand `text` and paint it, returning the computed placements.
    pub fn paint(
        &self,
        surface: &mut impl PaintSurface,
        text: &str,
    ) -> PaintResult<Vec<GlyphCell>> {
        let keys = self.catalog.expand(text)?;
        self.paint_keys(surface, &keys)
    }

    /// Paint an already-expanded key sequence.
    pub fn paint_keys(
        &self,
        surface: &mut impl PaintSurface,
        keys: &[GlyphKey],
    ) -> PaintResult<Vec<GlyphCell>> {
        let cells = grid_cells(keys, self.options.columns)?;
        log::debug!(
            "painting {} glyphs into {} columns",
            cells.len(),
            self.options.columns
        );

        surface.reset();
        let base = base_transform(self.options.scale);
        for cell in &cells {
            let glyph = self.catalog.glyph(&cell.key)?;
            let transform = base * Affine::translate(cell.origin().to_vec2());
            self.paint_glyph(surface, glyph, transform);
        }
        Ok(cells)
    }

    fn paint_glyph(&self, surface: &mut impl PaintSurface, glyph: &Glyph, transform: Affine) {
        let border = Stroke::new(self.options.line_width);
        for (index, polygon) in case_polygons(glyph.case).iter().enumerate() {
            let path = polygon_path(polygon);
            surface.fill(Fill::NonZero, transform, glyph.fill_color(index), &path);
            surface.stroke(&border, transform, self.options.border_color, &path);
        }
        if self.options.show_labels {
            surface.draw_label(
                &glyph.label,
                transform,
                LABEL_ANCHOR,
                self.options.label_size,
                self.options.label_color,
            );
        }
    }
}

/// Expand `text` against `catalog` and paint it into `surface`.
///
/// Convenience wrapper over [`SentencePainter`]; returns the glyph
/// placements that were drawn, in render order.
pub fn paint_sentence(
    surface: &mut impl PaintSurface,
    catalog: &GlyphCatalog,
    text: &str,
    options: &RenderOptions,
) -> PaintResult<Vec<GlyphCell>> {
    SentencePainter::new(catalog, options).paint(surface, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_transform_maps_the_first_cell_to_the_top_left() {
        let base = base_transform(40.0);
        // Top-left corner of row 0: canvas (0, 3) → pixel origin.
        assert_eq!(base * Point::new(0.0, 3.0), Point::new(0.0, 0.0));
        // Bottom-right of the first cell.
        assert_eq!(base * Point::new(3.0, 0.0), Point::new(120.0, 120.0));
        // Row 1 starts one cell further down.
        assert_eq!(base * Point::new(0.0, -3.0), Point::new(0.0, 240.0));
    }

    #[test]
    fn viewport_grows_with_the_input_and_respects_min_rows() {
        let options = RenderOptions {
            columns: 6,
            min_rows: 2,
            ..RenderOptions::default()
        };
        // 14 glyphs at 6 per row need 3 rows.
        assert_eq!(
            viewport_size(14, &options).unwrap(),
            Size::new(720.0, 360.0)
        );
        // 3 glyphs need 1 row, but min_rows reserves 2.
        assert_eq!(viewport_size(3, &options).unwrap(), Size::new(720.0, 240.0));
    }
}
