//! Write tessera drawing commands out as an SVG document.
//!
//! [`SvgSurface`] implements [`PaintSurface`] by appending one SVG element
//! per command; [`SvgSurface::finish`] wraps them into a standalone
//! document. Geometry stays in command-local coordinates with the command's
//! transform emitted as a `transform` attribute, so stroke widths scale with
//! the geometry exactly as they do on a raster backend.
//!
//! Only solid brushes are supported; gradient or image brushes fall back to
//! transparent.

use std::fmt::Write as _;

use kurbo::{Affine, Point, Shape, Stroke};
use peniko::{BrushRef, Color, Fill};
use peniko::color::palette;

use tessera_canvas::{DEFAULT_TOLERANCE, PaintSurface};

/// A [`PaintSurface`] that accumulates SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    /// A surface with a `width` × `height` pixel viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Assemble the accumulated elements into an SVG document.
    pub fn finish(self) -> String {
        let mut doc = String::new();
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        for element in &self.elements {
            let _ = writeln!(doc, "  {element}");
        }
        doc.push_str("</svg>\n");
        doc
    }
}

impl PaintSurface for SvgSurface {
    fn reset(&mut self) {
        self.elements.clear();
    }

    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        shape: &impl Shape,
    ) {
        let rule = match style {
            Fill::NonZero => "nonzero",
            Fill::EvenOdd => "evenodd",
        };
        self.elements.push(format!(
            r#"<path d="{d}" transform="{tf}" fill="{fill}" fill-rule="{rule}" />"#,
            d = shape.to_path(DEFAULT_TOLERANCE).to_svg(),
            tf = svg_matrix(transform),
            fill = css_color(solid_color(brush.into())),
        ));
    }

    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        shape: &impl Shape,
    ) {
        self.elements.push(format!(
            r#"<path d="{d}" transform="{tf}" fill="none" stroke="{stroke}" stroke-width="{width}" />"#,
            d = shape.to_path(DEFAULT_TOLERANCE).to_svg(),
            tf = svg_matrix(transform),
            stroke = css_color(solid_color(brush.into())),
            width = style.width,
        ));
    }

    fn draw_label(
        &mut self,
        text: &str,
        transform: Affine,
        position: Point,
        size: f64,
        color: Color,
    ) {
        // Labels annotate the geometry: the anchor point is transformed but
        // the font size stays in absolute pixels.
        let anchor = transform * position;
        self.elements.push(format!(
            r#"<text x="{x}" y="{y}" font-size="{size}" font-weight="bold" fill="{fill}" text-anchor="middle" dominant-baseline="central">{text}</text>"#,
            x = anchor.x,
            y = anchor.y,
            fill = css_color(color),
            text = xml_escape(text),
        ));
    }
}

fn solid_color(brush: BrushRef<'_>) -> Color {
    match brush {
        BrushRef::Solid(color) => color,
        other => {
            log::warn!("unsupported non-solid brush {other:?}, rendering transparent");
            palette::css::TRANSPARENT
        }
    }
}

fn svg_matrix(transform: Affine) -> String {
    let [a, b, c, d, e, f] = transform.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}

fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn finish_produces_a_document_with_the_viewport() {
        let surface = SvgSurface::new(720.0, 360.0);
        let doc = surface.finish();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"viewBox="0 0 720 360""#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn fill_and_stroke_emit_paths_with_transform_and_color() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        let rect = Rect::new(0.0, 0.0, 3.0, 3.0);
        surface.fill(
            Fill::NonZero,
            Affine::scale(40.0),
            palette::css::RED,
            &rect,
        );
        surface.stroke(
            &Stroke::new(0.05),
            Affine::scale(40.0),
            palette::css::BLACK,
            &rect,
        );

        let doc = surface.finish();
        assert!(doc.contains(r##"fill="#FF0000""##));
        assert!(doc.contains("matrix(40 0 0 40 0 0)"));
        assert!(doc.contains(r##"stroke="#000000" stroke-width="0.05""##));
    }

    #[test]
    fn labels_are_anchored_at_the_transformed_position() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.draw_label(
            "<A>",
            Affine::scale(40.0),
            Point::new(1.5, 1.5),
            12.0,
            palette::css::BLUE,
        );

        let doc = surface.finish();
        assert!(doc.contains(r#"x="60" y="60""#));
        assert!(doc.contains("&lt;A&gt;"));
        assert!(doc.contains(r#"font-size="12""#));
    }

    #[test]
    fn reset_clears_pending_elements() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            palette::css::RED,
            &Rect::new(0.0, 0.0, 1.0, 1.0),
        );
        surface.reset();
        assert!(!surface.finish().contains("<path"));
    }
}
