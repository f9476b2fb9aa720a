use peniko::Color;
use peniko::color::palette;

/// Presentation options for a sentence render.
///
/// This is the whole of the interactive state (grid sliders, label checkbox,
/// line-width control) as plain data, so a GUI layer can own the widgets and
/// the core stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of grid columns. Must be at least 1.
    pub columns: usize,
    /// Minimum number of rows the viewport reserves. The grid itself grows
    /// beyond this to fit the input; it is never clipped to it.
    pub min_rows: usize,
    /// Draw each glyph's label text over its cell.
    pub show_labels: bool,
    /// Border stroke width, in canvas units (0.05 units is a 2 px line at
    /// the default scale).
    pub line_width: f64,
    /// Pixels per canvas unit (one cell is 3 units square).
    pub scale: f64,
    /// Border stroke color.
    pub border_color: Color,
    /// Label text color.
    pub label_color: Color,
    /// Label font size, in surface pixels.
    pub label_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: 6,
            min_rows: 1,
            show_labels: true,
            line_width: 0.05,
            scale: 40.0,
            border_color: palette::css::BLACK,
            label_color: palette::css::BLUE,
            label_size: 12.0,
        }
    }
}
