//! 2D drawing-surface abstraction for the tessera renderer.
//!
//! A [`PaintSurface`] receives fill, stroke, and label drawing commands and is
//! responsible for handling them. Generally this will involve executing them to
//! draw a rasterized image or a vector document, but an implementation may also
//! choose to keep the commands in raw form for later use; see
//! [`CommandRecorder`] for an implementation that does exactly that.
//!
//! Geometry is expressed with [`kurbo`] types and paint sources with [`peniko`]
//! brushes, so any backend in that ecosystem can implement the trait directly.

mod record;

pub use record::{CommandRecorder, PaintCommand};

pub use kurbo;
pub use peniko;

use kurbo::{Affine, Point, Shape, Stroke};
use peniko::{BrushRef, Color, Fill};

/// Flattening tolerance used when a backend needs to convert an abstract
/// [`Shape`] into a concrete path.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// A surface that 2D drawing commands can be pushed into.
pub trait PaintSurface {
    /// Discard everything drawn so far, returning the surface to its
    /// just-created state.
    fn reset(&mut self);

    /// Fill `shape`, transformed by `transform`, with `brush`.
    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        shape: &impl Shape,
    );

    /// Stroke the outline of `shape`, transformed by `transform`, with `brush`.
    ///
    /// The stroke width in `style` is in pre-transform units: backends scale it
    /// together with the geometry.
    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        shape: &impl Shape,
    );

    /// Draw a short piece of label text centered on `position`.
    ///
    /// `position` is transformed by `transform`, but `size` is an absolute
    /// font size in surface pixels: labels annotate geometry rather than
    /// belonging to it, so they keep a constant on-screen size.
    fn draw_label(
        &mut self,
        text: &str,
        transform: Affine,
        position: Point,
        size: f64,
        color: Color,
    );
}
