//! A [`PaintSurface`] that stores the commands pushed into it as plain data.

use kurbo::{Affine, BezPath, Point, Shape, Stroke};
use peniko::{Brush, BrushRef, Color, Fill};

use crate::{DEFAULT_TOLERANCE, PaintSurface};

/// One recorded drawing command.
///
/// Shapes are flattened to [`BezPath`] and brushes resolved to owned
/// [`Brush`] values so that a recording is self-contained.
#[derive(Debug, Clone)]
pub enum PaintCommand {
    Reset,
    Fill {
        style: Fill,
        transform: Affine,
        brush: Brush,
        path: BezPath,
    },
    Stroke {
        style: Stroke,
        transform: Affine,
        brush: Brush,
        path: BezPath,
    },
    Label {
        text: String,
        transform: Affine,
        position: Point,
        size: f64,
        color: Color,
    },
}

/// Records drawing commands in submission order instead of executing them.
///
/// Useful for serializing a scene, for driving a backend that is not
/// available at paint time, and for asserting on painter output in tests.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<PaintCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in submission order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PaintCommand> {
        self.commands
    }
}

impl PaintSurface for CommandRecorder {
    fn reset(&mut self) {
        self.commands.clear();
        self.commands.push(PaintCommand::Reset);
    }

    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        shape: &impl Shape,
    ) {
        self.commands.push(PaintCommand::Fill {
            style,
            transform,
            brush: brush.into().to_owned(),
            path: shape.to_path(DEFAULT_TOLERANCE),
        });
    }

    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        shape: &impl Shape,
    ) {
        self.commands.push(PaintCommand::Stroke {
            style: style.clone(),
            transform,
            brush: brush.into().to_owned(),
            path: shape.to_path(DEFAULT_TOLERANCE),
        });
    }

    fn draw_label(
        &mut self,
        text: &str,
        transform: Affine,
        position: Point,
        size: f64,
        color: Color,
    ) {
        self.commands.push(PaintCommand::Label {
            text: text.to_string(),
            transform,
            position,
            size,
            color,
        });
    }
}
