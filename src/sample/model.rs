use crate::catalog::shape::ShapeKind;
use crate::catalog::transform::TransformationSpec;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{TwostepError, TwostepResult};
use serde::Serialize;

/// Example and question shapes. The two always differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ShapePair {
    /// Shape of the example row (A, B, C).
    pub example: ShapeKind,
    /// Shape of the question row (D, E, F).
    pub question: ShapeKind,
}

/// One of the six panels on the board.
///
/// `A B C` is the example row, `D E F` the question row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Slot {
    /// Example, original.
    A,
    /// Example after the color step.
    B,
    /// Example after both steps.
    C,
    /// Question, original.
    D,
    /// Question after the color step (first unknown).
    E,
    /// Question after both steps (second unknown).
    F,
}

impl Slot {
    /// All slots in board order.
    pub const ALL: [Slot; 6] = [Slot::A, Slot::B, Slot::C, Slot::D, Slot::E, Slot::F];

    /// Position in [`Slot::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Board row: 0 for the example row, 1 for the question row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Board column: 0 = original, 1 = after color step, 2 = after scale step.
    pub fn column(self) -> usize {
        self.index() % 3
    }
}

/// A shape drawn in a given color at a given scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShapeState {
    /// Which outline to draw.
    pub shape: ShapeKind,
    /// Fill color.
    pub color: Rgb8,
    /// Multiplier of the configured base shape size.
    pub scale: f64,
}

/// One complete task instance. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    shapes: ShapePair,
    transformation: TransformationSpec,
}

impl Sample {
    /// Build a sample, rejecting identical example and question shapes.
    pub fn new(shapes: ShapePair, transformation: TransformationSpec) -> TwostepResult<Self> {
        if shapes.example == shapes.question {
            return Err(TwostepError::config(format!(
                "example and question shapes must differ (both '{}')",
                shapes.example
            )));
        }
        Ok(Self {
            shapes,
            transformation,
        })
    }

    pub(crate) fn from_parts(shapes: ShapePair, transformation: TransformationSpec) -> Self {
        debug_assert_ne!(shapes.example, shapes.question);
        Self {
            shapes,
            transformation,
        }
    }

    /// Example and question shapes.
    pub fn shapes(&self) -> ShapePair {
        self.shapes
    }

    /// The color-then-scale transformation shared by both rows.
    pub fn transformation(&self) -> &TransformationSpec {
        &self.transformation
    }

    /// Resolved state of `slot`.
    ///
    /// Column 0 is the start state, column 1 has the end color at the start scale, column 2 has
    /// the end color at the end scale.
    pub fn state(&self, slot: Slot) -> ShapeState {
        let t = &self.transformation;
        let shape = if slot.row() == 0 {
            self.shapes.example
        } else {
            self.shapes.question
        };
        let (color, scale) = match slot.column() {
            0 => (t.start_color(), t.start_scale()),
            1 => (t.end_color(), t.start_scale()),
            _ => (t.end_color(), t.end_scale()),
        };
        ShapeState {
            shape,
            color,
            scale,
        }
    }

    /// Human-readable summary of the transformation.
    pub fn description(&self) -> String {
        self.transformation.description()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/model.rs"]
mod tests;
