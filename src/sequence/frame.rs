use crate::catalog::shape::ShapeKind;
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::sample::model::{Sample, ShapeState, Slot};
use serde::Serialize;

/// Content of one board panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Cell {
    /// A drawn shape.
    Shape(ShapeState),
    /// An unresolved answer, drawn as a question mark.
    Unknown,
}

/// All six panels of one frame, indexed by [`Slot`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: [Cell; 6],
}

impl Board {
    /// Board with every slot resolved from `sample`.
    pub fn resolved(sample: &Sample) -> Self {
        Self {
            cells: Slot::ALL.map(|s| Cell::Shape(sample.state(s))),
        }
    }

    /// Board as presented to the solver: example row and D shown, E and F unknown.
    pub fn question(sample: &Sample) -> Self {
        Self::resolved(sample)
            .with(Slot::E, Cell::Unknown)
            .with(Slot::F, Cell::Unknown)
    }

    /// Return a copy with `slot` replaced.
    pub fn with(mut self, slot: Slot, cell: Cell) -> Self {
        self.cells[slot.index()] = cell;
        self
    }

    /// Content of `slot`.
    pub fn get(&self, slot: Slot) -> Cell {
        self.cells[slot.index()]
    }

    /// Iterate `(slot, cell)` in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Cell)> + '_ {
        Slot::ALL.into_iter().zip(self.cells.iter().copied())
    }
}

/// Which part of the animation a frame belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Static opening frame with both answers unknown.
    Setup,
    /// First step: the first unknown changes color.
    Color,
    /// Second step: the second unknown changes scale.
    Scale,
    /// Static closing frame with both answers resolved.
    Final,
}

impl Phase {
    /// `true` for the setup and final frames.
    pub fn is_static(self) -> bool {
        matches!(self, Phase::Setup | Phase::Final)
    }
}

/// Everything needed to render one frame.
///
/// `shape`, `color` and `scale` describe the panel at `slot`, the one the animation is
/// currently focused on. `board` carries the full panel set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameDescriptor {
    /// Position in the sequence.
    pub index: FrameIndex,
    /// Phase this frame belongs to.
    pub phase: Phase,
    /// Step within the phase (always 0 for static frames).
    pub step: u32,
    /// Interpolation parameter after easing, in `[0, 1]`.
    pub progress: f64,
    /// Focus panel.
    pub slot: Slot,
    /// Focus shape.
    pub shape: ShapeKind,
    /// Focus fill color.
    pub color: Rgb8,
    /// Focus scale factor.
    pub scale: f64,
    /// All panels.
    pub board: Board,
}

impl FrameDescriptor {
    /// The focus panel as a [`ShapeState`].
    pub fn focus(&self) -> ShapeState {
        ShapeState {
            shape: self.shape,
            color: self.color,
            scale: self.scale,
        }
    }
}
