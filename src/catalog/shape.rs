use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of drawable shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned square.
    Square,
    /// Upward-pointing isosceles triangle.
    Triangle,
    /// Circle.
    Circle,
    /// Square rotated 45 degrees.
    Diamond,
    /// Regular pentagon, point up.
    Pentagon,
    /// Regular hexagon, flat top.
    Hexagon,
    /// Rectangle wider than tall.
    Rectangle,
    /// Ellipse wider than tall.
    Oval,
    /// Five-pointed star.
    Star,
    /// Heart.
    Heart,
    /// Thin cross.
    Cross,
    /// Block arrow pointing right.
    Arrow,
    /// Trapezoid, wider at the bottom.
    Trapezoid,
    /// Narrow diamond.
    Rhombus,
    /// Regular octagon.
    Octagon,
    /// Crescent moon.
    Crescent,
    /// Thick cross.
    Plus,
    /// Horizontal bar.
    Minus,
    /// L-shaped bracket.
    LShape,
    /// T-shaped bracket.
    TShape,
}

impl ShapeKind {
    /// Every shape the renderer can draw.
    pub const ALL: [ShapeKind; 20] = [
        Self::Square,
        Self::Triangle,
        Self::Circle,
        Self::Diamond,
        Self::Pentagon,
        Self::Hexagon,
        Self::Rectangle,
        Self::Oval,
        Self::Star,
        Self::Heart,
        Self::Cross,
        Self::Arrow,
        Self::Trapezoid,
        Self::Rhombus,
        Self::Octagon,
        Self::Crescent,
        Self::Plus,
        Self::Minus,
        Self::LShape,
        Self::TShape,
    ];

    /// The ten shapes used when no shape list is configured.
    pub const DEFAULT_CATALOG: [ShapeKind; 10] = [
        Self::Square,
        Self::Triangle,
        Self::Circle,
        Self::Diamond,
        Self::Pentagon,
        Self::Hexagon,
        Self::Rectangle,
        Self::Oval,
        Self::Star,
        Self::Heart,
    ];

    /// Stable lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Rectangle => "rectangle",
            Self::Oval => "oval",
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Cross => "cross",
            Self::Arrow => "arrow",
            Self::Trapezoid => "trapezoid",
            Self::Rhombus => "rhombus",
            Self::Octagon => "octagon",
            Self::Crescent => "crescent",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::LShape => "l_shape",
            Self::TShape => "t_shape",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/shape.rs"]
mod tests;
