use crate::catalog::shape::ShapeKind;
use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use kurbo::{Arc, Circle, Ellipse, Shape as _};
use std::f64::consts::{PI, TAU};

const TOLERANCE: f64 = 0.1;

/// Which paint fills a [`ShapePart`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartFill {
    /// The shape's current color.
    Shape,
    /// The canvas background (the bite taken out of a crescent).
    Background,
}

/// One filled and outlined sub-path of a shape.
#[derive(Clone, Debug)]
pub struct ShapePart {
    /// Closed outline.
    pub path: BezPath,
    /// Fill paint.
    pub fill: PartFill,
}

/// Outline of one shape as an ordered list of parts, painted back to front.
///
/// Bar shapes (cross, plus, L, T) are two overlapping rectangles, each with its own outline.
#[derive(Clone, Debug)]
pub struct ShapeGeometry {
    /// Parts in paint order.
    pub parts: Vec<ShapePart>,
}

impl ShapeGeometry {
    fn solid(path: BezPath) -> Self {
        Self::bars(&[path])
    }

    fn bars(paths: &[BezPath]) -> Self {
        Self {
            parts: paths
                .iter()
                .map(|path| ShapePart {
                    path: path.clone(),
                    fill: PartFill::Shape,
                })
                .collect(),
        }
    }

    /// Union of the bounding boxes of all parts.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.parts
            .iter()
            .map(|p| p.path.bounding_box())
            .reduce(|a, b| a.union(b))
    }
}

/// Pixel size of a shape drawn at `scale` times `base_size`, truncated like an integer
/// raster size.
pub fn scaled_size(base_size: u32, scale: f64) -> f64 {
    (f64::from(base_size) * scale).floor().max(0.0)
}

/// Build the outline of `kind` centered at `c` with bounding size `size`.
pub fn shape_geometry(kind: ShapeKind, c: Point, size: f64) -> ShapeGeometry {
    let h = (size / 2.0).floor();
    let (x, y) = (c.x, c.y);

    match kind {
        ShapeKind::Square => ShapeGeometry::solid(rect(x - h, y - h, x + h, y + h)),
        ShapeKind::Circle => ShapeGeometry::solid(Circle::new(c, h).to_path(TOLERANCE)),
        ShapeKind::Triangle => {
            ShapeGeometry::solid(polygon(&[(x, y - h), (x - h, y + h), (x + h, y + h)]))
        }
        ShapeKind::Diamond => ShapeGeometry::solid(polygon(&[
            (x, y - h),
            (x + h, y),
            (x, y + h),
            (x - h, y),
        ])),
        ShapeKind::Pentagon => ShapeGeometry::solid(regular(c, h, 5, -PI / 2.0)),
        ShapeKind::Hexagon => ShapeGeometry::solid(regular(c, h, 6, 0.0)),
        ShapeKind::Octagon => ShapeGeometry::solid(regular(c, h, 8, 0.0)),
        ShapeKind::Rectangle => {
            let (w, hh) = ((h * 1.4).floor(), (h * 0.7).floor());
            ShapeGeometry::solid(rect(x - w, y - hh, x + w, y + hh))
        }
        ShapeKind::Oval => {
            let radii = ((h * 1.4).floor(), (h * 0.7).floor());
            ShapeGeometry::solid(Ellipse::new(c, radii, 0.0).to_path(TOLERANCE))
        }
        ShapeKind::Star => {
            let inner = h * 0.4;
            let pts: Vec<(f64, f64)> = (0..10)
                .map(|i| {
                    let r = if i % 2 == 0 { h } else { inner };
                    let a = f64::from(i) * PI / 5.0 - PI / 2.0;
                    (x + r * a.cos(), y + r * a.sin())
                })
                .collect();
            ShapeGeometry::solid(polygon(&pts))
        }
        ShapeKind::Heart => ShapeGeometry::solid(polygon(&[
            (x, y + h),
            (x - h * 0.7, y),
            (x - h * 0.3, y - h * 0.5),
            (x, y - h * 0.2),
            (x + h * 0.3, y - h * 0.5),
            (x + h * 0.7, y),
        ])),
        ShapeKind::Cross => cross(c, h, (h / 4.0).floor()),
        ShapeKind::Plus => cross(c, h, (h / 3.0).floor()),
        ShapeKind::Minus => {
            let t = (h / 4.0).floor();
            ShapeGeometry::solid(rect(x - h, y - t, x + h, y + t))
        }
        ShapeKind::Arrow => {
            let hh = (h / 2.0).floor();
            ShapeGeometry::solid(polygon(&[
                (x - h, y - hh),
                (x, y - hh),
                (x, y - h),
                (x + h, y),
                (x, y + h),
                (x, y + hh),
                (x - h, y + hh),
            ]))
        }
        ShapeKind::Trapezoid => {
            let top = (h / 2.0).floor();
            ShapeGeometry::solid(polygon(&[
                (x - top, y - h),
                (x + top, y - h),
                (x + h, y + h),
                (x - h, y + h),
            ]))
        }
        ShapeKind::Rhombus => ShapeGeometry::solid(polygon(&[
            (x, y - h),
            (x + h * 0.7, y),
            (x, y + h),
            (x - h * 0.7, y),
        ])),
        ShapeKind::Crescent => {
            let offset = (h / 3.0).floor();
            let inner = (h * 0.7).floor();
            ShapeGeometry {
                parts: vec![
                    ShapePart {
                        path: Circle::new(c, h).to_path(TOLERANCE),
                        fill: PartFill::Shape,
                    },
                    ShapePart {
                        path: Circle::new((x + offset, y), inner).to_path(TOLERANCE),
                        fill: PartFill::Background,
                    },
                ],
            }
        }
        ShapeKind::LShape => {
            let t = (h / 3.0).floor();
            ShapeGeometry::bars(&[
                rect(x - h, y - h, x - h + t, y + h),
                rect(x - h, y + h - t, x + h, y + h),
            ])
        }
        ShapeKind::TShape => {
            let t = (h / 3.0).floor();
            let s = (t / 2.0).floor();
            ShapeGeometry::bars(&[
                rect(x - h, y - h, x + h, y - h + t),
                rect(x - s, y - h, x + s, y + h),
            ])
        }
    }
}

/// Right-pointing connector arrow: shaft path and filled head.
pub fn arrow_geometry(c: Point, length: f64) -> (BezPath, BezPath) {
    let half = (length / 2.0).floor();
    let mut shaft = BezPath::new();
    shaft.move_to((c.x - half, c.y));
    shaft.line_to((c.x + half - 8.0, c.y));
    let head = polygon(&[
        (c.x + half, c.y),
        (c.x + half - 10.0, c.y - 6.0),
        (c.x + half - 10.0, c.y + 6.0),
    ]);
    (shaft, head)
}

/// Question mark placeholder of height `size` centered at `c`: stroked hook and filled dot.
pub fn question_mark_geometry(c: Point, size: f64) -> (BezPath, BezPath) {
    let r = size * 0.2;
    let hook_arc = Arc {
        center: Point::new(c.x, c.y - r),
        radii: Vec2::new(r, r),
        start_angle: PI,
        sweep_angle: 1.5 * PI,
        x_rotation: 0.0,
    };
    let mut hook = hook_arc.to_path(TOLERANCE);
    hook.line_to((c.x, c.y + size * 0.15));
    let dot = Circle::new((c.x, c.y + size * 0.35), size * 0.06).to_path(TOLERANCE);
    (hook, dot)
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        p.move_to(first);
        for &pt in iter {
            p.line_to(pt);
        }
        p.close_path();
    }
    p
}

fn regular(c: Point, r: f64, sides: u32, phase: f64) -> BezPath {
    let pts: Vec<(f64, f64)> = (0..sides)
        .map(|i| {
            let a = f64::from(i) * TAU / f64::from(sides) + phase;
            (c.x + r * a.cos(), c.y + r * a.sin())
        })
        .collect();
    polygon(&pts)
}

fn cross(c: Point, h: f64, t: f64) -> ShapeGeometry {
    let (x, y) = (c.x, c.y);
    ShapeGeometry::bars(&[
        rect(x - t, y - h, x + t, y + h),
        rect(x - h, y - t, x + h, y + t),
    ])
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    Rect::new(x0, y0, x1, y1).to_path(TOLERANCE)
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
