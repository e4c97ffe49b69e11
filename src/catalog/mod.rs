//! Shapes, named colors and scales, and the transformation catalog built from them.

/// Named colors and scales with their defaults.
pub mod palette;
/// The fixed shape enumeration.
pub mod shape;
/// Color/scale pairs and the validated [`Catalog`](transform::Catalog).
pub mod transform;
