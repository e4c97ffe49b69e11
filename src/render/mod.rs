//! Rasterization of board frames.

/// Frame buffer type and renderer trait.
pub mod backend;
/// `vello_cpu` renderer.
pub mod cpu;
/// Shape, arrow and question mark outlines.
pub mod shapes;
