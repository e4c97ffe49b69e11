//! Random task instances.

/// Sample, slot and shape-state types.
pub mod model;
/// Seeded sampling with optional duplicate avoidance.
pub mod sampler;
