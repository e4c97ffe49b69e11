//! Frame descriptors for the two-step solution animation.

/// Board, phase and frame descriptor types.
pub mod frame;
/// Ordered descriptor generation.
pub mod sequencer;
