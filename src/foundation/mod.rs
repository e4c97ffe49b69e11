/// Shared value types: frame indices, fps, canvas, colors, geometry re-exports.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
