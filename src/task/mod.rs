//! Task assembly: prompt, still images, solution video and the on-disk layout.

/// Task generation and dataset output.
pub mod generator;
/// Prompt families.
pub mod prompt;
