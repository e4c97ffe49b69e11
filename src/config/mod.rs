//! JSON task configuration.

/// Configuration structs and their defaults.
pub mod model;
mod task;
