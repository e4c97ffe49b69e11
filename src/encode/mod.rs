//! Output writers.
//!
//! Video sinks consume rendered frames in index order; still frames are written as PNG.

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// PNG still images.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// Sequence-to-sink driver with held bookend frames.
pub mod video;
