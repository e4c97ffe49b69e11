//! Twostep generates two-step visual analogy tasks.
//!
//! Each task shows a board `A → B → C :: D → ? → ?`: the example shape changes color, then
//! scale, and the solver must apply the same two steps to the question shape. Output per task:
//!
//! - a prompt and the question/solution boards as PNG
//! - a JSON metadata record
//! - optionally an MP4 that animates the color step, then the scale step
//!
//! The pipeline is [`TaskConfig`] → [`Catalog`] → [`Sampler`] → [`FrameSequence`] →
//! [`CpuRenderer`] → [`FrameSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves.
pub mod animation;
pub mod catalog;
pub mod config;
/// Output writers (PNG, MP4 sinks).
pub mod encode;
mod foundation;
/// Board geometry.
pub mod layout;
pub mod render;
pub mod sample;
pub mod sequence;
pub mod task;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgb8, Vec2,
};
pub use crate::foundation::error::{TwostepError, TwostepResult};

pub use crate::animation::ease::Ease;
pub use crate::catalog::palette::{NamedColor, NamedScale};
pub use crate::catalog::shape::ShapeKind;
pub use crate::catalog::transform::{Catalog, ColorPair, ScalePair, TransformationSpec};
pub use crate::config::model::{AnimationConfig, CatalogDef, SamplerOpts, TaskConfig, VideoConfig};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::write_png;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::video::{VideoStats, VideoWriter};
pub use crate::layout::board::BoardLayout;
pub use crate::render::backend::{FrameRGBA, FrameRenderer};
pub use crate::render::cpu::CpuRenderer;
pub use crate::sample::model::{Sample, ShapePair, ShapeState, Slot};
pub use crate::sample::sampler::{Sampler, sample};
pub use crate::sequence::frame::{Board, Cell, FrameDescriptor, Phase};
pub use crate::sequence::sequencer::{FrameSequence, sequence_frames};
pub use crate::task::generator::{TaskGenerator, TaskMetadata, TaskPair, generate_dataset};
pub use crate::task::prompt::get_prompt;
