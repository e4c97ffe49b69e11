use crate::animation::ease::Ease;
use crate::catalog::palette::{NamedColor, NamedScale, default_colors, default_scales};
use crate::catalog::shape::ShapeKind;
use crate::foundation::core::{Canvas, Fps};
use serde::{Deserialize, Serialize};

/// Shape, color and scale catalogs as written in configuration.
///
/// `color_pairs` / `scale_pairs` list `[start, end]` names. When absent, every ordered pair of
/// distinct entries is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogDef {
    /// Shapes eligible for the example and question rows.
    pub shapes: Vec<ShapeKind>,
    /// Palette.
    pub colors: Vec<NamedColor>,
    /// Scale ladder.
    pub scales: Vec<NamedScale>,
    /// Explicit color transformation pairs, by name.
    pub color_pairs: Option<Vec<(String, String)>>,
    /// Explicit scale transformation pairs, by name.
    pub scale_pairs: Option<Vec<(String, String)>>,
}

impl Default for CatalogDef {
    fn default() -> Self {
        Self {
            shapes: ShapeKind::DEFAULT_CATALOG.to_vec(),
            colors: default_colors(),
            scales: default_scales(),
            color_pairs: None,
            scale_pairs: None,
        }
    }
}

/// Frame sequencing settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Frames in each of the color and scale phases. `0` and `1` both yield one end-state frame.
    pub frames_per_phase: u32,
    /// Times each static (setup/final) frame is written to the video.
    pub hold_frames: u32,
    /// Curve applied to phase progress before interpolation.
    pub ease: Ease,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames_per_phase: 25,
            hold_frames: 20,
            ease: Ease::Linear,
        }
    }
}

/// Ground-truth video settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    /// Whether to encode an MP4 per task (requires `ffmpeg` on PATH).
    pub enabled: bool,
    /// Output frame rate; every frame is shown for exactly `1 / fps` seconds.
    pub fps: Fps,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fps: Fps { num: 10, den: 1 },
        }
    }
}

/// Sampler behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerOpts {
    /// Avoid repeating a (shapes, transformation) combination until all have been produced.
    pub unique: bool,
}

impl Default for SamplerOpts {
    fn default() -> Self {
        Self { unique: true }
    }
}

/// Complete generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Dataset domain tag, used in task ids and output directories.
    pub domain: String,
    /// Image size.
    pub canvas: Canvas,
    /// Horizontal margin of the board, in pixels.
    pub margin: u32,
    /// Base shape size in pixels before scaling.
    pub shape_size: u32,
    /// Height of the question mark placeholder, in pixels.
    pub question_mark_size: u32,
    /// Catalogs.
    pub catalog: CatalogDef,
    /// Sequencing.
    pub animation: AnimationConfig,
    /// Video output.
    pub video: VideoConfig,
    /// Sampling.
    pub sampler: SamplerOpts,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            domain: "shape_two_step".to_owned(),
            canvas: Canvas {
                width: 640,
                height: 400,
            },
            margin: 32,
            shape_size: 64,
            question_mark_size: 48,
            catalog: CatalogDef::default(),
            animation: AnimationConfig::default(),
            video: VideoConfig::default(),
            sampler: SamplerOpts::default(),
        }
    }
}
