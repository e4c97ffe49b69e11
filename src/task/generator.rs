use crate::catalog::palette::{NamedColor, NamedScale};
use crate::catalog::shape::ShapeKind;
use crate::config::model::TaskConfig;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
use crate::encode::png::write_png;
use crate::encode::video::VideoWriter;
use crate::foundation::error::{TwostepError, TwostepResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{BACKGROUND, CpuRenderer};
use crate::sample::model::Sample;
use crate::sample::sampler::Sampler;
use crate::sequence::frame::Board;
use crate::sequence::sequencer::sequence_frames;
use crate::task::prompt::{COLOR_THEN_SCALE, get_prompt};
use anyhow::Context as _;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// File names inside a task directory.
pub const FIRST_FRAME_FILE: &str = "first_frame.png";
/// Solved board.
pub const FINAL_FRAME_FILE: &str = "final_frame.png";
/// Prompt text.
pub const PROMPT_FILE: &str = "prompt.txt";
/// Sample description.
pub const METADATA_FILE: &str = "metadata.json";
/// Solution animation.
pub const VIDEO_FILE: &str = "ground_truth.mp4";

/// One generated task: prompt, still images and optional solution video.
#[derive(Clone, Debug)]
pub struct TaskPair {
    /// Identifier, `<domain>_<NNNN>` in datasets.
    pub task_id: String,
    /// Task family name.
    pub domain: String,
    /// Instruction shown with the first frame.
    pub prompt: String,
    /// The sampled instance.
    pub sample: Sample,
    /// Board with E and F unknown.
    pub first_image: FrameRGBA,
    /// Fully resolved board.
    pub final_image: FrameRGBA,
    /// Current location of the encoded MP4, if one was produced.
    pub video: Option<PathBuf>,
}

/// Serialized as `metadata.json`.
#[derive(Clone, Debug, Serialize)]
pub struct TaskMetadata<'a> {
    /// Task identifier.
    pub task_id: &'a str,
    /// Task family name.
    pub domain: &'a str,
    /// Always `color_then_scale`.
    pub transformation_type: &'static str,
    /// Shape of A, B and C.
    pub shape_example: ShapeKind,
    /// Shape of D, E and F.
    pub shape_question: ShapeKind,
    /// Color before the first step.
    pub color_from: &'a NamedColor,
    /// Color after the first step.
    pub color_to: &'a NamedColor,
    /// Scale before the second step.
    pub scale_from: &'a NamedScale,
    /// Scale after the second step.
    pub scale_to: &'a NamedScale,
    /// `Step 1: … → …, Step 2: … → …`.
    pub description: String,
    /// Whether `ground_truth.mp4` accompanies the task.
    pub has_video: bool,
}

impl TaskPair {
    /// Metadata view of this task.
    pub fn metadata(&self) -> TaskMetadata<'_> {
        let shapes = self.sample.shapes();
        let t = self.sample.transformation();
        TaskMetadata {
            task_id: &self.task_id,
            domain: &self.domain,
            transformation_type: COLOR_THEN_SCALE,
            shape_example: shapes.example,
            shape_question: shapes.question,
            color_from: &t.color.start,
            color_to: &t.color.end,
            scale_from: &t.scale.start,
            scale_to: &t.scale.end,
            description: t.description(),
            has_video: self.video.is_some(),
        }
    }

    /// Directory this task is written to under `out_dir`.
    pub fn task_dir(&self, out_dir: &Path) -> PathBuf {
        out_dir
            .join(format!("{}_task", self.domain))
            .join(&self.task_id)
    }

    /// Write the task files to `<out_dir>/<domain>_task/<task_id>/` and return that directory.
    ///
    /// A generated video is moved into the directory and `video` updated to point at it.
    pub fn write_to(&mut self, out_dir: &Path) -> TwostepResult<PathBuf> {
        let dir = self.task_dir(out_dir);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create task directory '{}'", dir.display()))?;

        write_png(&dir.join(FIRST_FRAME_FILE), &self.first_image)?;
        write_png(&dir.join(FINAL_FRAME_FILE), &self.final_image)?;
        std::fs::write(dir.join(PROMPT_FILE), &self.prompt)
            .with_context(|| format!("write prompt for '{}'", self.task_id))?;

        let json = serde_json::to_string_pretty(&self.metadata())
            .map_err(|e| TwostepError::serde(format!("metadata for '{}': {e}", self.task_id)))?;
        std::fs::write(dir.join(METADATA_FILE), json)
            .with_context(|| format!("write metadata for '{}'", self.task_id))?;

        if let Some(src) = self.video.take() {
            let dst = dir.join(VIDEO_FILE);
            if src != dst {
                move_file(&src, &dst)?;
            }
            self.video = Some(dst);
        }
        Ok(dir)
    }
}

/// Samples tasks and renders their images and videos.
#[derive(Debug)]
pub struct TaskGenerator {
    config: TaskConfig,
    sampler: Sampler,
    renderer: CpuRenderer,
    video: Option<VideoWriter>,
    video_dir: PathBuf,
    owns_video_dir: bool,
}

impl TaskGenerator {
    /// Validate `config` and prepare the sampler and renderer.
    ///
    /// Video output is disabled with a warning when `ffmpeg` is not available.
    pub fn new(config: TaskConfig) -> TwostepResult<Self> {
        let catalog = config.catalog()?;
        let renderer = CpuRenderer::new(&config)?;
        let video = if !config.video.enabled {
            None
        } else if !is_ffmpeg_on_path() {
            tracing::warn!("ffmpeg not found on PATH; skipping ground-truth videos");
            None
        } else {
            Some(VideoWriter::new(&config.video, &config.animation))
        };
        let video_dir = unique_staging_dir(&config.domain);

        Ok(Self {
            sampler: Sampler::new(catalog, config.sampler),
            renderer,
            video,
            video_dir,
            owns_video_dir: true,
            config,
        })
    }

    /// Stage videos in `dir` instead of a fresh directory under the system temp directory.
    pub fn with_video_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.video_dir = dir.into();
        self.owns_video_dir = false;
        self
    }

    /// Where videos are encoded before [`TaskPair::write_to`] moves them.
    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    /// Active configuration.
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Underlying sampler.
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// `true` when tasks come with a solution video.
    pub fn videos_enabled(&self) -> bool {
        self.video.is_some()
    }

    /// Generate one task. All randomness comes from `rng`.
    #[tracing::instrument(level = "debug", skip(self, rng), fields(domain = %self.config.domain))]
    pub fn generate<R: Rng + ?Sized>(&mut self, task_id: &str, rng: &mut R) -> TwostepResult<TaskPair> {
        let sample = self.sampler.next_sample(rng);
        tracing::debug!(description = %sample.description(), "sampled");

        let first_image = self.renderer.render_board(&Board::question(&sample))?;
        let final_image = self.renderer.render_board(&Board::resolved(&sample))?;

        let video = match self.video {
            Some(writer) => Some(self.render_video(&writer, task_id, &sample)?),
            None => None,
        };
        let prompt = get_prompt(COLOR_THEN_SCALE, rng).to_owned();

        Ok(TaskPair {
            task_id: task_id.to_owned(),
            domain: self.config.domain.clone(),
            prompt,
            sample,
            first_image,
            final_image,
            video,
        })
    }

    fn render_video(
        &mut self,
        writer: &VideoWriter,
        task_id: &str,
        sample: &Sample,
    ) -> TwostepResult<PathBuf> {
        let path = self.video_dir.join(format!("{task_id}_ground_truth.mp4"));
        let mut sink = FfmpegSink::new(FfmpegSinkOpts {
            background: BACKGROUND,
            ..FfmpegSinkOpts::new(path.clone())
        });
        let stats = writer.write(
            sequence_frames(sample, &self.config.animation),
            &mut self.renderer,
            &mut sink,
        )?;
        tracing::debug!(
            frames = stats.frames_written,
            secs = stats.duration_secs,
            path = %path.display(),
            "encoded ground truth"
        );
        Ok(path)
    }
}

/// Generate `count` tasks into `out_dir` from a single seeded rng.
///
/// Task ids are `<domain>_0000`, `<domain>_0001`, ... Returns the task directories in order.
#[tracing::instrument(skip(config), fields(domain = %config.domain))]
pub fn generate_dataset(
    config: &TaskConfig,
    out_dir: &Path,
    count: usize,
    seed: u64,
) -> TwostepResult<Vec<PathBuf>> {
    let mut generator = TaskGenerator::new(config.clone())?;
    generate_with(&mut generator, out_dir, count, seed)
}

/// Like [`generate_dataset`] with a prepared generator.
pub fn generate_with(
    generator: &mut TaskGenerator,
    out_dir: &Path,
    count: usize,
    seed: u64,
) -> TwostepResult<Vec<PathBuf>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dirs = Vec::with_capacity(count);
    for i in 0..count {
        let task_id = format!("{}_{i:04}", generator.config().domain);
        let mut pair = generator.generate(&task_id, &mut rng)?;
        dirs.push(pair.write_to(out_dir)?);
    }
    tracing::info!(
        count,
        distinct = generator.sampler().distinct_produced(),
        out = %out_dir.display(),
        "dataset written"
    );
    Ok(dirs)
}

impl Drop for TaskGenerator {
    fn drop(&mut self) {
        // Only succeeds once every staged video has been moved out.
        if self.owns_video_dir {
            let _ = std::fs::remove_dir(&self.video_dir);
        }
    }
}

/// `<temp>/<domain>_videos_<pid>_<n>`, distinct per generator and per process.
fn unique_staging_dir(domain: &str) -> PathBuf {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("{domain}_videos_{}_{n}", std::process::id()))
}

fn move_file(src: &Path, dst: &Path) -> TwostepResult<()> {
    if std::fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    // Rename fails across filesystems.
    std::fs::copy(src, dst)
        .with_context(|| format!("copy '{}' to '{}'", src.display(), dst.display()))?;
    std::fs::remove_file(src).with_context(|| format!("remove '{}'", src.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/task/generator.rs"]
mod tests;
