use crate::config::model::{AnimationConfig, VideoConfig};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TwostepError, TwostepResult};
use crate::render::backend::FrameRenderer;
use crate::sequence::frame::FrameDescriptor;

/// Counters reported after a video has been written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoStats {
    /// Descriptors rendered.
    pub frames_rendered: u64,
    /// Frames pushed to the sink, holds included.
    pub frames_written: u64,
    /// Playback length at the configured fps.
    pub duration_secs: f64,
}

/// Renders a frame sequence into a [`FrameSink`], holding the static bookends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoWriter {
    fps: Fps,
    hold_frames: u32,
}

impl VideoWriter {
    /// Writer with the frame rate of `video` and the hold count of `anim`.
    pub fn new(video: &VideoConfig, anim: &AnimationConfig) -> Self {
        Self {
            fps: video.fps,
            hold_frames: anim.hold_frames.max(1),
        }
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// How many times `frame` is pushed.
    pub fn repeats(&self, frame: &FrameDescriptor) -> u32 {
        if frame.phase.is_static() {
            self.hold_frames
        } else {
            1
        }
    }

    /// Render every descriptor of `frames` in order and stream it into `sink`.
    ///
    /// Output indices are contiguous from 0. The sink is always begun and ended here.
    pub fn write<I, R, S>(&self, frames: I, renderer: &mut R, sink: &mut S) -> TwostepResult<VideoStats>
    where
        I: IntoIterator<Item = FrameDescriptor>,
        R: FrameRenderer + ?Sized,
        S: FrameSink + ?Sized,
    {
        let canvas = renderer.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps,
        })?;

        let mut rendered = 0u64;
        let mut next = 0u64;
        for desc in frames {
            let frame = renderer.render_frame(&desc)?;
            rendered += 1;
            for _ in 0..self.repeats(&desc) {
                sink.push_frame(FrameIndex(next), &frame)?;
                next += 1;
            }
        }
        if rendered == 0 {
            return Err(TwostepError::encode("video has no frames"));
        }
        sink.end()?;

        tracing::debug!(rendered, written = next, "video written");
        Ok(VideoStats {
            frames_rendered: rendered,
            frames_written: next,
            duration_secs: self.fps.frames_to_secs(next),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/video.rs"]
mod tests;
