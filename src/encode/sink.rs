use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TwostepError, TwostepResult};
use crate::render::backend::FrameRGBA;

/// Stream parameters handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
}

impl SinkConfig {
    /// Check a frame against the configured size.
    pub fn check_frame(&self, frame: &FrameRGBA) -> TwostepResult<()> {
        if frame.width != self.width || frame.height != self.height {
            return Err(TwostepError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.width, self.height
            )));
        }
        let expected = (self.width as usize) * (self.height as usize) * 4;
        if frame.data.len() != expected {
            return Err(TwostepError::encode(format!(
                "frame has {} bytes, expected {expected} (width*height*4)",
                frame.data.len()
            )));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// `begin` is called once, then `push_frame` with strictly increasing indices, then `end`.
pub trait FrameSink {
    /// Prepare for a new stream.
    fn begin(&mut self, cfg: SinkConfig) -> TwostepResult<()>;
    /// Accept the frame at `idx`.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> TwostepResult<()>;
    /// Finish the stream.
    fn end(&mut self) -> TwostepResult<()>;
}

/// Collects frames in memory. Used by tests and for inspecting an animation without ffmpeg.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured by the last `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames received so far, in push order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TwostepResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> TwostepResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| TwostepError::encode("in-memory sink not started"))?;
        cfg.check_frame(frame)?;
        if let Some((last, _)) = self.frames.last()
            && idx <= *last
        {
            return Err(TwostepError::encode(format!(
                "out-of-order frame index {} after {}",
                idx.0, last.0
            )));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> TwostepResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
