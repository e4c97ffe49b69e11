use crate::catalog::transform::Catalog;
use crate::config::model::TaskConfig;
use crate::foundation::core::Fps;
use crate::foundation::error::{TwostepError, TwostepResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl TaskConfig {
    /// Parse and validate a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TwostepResult<Self> {
        let cfg: TaskConfig = serde_json::from_reader(r)
            .map_err(|e| TwostepError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TwostepResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TwostepError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject static configuration errors up front.
    pub fn validate(&self) -> TwostepResult<()> {
        self.catalog().map(|_| ())
    }

    /// Validate the whole configuration and build the sampling catalog.
    pub fn catalog(&self) -> TwostepResult<Catalog> {
        if self.domain.trim().is_empty() {
            return Err(TwostepError::config("domain must not be empty"));
        }
        if self
            .domain
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        {
            return Err(TwostepError::config(format!(
                "domain '{}' may only contain ASCII letters, digits, '_' and '-'",
                self.domain
            )));
        }
        self.canvas.validate()?;
        Fps::new(self.video.fps.num, self.video.fps.den)?;
        if self.margin.saturating_mul(2) >= self.canvas.width {
            return Err(TwostepError::config(format!(
                "margin {} leaves no room on a {} px wide canvas",
                self.margin, self.canvas.width
            )));
        }
        if self.shape_size == 0 {
            return Err(TwostepError::config("shape_size must be non-zero"));
        }
        if self.question_mark_size == 0 {
            return Err(TwostepError::config("question_mark_size must be non-zero"));
        }
        if self.animation.hold_frames == 0 {
            return Err(TwostepError::config("animation.hold_frames must be >= 1"));
        }
        Catalog::from_def(&self.catalog)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/task.rs"]
mod tests;
