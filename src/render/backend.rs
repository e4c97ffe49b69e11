use crate::foundation::core::Canvas;
use crate::foundation::error::TwostepResult;
use crate::sequence::frame::FrameDescriptor;

/// A rendered frame as RGBA8 pixels.
///
/// Renderers output **premultiplied alpha**; the `premultiplied` flag makes this explicit at
/// API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Turns frame descriptors into pixels.
pub trait FrameRenderer {
    /// Output size of every rendered frame.
    fn canvas(&self) -> Canvas;

    /// Rasterize one frame.
    fn render_frame(&mut self, frame: &FrameDescriptor) -> TwostepResult<FrameRGBA>;
}
