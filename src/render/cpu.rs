use crate::config::model::TaskConfig;
use crate::foundation::core::{BezPath, Canvas, Point, Rgb8};
use crate::foundation::error::{TwostepError, TwostepResult};
use crate::layout::board::BoardLayout;
use crate::render::backend::{FrameRGBA, FrameRenderer};
use crate::render::shapes::{
    PartFill, arrow_geometry, question_mark_geometry, scaled_size, shape_geometry,
};
use crate::sample::model::ShapeState;
use crate::sequence::frame::{Board, Cell, FrameDescriptor};

/// Background fill of every frame.
pub const BACKGROUND: Rgb8 = Rgb8::WHITE;
/// Shape outlines, arrows.
pub const INK: Rgb8 = Rgb8::BLACK;
/// Question mark placeholder color.
pub const QUESTION_MARK: Rgb8 = Rgb8::new(100, 100, 100);

const OUTLINE_WIDTH: f64 = 2.0;
const ARROW_LENGTH: f64 = 40.0;

/// Rasterizes board frames with `vello_cpu`.
///
/// The render context and target pixmap are allocated once and reused for every frame.
pub struct CpuRenderer {
    canvas: Canvas,
    layout: BoardLayout,
    shape_size: u32,
    question_mark_size: f64,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("canvas", &self.canvas)
            .field("layout", &self.layout)
            .field("shape_size", &self.shape_size)
            .field("question_mark_size", &self.question_mark_size)
            .finish_non_exhaustive()
    }
}

impl CpuRenderer {
    /// Build a renderer for the canvas and sizes in `config`.
    pub fn new(config: &TaskConfig) -> TwostepResult<Self> {
        config.canvas.validate()?;
        let (w, h) = canvas_u16(config.canvas)?;
        Ok(Self {
            canvas: config.canvas,
            layout: BoardLayout::new(config.canvas, config.margin),
            shape_size: config.shape_size,
            question_mark_size: f64::from(config.question_mark_size),
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Panel positions used by this renderer.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Rasterize a whole board.
    ///
    /// Still images and video frames go through this same path so the first and last video
    /// frames match the PNGs exactly.
    pub fn render_board(&mut self, board: &Board) -> TwostepResult<FrameRGBA> {
        self.ctx.reset();

        set_color(&mut self.ctx, BACKGROUND);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        ));

        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(OUTLINE_WIDTH));
        for center in self.layout.arrow_centers() {
            let (shaft, head) = arrow_geometry(center, ARROW_LENGTH);
            set_color(&mut self.ctx, INK);
            self.ctx.stroke_path(&bezpath_to_cpu(&shaft));
            self.ctx.fill_path(&bezpath_to_cpu(&head));
        }

        for (slot, cell) in board.iter() {
            let center = self.layout.slot_center(slot);
            match cell {
                Cell::Shape(state) => self.draw_shape(center, state),
                Cell::Unknown => self.draw_question_mark(center),
            }
        }

        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        let data = self.pixmap.data_as_u8_slice().to_vec();
        if data.len() != self.canvas.rgba8_len() {
            return Err(TwostepError::render(format!(
                "pixmap readback has {} bytes, expected {}",
                data.len(),
                self.canvas.rgba8_len()
            )));
        }
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
            premultiplied: true,
        })
    }

    fn draw_shape(&mut self, center: Point, state: ShapeState) {
        let size = scaled_size(self.shape_size, state.scale);
        let geometry = shape_geometry(state.shape, center, size);
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(OUTLINE_WIDTH));
        for part in &geometry.parts {
            let path = bezpath_to_cpu(&part.path);
            let fill = match part.fill {
                PartFill::Shape => state.color,
                PartFill::Background => BACKGROUND,
            };
            set_color(&mut self.ctx, fill);
            self.ctx.fill_path(&path);
            set_color(&mut self.ctx, INK);
            self.ctx.stroke_path(&path);
        }
    }

    fn draw_question_mark(&mut self, center: Point) {
        let size = self.question_mark_size;
        let (hook, dot) = question_mark_geometry(center, size);
        set_color(&mut self.ctx, QUESTION_MARK);
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(size * 0.1));
        self.ctx.stroke_path(&bezpath_to_cpu(&hook));
        self.ctx.fill_path(&bezpath_to_cpu(&dot));
    }
}

impl FrameRenderer for CpuRenderer {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[tracing::instrument(level = "trace", skip_all, fields(index = frame.index.0, phase = ?frame.phase))]
    fn render_frame(&mut self, frame: &FrameDescriptor) -> TwostepResult<FrameRGBA> {
        self.render_board(&frame.board)
    }
}

fn canvas_u16(canvas: Canvas) -> TwostepResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| TwostepError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| TwostepError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgb8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
