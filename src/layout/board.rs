use crate::foundation::core::{Canvas, Point};
use crate::sample::model::Slot;

/// Panel and arrow positions for the 2x3 analogy board.
///
/// Three columns share the content width: 80% of each column is panel space and 20% arrow
/// space. The example row sits at one third of the height, the question row at two thirds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    columns: [f64; 3],
    arrows: [f64; 2],
    rows: [f64; 2],
}

impl BoardLayout {
    /// Compute the layout for `canvas` with a horizontal `margin`.
    pub fn new(canvas: Canvas, margin: u32) -> Self {
        let content = canvas.width.saturating_sub(margin.saturating_mul(2));
        let step = f64::from(content / 3);
        let margin = f64::from(margin);
        let spacing = step * 0.8;
        let arrow = step * 0.2;
        let half_spacing = (spacing / 2.0).floor();
        let half_arrow = (arrow / 2.0).floor();

        Self {
            columns: [
                margin + half_spacing,
                margin + spacing + arrow + half_spacing,
                margin + 2.0 * spacing + 2.0 * arrow + half_spacing,
            ],
            arrows: [
                margin + spacing + half_arrow,
                margin + 2.0 * spacing + arrow + half_arrow,
            ],
            rows: [
                f64::from(canvas.height / 3),
                f64::from(2 * canvas.height / 3),
            ],
        }
    }

    /// Center of the panel at `slot`.
    pub fn slot_center(&self, slot: Slot) -> Point {
        Point::new(self.columns[slot.column()], self.rows[slot.row()])
    }

    /// Centers of the four arrows, example row first, left to right.
    pub fn arrow_centers(&self) -> [Point; 4] {
        [
            Point::new(self.arrows[0], self.rows[0]),
            Point::new(self.arrows[1], self.rows[0]),
            Point::new(self.arrows[0], self.rows[1]),
            Point::new(self.arrows[1], self.rows[1]),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/board.rs"]
mod tests;
