//! Cell-grid canvas that executes paint instructions in painter order.

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use polyview_core::{CanvasPoint, PaintOp, Rgb};
use std::io::Write;

/// Character used to fill face interiors.
const FILL_CHAR: char = '█';

/// Character used for face-corner markers.
const MARKER_CHAR: char = '•';

/// A width by height grid of colored cells.
///
/// Paint instructions are executed strictly in the order given; a later
/// fill simply overwrites earlier cells, which is exactly the occlusion
/// rule the back-to-front ordering expects. There is no depth test here.
pub struct CellCanvas {
    width: usize,
    height: usize,
    cells: Vec<Option<(char, Rgb)>>,
}

impl CellCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to background.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Execute one frame's paint sequence.
    pub fn paint(&mut self, ops: &[PaintOp]) {
        for op in ops {
            match op {
                PaintOp::Polygon { points, color } => self.fill_polygon(points, *color),
                PaintOp::Marker { at, color } => self.plot(at, MARKER_CHAR, *color),
            }
        }
    }

    /// Fill a polygon by fanning triangles out of its first vertex. Exact
    /// for the convex faces this renderer is scoped to.
    fn fill_polygon(&mut self, points: &[CanvasPoint], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        for i in 1..points.len() - 1 {
            self.fill_triangle(points[0], points[i], points[i + 1], color);
        }
    }

    fn fill_triangle(&mut self, v0: CanvasPoint, v1: CanvasPoint, v2: CanvasPoint, color: Rgb) {
        // Bounding box, clipped to the canvas
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i64).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i64).min(self.width as i64 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i64).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i64).min(self.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the cell center
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, px, py) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.cells[y as usize * self.width + x as usize] =
                            Some((FILL_CHAR, color));
                    }
                }
            }
        }
    }

    /// Set the single cell nearest a canvas point, ignoring off-canvas
    /// points.
    fn plot(&mut self, at: &CanvasPoint, ch: char, color: Rgb) {
        let x = at.x.round() as i64;
        let y = at.y.round() as i64;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Some((ch, color));
    }

    /// Queue the whole grid to the terminal, one colored character per
    /// cell.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                match self.cells[y * self.width + x] {
                    Some((ch, color)) => {
                        writer.queue(SetForegroundColor(Color::Rgb {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                        }))?;
                        writer.queue(Print(ch))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Barycentric coordinates of point (px, py) in the triangle, or `None`
/// when the triangle has near-zero area.
fn barycentric(
    v0: CanvasPoint,
    v1: CanvasPoint,
    v2: CanvasPoint,
    px: f64,
    py: f64,
) -> Option<(f64, f64, f64)> {
    let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
    if denom.abs() < 1e-9 {
        return None;
    }
    let w0 = ((v1.y - v2.y) * (px - v2.x) + (v2.x - v1.x) * (py - v2.y)) / denom;
    let w1 = ((v2.y - v0.y) * (px - v2.x) + (v0.x - v2.x) * (py - v2.y)) / denom;
    let w2 = 1.0 - w0 - w1;
    Some((w0, w1, w2))
}
