/// ASCII line canvas for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Rgb, ScreenPoint, Surface};

/// A logical pixel surface shown on a grid of terminal cells.
///
/// Lines are clipped in pixel space, then scaled onto the cell grid.
pub struct AsciiCanvas {
    width: f64,
    height: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Option<(char, Rgb)>>,
}

impl AsciiCanvas {
    pub fn new(width: f64, height: f64, cols: usize, rows: usize) -> Self {
        Self {
            width,
            height,
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Change the cell grid; the logical size stays fixed
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols * rows];
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Glyph at a cell, if anything was drawn there
    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col].map(|(c, _)| c)
    }

    /// Number of cells with something drawn in them
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn to_cell(&self, p: ScreenPoint) -> (i64, i64) {
        let col = (p.x * self.cols as f64 / self.width).floor() as i64;
        let row = (p.y * self.rows as f64 / self.height).floor() as i64;
        (
            col.clamp(0, self.cols as i64 - 1),
            row.clamp(0, self.rows as i64 - 1),
        )
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char, color: Rgb) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = Some((glyph, color));
    }

    /// Write every cell, row by row, through queued crossterm commands
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<Rgb> = None;
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some((glyph, color)) => {
                        if current != Some(color) {
                            let Rgb(r, g, b) = color;
                            writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                            current = Some(color);
                        }
                        writer.queue(Print(glyph))?;
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

impl Surface for AsciiCanvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Rgb) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let Some((from, to)) = clip_line(from, to, self.width, self.height) else {
            return;
        };

        let (x0, y0) = self.to_cell(from);
        let (x1, y1) = self.to_cell(to);
        let glyph = line_glyph(x1 - x0, y1 - y0);

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, glyph, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Pick a character that follows the line's slope (rows grow downwards)
fn line_glyph(dx: i64, dy: i64) -> char {
    if dx == 0 && dy == 0 {
        return '.';
    }
    let (adx, ady) = (dx.abs(), dy.abs());
    if ady * 2 < adx {
        '-'
    } else if adx * 2 < ady {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of a segment to `[0, width] x [0, height]`
fn clip_line(
    from: ScreenPoint,
    to: ScreenPoint,
    width: f64,
    height: f64,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, from.x),
        (dx, width - from.x),
        (-dy, from.y),
        (dy, height - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        ScreenPoint::new(from.x + t0 * dx, from.y + t0 * dy),
        ScreenPoint::new(from.x + t1 * dx, from.y + t1 * dy),
    ))
}
