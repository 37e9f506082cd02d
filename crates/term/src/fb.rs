//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite a straight-alpha color over `self`.
    pub fn blend(self, over: Rgb, alpha: u8) -> Rgb {
        let mix = |under: u8, top: u8| -> u8 {
            let a = u16::from(alpha);
            ((u16::from(top) * a + u16::from(under) * (255 - a) + 127) / 255) as u8
        };
        Rgb::new(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().cell(' ')
    }
}

/// Upper half block: fg paints the top pixel, bg the bottom one.
pub const HALF_BLOCK: char = '▀';

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.cell(ch));
    }

    /// Write `s` starting at `(x, y)`, clipped to `max_w` columns and the
    /// buffer edge. Returns the number of columns written.
    pub fn put_str_clipped(
        &mut self,
        x: u16,
        y: u16,
        s: &str,
        max_w: u16,
        style: CellStyle,
    ) -> u16 {
        let limit = x.saturating_add(max_w).min(self.width);
        let mut cx = x;
        for ch in s.chars() {
            if cx >= limit {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx - x
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        self.put_str_clipped(x, y, s, u16::MAX, style)
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// One cell showing two vertically stacked pixels.
    pub fn put_pixel_pair(&mut self, x: u16, y: u16, top: Rgb, bottom: Rgb) {
        self.put_char(x, y, HALF_BLOCK, CellStyle::new(top, bottom));
    }

    /// Box-drawing frame; no-op below 2x2.
    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '─', style);
            self.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '│', style);
            self.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    /// The characters of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_to_width_and_edge() {
        let mut fb = FrameBuffer::new(8, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_str_clipped(1, 0, "abcdef", 3, style), 3);
        assert_eq!(fb.row_text(0), " abc    ");
        assert_eq!(fb.put_str(5, 0, "xyz123", style), 3);
        assert_eq!(fb.row_text(0), " abc xyz");
        assert_eq!(fb.put_str(20, 0, "nope", style), 0);
    }

    #[test]
    fn pixel_pair_uses_fg_for_top() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.put_pixel_pair(0, 0, Rgb::new(255, 0, 0), Rgb::new(0, 0, 255));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.style.bg, Rgb::new(0, 0, 255));
    }

    #[test]
    fn blend_endpoints() {
        let bg = Rgb::new(10, 20, 30);
        let top = Rgb::new(200, 100, 0);
        assert_eq!(bg.blend(top, 255), top);
        assert_eq!(bg.blend(top, 0), bg);
    }

    #[test]
    fn border_corners() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_border(0, 0, 4, 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");
    }
}
