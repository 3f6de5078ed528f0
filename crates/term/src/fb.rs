//! Character-cell framebuffer the game view draws into.
//!
//! Coordinates are `(x, y)` terminal columns and rows. Writes that fall
//! outside the buffer are dropped, so layouts larger than the terminal are
//! clipped instead of panicking.

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
}

/// Foreground, background and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Light grey on black.
    pub const PLAIN: Self = Self::fg(Rgb::new(220, 220, 220));

    /// Normal weight text in `fg` on a black background.
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    pub const fn dimmed(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// One terminal cell: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Self = Self {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; area(width, height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size, keeping the allocation when it is large enough.
    ///
    /// Cell contents are unspecified afterwards; call [`clear`](Self::clear).
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells.resize(area(width, height), Cell::BLANK);
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` left to right from `(x, y)`. Returns the columns used.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut len = 0u16;
        for ch in s.chars() {
            self.put_char(x.saturating_add(len), y, ch, style);
            len = len.saturating_add(1);
        }
        len
    }

    /// Write `s` horizontally centered in `[x, x + w)`. Returns the start column.
    pub fn put_str_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let len = s.chars().count() as u16;
        let start = x.saturating_add(w.saturating_sub(len) / 2);
        self.put_str(start, y, s, style);
        start
    }

    /// Write a decimal number left-aligned at (x, y). Returns the width written.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, char::from(b'0' + d), style);
        }
        len as u16
    }

    /// Repeat `ch` over `w` columns of row `y`.
    pub fn fill_row(&mut self, x: u16, y: u16, w: u16, ch: char, style: CellStyle) {
        for dx in 0..w {
            self.put_char(x.saturating_add(dx), y, ch, style);
        }
    }

    /// Collect row `y` into a string (testing/debugging aid).
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map_or(' ', |c| c.ch))
            .collect()
    }
}

fn area(width: u16, height: u16) -> usize {
    usize::from(width) * usize::from(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits_left_aligned() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_u32(1, 0, 0, style), 1);
        assert_eq!(fb.put_u32(3, 0, 4021, style), 4);
        assert_eq!(fb.row_string(0), " 0 4021     ");
    }

    #[test]
    fn writes_outside_the_buffer_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        assert_eq!(fb.put_str(1, 0, "abcdef", style), 6);
        fb.put_char(0, 5, 'z', style);
        assert_eq!(fb.row_string(0), " ab");
        assert_eq!(fb.row_string(1), "   ");
    }

    #[test]
    fn centered_text_rounds_left() {
        let mut fb = FrameBuffer::new(10, 1);
        let start = fb.put_str_centered(0, 10, 0, "abc", CellStyle::default());
        assert_eq!(start, 3);
        assert_eq!(fb.row_string(0), "   abc    ");
    }

    #[test]
    fn fill_row_and_clear() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.fill_row(1, 1, 3, '─', CellStyle::PLAIN);
        assert_eq!(fb.row_string(1), " ─── ");
        fb.clear();
        assert_eq!(fb.row_string(1), "     ");
    }

    #[test]
    fn style_builders_compose() {
        let red = Rgb::new(200, 0, 0);
        let style = CellStyle::fg(red).on(Rgb::new(1, 2, 3)).bold(true).dimmed();
        assert_eq!(style.fg, red);
        assert_eq!(style.bg, Rgb::new(1, 2, 3));
        assert!(style.bold && style.dim);
        assert_eq!(CellStyle::default(), CellStyle::PLAIN);
    }
}
