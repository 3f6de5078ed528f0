//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, score line, the grid, two status lines and
//! an optional key help line. Every part is centered horizontally.

use crate::core::{GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mark, Player, TITLE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows between the top of the layout and the first grid row.
const BOARD_OFFSET_Y: u16 = 4;

const FAREWELL: &str = "As if you have anything better to do... ;)";
const REMATCH_PROMPT: &str = "Do you want a rematch? [Y/N] (Y): ";
const HELP: &str = "arrows/hjkl move · Enter place · digits+Enter field · q quit";

const BG: Rgb = Rgb::new(0, 0, 0);
const WIN_BG: Rgb = Rgb::new(40, 110, 60);
const CURSOR_BG: Rgb = Rgb::new(60, 60, 90);

const TITLE_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold(true);
const LINE_STYLE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HELP_STYLE: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130)).dimmed();

/// A lightweight terminal renderer for the tic-tac-toe game.
pub struct GameView {
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_entry(snap, "", viewport, fb);
    }

    /// Like [`render_into`](Self::render_into), also echoing the digits typed
    /// so far for the next field number.
    pub fn render_into_with_entry(
        &self,
        snap: &GameSnapshot,
        entry: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let fw = field_width(snap.field_count());
        let (board_w, board_h) = board_size(snap.rows, snap.columns, fw);
        let layout_h = self.layout_height(board_h);

        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(layout_h) / 2,
            AnchorY::Top => 0,
        };

        fb.put_str_centered(0, viewport.width, start_y, TITLE, TITLE_STYLE);

        self.draw_scores(fb, snap, viewport, start_y.saturating_add(2));

        let board_y = start_y.saturating_add(BOARD_OFFSET_Y);
        self.draw_grid(fb, snap, fw, start_x, board_y);

        let status_y = board_y.saturating_add(board_h).saturating_add(1);
        self.draw_status(fb, snap, entry, viewport, status_y);

        if self.show_help {
            fb.put_str_centered(0, viewport.width, status_y.saturating_add(3), HELP, HELP_STYLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_entry(
        &self,
        snap: &GameSnapshot,
        entry: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_entry(snap, entry, viewport, &mut fb);
        fb
    }

    /// Total rows used by the layout for a grid `board_h` rows tall.
    pub fn layout_height(&self, board_h: u16) -> u16 {
        // title, gap, scores, gap, grid, gap, two status lines
        let h = BOARD_OFFSET_Y + board_h + 3;
        if self.show_help {
            h + 2
        } else {
            h
        }
    }

    fn draw_scores(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, y: u16) {
        let line = format!(
            "Player1({}): {}  -  Player2({}): {}",
            snap.mark_of(Player::One).as_char(),
            snap.score(Player::One),
            snap.mark_of(Player::Two).as_char(),
            snap.score(Player::Two),
        );
        fb.put_str_centered(0, viewport.width, y, &line, LINE_STYLE);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, fw: u16, x0: u16, y0: u16) {
        let line = LINE_STYLE;
        let cell_w = fw + 2;

        for row in 0..snap.rows {
            let y = y0.saturating_add(2 * row as u16);
            for col in 0..snap.columns {
                let x = x0.saturating_add(col as u16 * (cell_w + 1));
                if col > 0 {
                    fb.put_char(x - 1, y, '│', line);
                }
                self.draw_cell(fb, snap, row, col, fw, x, y);

                if row + 1 < snap.rows {
                    fb.fill_row(x, y.saturating_add(1), cell_w, '─', line);
                    if col > 0 {
                        fb.put_char(x - 1, y.saturating_add(1), '┼', line);
                    }
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        row: usize,
        col: usize,
        fw: u16,
        x: u16,
        y: u16,
    ) {
        let bg = if snap.in_winning_run(row, col) {
            WIN_BG
        } else if snap.playable() && snap.cursor.row == row && snap.cursor.col == col {
            CURSOR_BG
        } else {
            BG
        };
        let is_last = snap.last_move.is_some_and(|p| p.row == row && p.col == col);

        fb.fill_row(x, y, fw + 2, ' ', CellStyle::PLAIN.on(bg));

        match snap.cell(row, col) {
            Some(mark) => {
                let style = CellStyle::fg(mark_color(mark)).on(bg).bold(is_last);
                fb.put_char(x + fw, y, mark.as_char(), style);
            }
            None => {
                let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(bg).dimmed();
                let field = (row * snap.columns + col + 1) as u32;
                let digits = field_width(field as usize);
                fb.put_u32(x + 1 + (fw - digits), y, field, style);
            }
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        entry: &str,
        viewport: Viewport,
        y: u16,
    ) {
        let text = CellStyle::PLAIN;
        let strong = text.bold(true);
        let error = CellStyle::fg(Rgb::new(220, 80, 80));

        let w = viewport.width;
        match snap.phase {
            Phase::Playing => {
                if let Some(err) = snap.last_error {
                    fb.put_str_centered(0, w, y, &err.to_string(), error);
                }
                let prompt = format!(
                    "Player{}({}): Enter a field number > {}_",
                    snap.turn.number(),
                    snap.mark_of(snap.turn).as_char(),
                    entry
                );
                fb.put_str_centered(0, w, y.saturating_add(1), &prompt, text);
            }
            Phase::Won(winner) => {
                let line = format!("=> Player{} wins!", winner.number());
                fb.put_str_centered(0, w, y, &line, strong);
                fb.put_str_centered(0, w, y.saturating_add(1), REMATCH_PROMPT, text);
            }
            Phase::Draw => {
                fb.put_str_centered(0, w, y, "=> It's a draw!", strong);
                fb.put_str_centered(0, w, y.saturating_add(1), REMATCH_PROMPT, text);
            }
            // The farewell is printed after the terminal is restored.
            Phase::Finished => {}
        }
    }
}

/// Columns needed to print the largest field number.
pub fn field_width(field_count: usize) -> u16 {
    let mut n = field_count.max(1);
    let mut w = 0;
    while n > 0 {
        w += 1;
        n /= 10;
    }
    w
}

/// Grid size in terminal cells: `(width, height)`.
///
/// Each cell is the field width plus one space of padding on both sides;
/// columns are separated by `│` and rows by a line of `─`.
pub fn board_size(rows: usize, columns: usize, fw: u16) -> (u16, u16) {
    let columns = columns as u16;
    let rows = rows as u16;
    let w = columns * (fw + 2) + columns.saturating_sub(1);
    let h = (2 * rows).saturating_sub(1);
    (w, h)
}

/// Line shown after the terminal is restored when the session ends normally.
pub fn farewell() -> &'static str {
    FAREWELL
}

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::X => Rgb::new(80, 220, 220),
        Mark::O => Rgb::new(255, 165, 0),
    }
}
