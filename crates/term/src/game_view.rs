//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH, WHITE};

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

const BLOCK_CHAR: char = '█';
const EMPTY_CHAR: char = '·';

const PANEL_MIN_WIDTH: u16 = 12;

/// Largest board cell, in terminal columns or rows.
pub const MAX_CELL_SIZE: u16 = 8;

const PLAYFIELD_STYLE: CellStyle = CellStyle::new(Rgb::new(70, 70, 80), BACKGROUND).dim();
const BORDER_STYLE: CellStyle = CellStyle::new(WHITE, BACKGROUND);
const LABEL_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).bold();
const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
const OVERLAY_STYLE: CellStyle = CellStyle::new(WHITE, BACKGROUND).bold();

/// Draws the board, the active piece, a score panel and the game-over banner.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            (BOARD_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => (BLOCK_CHAR, block_style(*color)),
                    None => (EMPTY_CHAR, PLAYFIELD_STYLE),
                };
                self.fill_board_cell(fb, origin_x, origin_y, x as u16, y as u16, ch, style);
            }
        }

        if let Some(active) = snap.active {
            let style = block_style(active.color);
            for &(x, y) in active.cells.iter() {
                // Cells above the top edge are not drawn.
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    let (x, y) = (x as u16, y as u16);
                    self.fill_board_cell(fb, origin_x, origin_y, x, y, BLOCK_CHAR, style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x.saturating_add(frame_w), origin_y);

        if snap.game_over {
            self.draw_banner(fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', BORDER_STYLE);
        fb.put_char(right, y, '┐', BORDER_STYLE);
        fb.put_char(x, bottom, '└', BORDER_STYLE);
        fb.put_char(right, bottom, '┘', BORDER_STYLE);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', BORDER_STYLE);
            fb.put_char(x.saturating_add(dx), bottom, '─', BORDER_STYLE);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', BORDER_STYLE);
            fb.put_char(right, y.saturating_add(dy), '│', BORDER_STYLE);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = origin_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", LABEL_STYLE);
        fb.put_u32(panel_x, y.saturating_add(1), snap.score, VALUE_STYLE);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", LABEL_STYLE);
        fb.put_u32(panel_x, y.saturating_add(1), snap.lines, VALUE_STYLE);
        y = y.saturating_add(3);

        let help = CellStyle { dim: true, ..VALUE_STYLE };
        for line in ["←/→ move", "↓ drop", "↑ rotate", "q quit"] {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let bx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(bx, y.saturating_add(h / 2), text, OVERLAY_STYLE);
    }
}

fn block_style(color: Rgb) -> CellStyle {
    CellStyle::new(color, BACKGROUND).bold()
}
