//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout mirrors the classic single-window arrangement: the play field with
//! a border, and a side panel to its right holding the next-piece preview
//! and the score/level readout.

use crate::core::{base_shape, GameState};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PieceKind};

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

/// Display color for each piece kind (classic palette).
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let panel_w: u16 = 14;

        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(20, 20, 28));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let locked = CellStyle::new(Rgb::new(235, 235, 235), Rgb::new(20, 20, 28));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, frame_h - 2, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells render uniformly; only the falling piece keeps its color.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if state.board().occupied(x, y) {
                    self.draw_cell(&mut fb, start_x, start_y, x, y, '█', locked);
                }
            }
        }

        // Ghost piece at the projected resting row.
        if let (Some(active), Some(ghost_y)) = (state.active(), state.ghost_y()) {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(20, 20, 28)).dimmed();
            for (row, col) in active.shape.filled_cells() {
                let x = active.x + col as i8;
                let y = ghost_y + row as i8;
                self.draw_cell(&mut fb, start_x, start_y, x, y, '░', ghost);
            }
        }

        // Active piece, drawn over the ghost.
        if let Some(active) = state.active() {
            let style = CellStyle::new(piece_color(active.kind), Rgb::new(20, 20, 28));
            for (row, col) in active.shape.filled_cells() {
                let x = active.x + col as i8;
                let y = active.y + row as i8;
                self.draw_cell(&mut fb, start_x, start_y, x, y, '█', style);
            }
        }

        self.draw_panel(&mut fb, state, start_x + frame_w + 2, start_y);

        if state.game_over() {
            let msg = " GAME OVER ";
            let style = CellStyle::new(Rgb::new(255, 80, 80), Rgb::new(0, 0, 0)).bolded();
            let mx = start_x + frame_w / 2;
            let mx = mx.saturating_sub(msg.len() as u16 / 2);
            fb.put_str(mx, start_y + frame_h / 2, msg, style);
        }

        fb
    }

    /// Draw one board cell as a `cell_w`-wide run of `ch`.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + y as u16;
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, ch, style);
        }
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Side panel: next-piece preview plus score and level.
    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(180, 180, 180), Rgb::new(0, 0, 0));
        let value = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));

        let next = state.next_kind();
        fb.put_str(x, y, &format!("NEXT: {}", next.as_str()), label);
        let shape = base_shape(next);
        let style = CellStyle::new(piece_color(next), Rgb::new(0, 0, 0));
        for (row, col) in shape.filled_cells() {
            let px = x + (col as u16) * self.cell_w;
            let py = y + 2 + row as u16;
            for dx in 0..self.cell_w {
                fb.put_char(px + dx, py, '█', style);
            }
        }

        fb.put_str(x, y + 7, &format!("Score: {}", state.score()), value);
        fb.put_str(x, y + 9, &format!("Level: {}", state.level()), value);
        fb.put_str(x, y + 12, "q: quit", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_char(fb: &FrameBuffer, ch: char) -> bool {
        (0..fb.height())
            .any(|y| (0..fb.width()).any(|x| fb.get(x, y).map(|c| c.ch) == Some(ch)))
    }

    #[test]
    fn render_fits_small_viewports_without_panic() {
        let state = GameState::new(1);
        let view = GameView::default();
        for (w, h) in [(0, 0), (5, 3), (80, 24), (200, 60)] {
            let fb = view.render(&state, Viewport::new(w, h));
            assert_eq!(fb.width(), w);
            assert_eq!(fb.height(), h);
        }
    }

    #[test]
    fn render_draws_active_piece_and_border() {
        let state = GameState::new(1);
        let fb = GameView::default().render(&state, Viewport::new(80, 24));
        assert!(has_char(&fb, '█'));
        assert!(has_char(&fb, '┌'));
        assert!(has_char(&fb, '░'), "ghost should be visible");
    }

    #[test]
    fn game_over_banner_is_bold() {
        use crate::types::GameAction;

        let mut state = GameState::new(1);
        // Block the spawn rows so the first lock ends the game.
        for x in 3..7 {
            state.board_mut().set(x, 0, true);
            state.board_mut().set(x, 1, true);
        }
        state.apply_action(GameAction::HardDrop);
        assert!(state.game_over());

        let fb = GameView::default().render(&state, Viewport::new(80, 24));
        let any_bold = (0..fb.height())
            .any(|y| (0..fb.width()).any(|x| fb.get(x, y).is_some_and(|c| c.style.bold)));
        assert!(any_bold, "banner should render bold");
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(piece_color(*a), piece_color(*b));
            }
        }
    }
}
