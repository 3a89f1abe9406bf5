//! GameView: projects a core snapshot into a terminal framebuffer.
//!
//! Pure code, no I/O. Only the visible 20 rows of the playfield are drawn;
//! the hidden buffer rows above stay off-screen.

use crate::core::{shape, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, Rotation, BOARD_WIDTH, BUFFER_HEIGHT, VISIBLE_HEIGHT};

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

/// Display color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

const WELL_BG: Rgb = Rgb::new(18, 18, 26);
const SIDEBAR_WIDTH: u16 = 16;

/// Renders the playfield, ghost, next preview, and the stat panel.
pub struct GameView {
    /// Terminal columns per board cell. Two compensates for glyph aspect.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    /// An optional banner line is shown under the playfield.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let board_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_h = VISIBLE_HEIGHT as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let total_w = frame_w + SIDEBAR_WIDTH;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style::new(Rgb::new(190, 190, 190), Rgb::new(0, 0, 0));
        let well = Style::new(Rgb::new(70, 70, 86), WELL_BG);

        self.draw_frame(fb, start_x, start_y, frame_w, frame_h, border);
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', well);

        // Settled cells, visible region only.
        for vy in 0..VISIBLE_HEIGHT as usize {
            let row = &snap.board[BUFFER_HEIGHT as usize + vy];
            for (x, &encoded) in row.iter().enumerate() {
                if let Some(kind) = encoded
                    .checked_sub(1)
                    .and_then(|i| PieceKind::from_index(i as usize))
                {
                    self.draw_cell(fb, start_x, start_y, x as i8, vy as i8, kind);
                }
            }
        }

        // Ghost outline under the active piece.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            if ghost_y != active.y {
                for &(dx, dy) in shape(active.kind, active.rotation).iter() {
                    let vy = ghost_y + dy - BUFFER_HEIGHT as i8;
                    if vy >= 0 {
                        self.draw_ghost_cell(fb, start_x, start_y, active.x + dx, vy);
                    }
                }
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            for &(dx, dy) in shape(active.kind, active.rotation).iter() {
                let vy = active.y + dy - BUFFER_HEIGHT as i8;
                if vy >= 0 {
                    self.draw_cell(fb, start_x, start_y, active.x + dx, vy, active.kind);
                }
            }
        }

        self.draw_sidebar(fb, start_x + frame_w + 2, start_y, snap);

        if let Some(text) = banner {
            let x = start_x + (frame_w.saturating_sub(text.len() as u16)) / 2;
            fb.put_str(x, start_y + frame_h, text, border);
        }

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, "GAME OVER", Some("R TO RESTART"));
        } else if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, "PAUSED", Some("P TO RESUME"));
        }
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, None, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: i8,
        cell_y: i8,
        kind: PieceKind,
    ) {
        if cell_x < 0 || cell_x >= BOARD_WIDTH as i8 || cell_y < 0 {
            return;
        }
        let style = Style::new(piece_color(kind), WELL_BG);
        let px = start_x + 1 + cell_x as u16 * self.cell_w;
        let py = start_y + 1 + cell_y as u16;
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, '█', style);
        }
    }

    fn draw_ghost_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, cell_x: i8, cell_y: i8) {
        if cell_x < 0 || cell_x >= BOARD_WIDTH as i8 || cell_y < 0 {
            return;
        }
        let style = Style::new(Rgb::new(130, 130, 140), WELL_BG).dimmed();
        let px = start_x + 1 + cell_x as u16 * self.cell_w;
        let py = start_y + 1 + cell_y as u16;
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, '░', style);
        }
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, x: u16, y: u16, snap: &GameSnapshot) {
        let label = Style::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
        let value = Style::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0));

        fb.put_str(x, y, "NEXT", label);
        let next_style = Style::new(piece_color(snap.next), Rgb::new(0, 0, 0));
        for &(dx, dy) in shape(snap.next, Rotation::North).iter() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + 1 + dy as u16;
            for i in 0..self.cell_w {
                fb.put_char(px + i, py, '█', next_style);
            }
        }

        let stats_y = y + 5;
        fb.put_str(x, stats_y, "SCORE", label);
        fb.put_str(x, stats_y + 1, &format!("{:>10}", snap.score), value);
        fb.put_str(x, stats_y + 3, "HIGH", label);
        fb.put_str(x, stats_y + 4, &format!("{:>10}", snap.high_score), value);
        fb.put_str(x, stats_y + 6, "LINES", label);
        fb.put_str(x, stats_y + 7, &format!("{:>10}", snap.lines), value);
        fb.put_str(x, stats_y + 9, "LEVEL", label);
        fb.put_str(x, stats_y + 10, &format!("{:>10}", snap.level), value);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        title: &str,
        hint: Option<&str>,
    ) {
        let style = Style::new(Rgb::new(255, 255, 255), WELL_BG);
        let mid_y = start_y + 1 + VISIBLE_HEIGHT as u16 / 2 - 1;
        let tx = start_x + (frame_w.saturating_sub(title.len() as u16)) / 2;
        fb.put_str(tx, mid_y, title, style);
        if let Some(hint) = hint {
            let hx = start_x + (frame_w.saturating_sub(hint.len() as u16)) / 2;
            fb.put_str(hx, mid_y + 2, hint, style.dimmed());
        }
    }
}
