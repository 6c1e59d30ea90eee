//! GameView: maps a `core::RenderModel` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellView, GameStatus, RenderModel};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cursor, Focus, Player, BOARD_SIDE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorY {
    #[default]
    Center,
    Top,
}

/// Columns between the board frame and the side panel.
pub const PANEL_GAP: u16 = 3;

/// Width reserved for the side panel (longest move label plus cursor marker).
pub const PANEL_WIDTH: u16 = 34;

/// Panels narrower than this are not drawn at all.
const MIN_PANEL_WIDTH: u16 = 12;

const HELP: [&str; 2] = ["1-9/Enter play  Tab focus", "s sort  g start  q quit"];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const WIN_BG: Rgb = Rgb::new(110, 90, 20);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal renderer for the tic-tac-toe screen: board on the left, status
/// and move list on the right.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 5,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the board frame, grid lines included.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = BOARD_SIDE as u16;
        (
            side * self.cell_w + side + 1,
            side * self.cell_h + side + 1,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        model: &RenderModel,
        cursor: &Cursor,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let panel_h = panel_height(model);
        let content_w = frame_w + PANEL_GAP + PANEL_WIDTH;
        let content_h = frame_h.max(panel_h);

        let start_x = viewport.width.saturating_sub(content_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        let grid = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_grid(fb, start_x, start_y, grid);

        let board_focus = cursor.focus == Focus::Board;
        for (i, cell) in model.cells.iter().enumerate() {
            let i = i as u8;
            let on_cursor = board_focus && cursor.cell == i;
            self.draw_cell(fb, start_x, start_y, i, cell, on_cursor);
        }

        let panel_x = start_x + frame_w + PANEL_GAP;
        self.draw_side_panel(fb, model, cursor, viewport, panel_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, model: &RenderModel, cursor: &Cursor, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, cursor, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let (frame_w, frame_h) = self.frame_size();
        let side = BOARD_SIDE as u16;

        for k in 0..=side {
            let line_y = y + k * (self.cell_h + 1);
            let line_x = x + k * (self.cell_w + 1);
            for dx in 0..frame_w {
                fb.put_char(x + dx, line_y, '─', style);
            }
            for dy in 0..frame_h {
                fb.put_char(line_x, y + dy, '│', style);
            }
        }

        for row_line in 0..=side {
            for col_line in 0..=side {
                let ch = junction(row_line, col_line, side);
                fb.put_char(
                    x + col_line * (self.cell_w + 1),
                    y + row_line * (self.cell_h + 1),
                    ch,
                    style,
                );
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        index: u8,
        cell: &CellView,
        on_cursor: bool,
    ) {
        let side = BOARD_SIDE;
        let col = (index % side) as u16;
        let row = (index / side) as u16;
        let px = start_x + 1 + col * (self.cell_w + 1);
        let py = start_y + 1 + row * (self.cell_h + 1);

        let bg = if cell.highlight { WIN_BG } else { BOARD_BG };
        let mut style = CellStyle::plain(Rgb::new(90, 90, 100), bg);
        let ch = match cell.value {
            Some(player) => {
                style = CellStyle::plain(player_color(player), bg).bold();
                player.as_str().chars().next().unwrap_or(' ')
            }
            // Empty cells show their key as a dim hint.
            None => {
                style = style.dim();
                char::from(b'1' + index)
            }
        };
        if on_cursor {
            style = style.reversed();
        }

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        model: &RenderModel,
        cursor: &Cursor,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_WIDTH {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let status_style = match model.status {
            GameStatus::Winner(p) => CellStyle::plain(player_color(p), PANEL_BG).bold(),
            GameStatus::Draw => label,
            GameStatus::NextPlayer(_) => value,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, &model.status_text, status_style);
        y = y.saturating_add(2);

        let heading = if model.ascending {
            "MOVES (oldest first)"
        } else {
            "MOVES (newest first)"
        };
        fb.put_str(panel_x, y, heading, label);
        y = y.saturating_add(1);

        let history_focus = cursor.focus == Focus::History;
        for (row, entry) in model.moves.iter().enumerate() {
            if y >= viewport.height {
                return;
            }
            let marker = if history_focus && cursor.row == row {
                "> "
            } else {
                "  "
            };
            let mut style = if entry.is_current { label } else { value };
            if history_focus && cursor.row == row {
                style = style.reversed();
            }
            let x = panel_x + fb.put_str(panel_x, y, marker, value);
            fb.put_str(x, y, &entry.label(), style);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        let dim = value.dim();
        for line in HELP {
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

/// Rows the side panel needs: status, blank, heading, entries, blank, help.
fn panel_height(model: &RenderModel) -> u16 {
    (3 + model.moves.len() + 1 + HELP.len()) as u16
}

fn junction(row_line: u16, col_line: u16, side: u16) -> char {
    match (row_line, col_line) {
        (0, 0) => '┌',
        (0, c) if c == side => '┐',
        (r, 0) if r == side => '└',
        (r, c) if r == side && c == side => '┘',
        (0, _) => '┬',
        (r, _) if r == side => '┴',
        (_, 0) => '├',
        (_, c) if c == side => '┤',
        _ => '┼',
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => Rgb::new(80, 220, 220),
        Player::O => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junctions_cover_the_frame() {
        assert_eq!(junction(0, 0, 3), '┌');
        assert_eq!(junction(0, 3, 3), '┐');
        assert_eq!(junction(3, 0, 3), '└');
        assert_eq!(junction(3, 3, 3), '┘');
        assert_eq!(junction(0, 1, 3), '┬');
        assert_eq!(junction(3, 2, 3), '┴');
        assert_eq!(junction(1, 0, 3), '├');
        assert_eq!(junction(2, 3, 3), '┤');
        assert_eq!(junction(1, 2, 3), '┼');
    }

    #[test]
    fn frame_size_default() {
        assert_eq!(GameView::default().frame_size(), (19, 7));
        assert_eq!(GameView::new(3, 2).frame_size(), (13, 10));
    }
}
