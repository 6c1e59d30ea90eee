//! Cursor and focus handling.
//!
//! Turns [`KeyIntent`]s into [`GameAction`]s. The move-list cursor indexes the
//! list in display order, so resolving it to a jump target needs the current
//! [`RenderModel`].

use crate::core::RenderModel;
use crate::map::{Direction, KeyIntent};
use crate::types::{Cursor, Focus, GameAction, BOARD_SIDE, CELL_COUNT};

/// Tracks focus and the two cursors between key presses.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    cursor: Cursor,
}

impl InputHandler {
    /// Board focus, cursor on the top-left cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board focus with the cursor on `cell` (clamped to the board).
    pub fn with_cell(cell: u8) -> Self {
        Self {
            cursor: Cursor {
                cell: cell.min(CELL_COUNT as u8 - 1),
                ..Cursor::default()
            },
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn focus(&self) -> Focus {
        self.cursor.focus
    }

    /// Resolve one intent against the model currently on screen.
    pub fn handle_intent(&mut self, intent: KeyIntent, model: &RenderModel) -> Option<GameAction> {
        match intent {
            KeyIntent::Cell(index) => {
                self.cursor.cell = index.min(CELL_COUNT as u8 - 1);
                Some(GameAction::CellClicked(index))
            }
            KeyIntent::Move(dir) => {
                match self.cursor.focus {
                    Focus::Board => self.move_board_cursor(dir),
                    Focus::History => self.move_history_cursor(dir, model.moves.len()),
                }
                None
            }
            KeyIntent::Activate => match self.cursor.focus {
                Focus::Board => Some(GameAction::CellClicked(self.cursor.cell)),
                Focus::History => model
                    .moves
                    .get(self.cursor.row)
                    .map(|entry| GameAction::HistoryStepClicked(entry.step)),
            },
            KeyIntent::SwitchFocus => {
                self.cursor.focus = match self.cursor.focus {
                    Focus::Board => {
                        self.cursor.row = model.current_row().unwrap_or(0);
                        Focus::History
                    }
                    Focus::History => Focus::Board,
                };
                None
            }
            KeyIntent::ToggleSort => {
                // Keep the cursor on the same entry once the list flips.
                let len = model.moves.len();
                if len > 0 {
                    self.cursor.row = len - 1 - self.cursor.row.min(len - 1);
                }
                Some(GameAction::SortToggleClicked)
            }
            KeyIntent::GameStart => Some(GameAction::HistoryStepClicked(0)),
        }
    }

    /// Re-anchor the cursors after the model changed.
    ///
    /// Outside the move list the row cursor follows the current step; inside
    /// it the row is only clamped.
    pub fn sync(&mut self, model: &RenderModel) {
        let len = model.moves.len();
        match self.cursor.focus {
            Focus::Board => self.cursor.row = model.current_row().unwrap_or(0),
            Focus::History => self.cursor.row = self.cursor.row.min(len.saturating_sub(1)),
        }
    }

    fn move_board_cursor(&mut self, dir: Direction) {
        let side = BOARD_SIDE;
        let row = self.cursor.cell / side;
        let col = self.cursor.cell % side;
        let (row, col) = match dir {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(side - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(side - 1)),
        };
        self.cursor.cell = row * side + col;
    }

    fn move_history_cursor(&mut self, dir: Direction, len: usize) {
        let last = len.saturating_sub(1);
        self.cursor.row = match dir {
            Direction::Up => self.cursor.row.saturating_sub(1),
            Direction::Down => (self.cursor.row + 1).min(last),
            Direction::Left | Direction::Right => self.cursor.row,
        };
    }
}
