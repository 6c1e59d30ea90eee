//! Render model handed to the UI layer after every event.
//!
//! Derived from [`GameState`](crate::GameState); never stored.

use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::types::{Cell, Location, Player, CELL_COUNT};
use crate::win::WinResult;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(p) => write!(f, "Winner: {p}"),
            GameStatus::Draw => f.write_str("Draw"),
            GameStatus::NextPlayer(p) => write!(f, "Next player: {p}"),
        }
    }
}

/// One clickable entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Forward-time index; also the jump target.
    pub step: usize,
    pub location: Option<Location>,
    pub is_current: bool,
}

impl MoveEntry {
    pub fn label(&self) -> String {
        match (self.step, self.location) {
            (0, _) | (_, None) => "Go to game start".to_string(),
            (m, Some(loc)) => format!("Go to move #{m} (col, {}, row, {})", loc.col, loc.row),
        }
    }
}

/// A board cell as the view sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub value: Cell,
    /// Part of the winning line.
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    pub cells: [CellView; CELL_COUNT],
    pub status: GameStatus,
    pub status_text: String,
    pub moves: Vec<MoveEntry>,
    pub ascending: bool,
}

impl RenderModel {
    pub fn new(
        board: Board,
        win: WinResult,
        status: GameStatus,
        moves: Vec<MoveEntry>,
        ascending: bool,
    ) -> Self {
        let mut cells = [CellView {
            value: None,
            highlight: false,
        }; CELL_COUNT];
        for (i, cell) in board.cells().iter().enumerate() {
            cells[i] = CellView {
                value: *cell,
                highlight: win.contains(i as u8),
            };
        }
        Self {
            cells,
            status,
            status_text: status.to_string(),
            moves,
            ascending,
        }
    }

    /// Position of the current step within `moves` (display order).
    pub fn current_row(&self) -> Option<usize> {
        self.moves.iter().position(|m| m.is_current)
    }
}
