//! Board module - the 3x3 grid snapshot
//!
//! A `Board` is a small `Copy` value. Move records own their board outright, so
//! a snapshot can never be changed through another record.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Player, CELL_COUNT};

/// 3x3 board stored as 9 cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parse a 9-character layout string.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and space are empty.
    /// Returns `None` on any other character or on a length other than 9.
    ///
    /// ```
    /// use tui_tictactoe_core::Board;
    /// use tui_tictactoe_types::Player;
    ///
    /// let board = Board::parse("XXXOO....").unwrap();
    /// assert_eq!(board.get(2), Some(Some(Player::X)));
    /// assert_eq!(board.get(5), Some(None));
    /// ```
    pub fn parse(layout: &str) -> Option<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut n = 0;
        for ch in layout.chars() {
            if n >= CELL_COUNT {
                return None;
            }
            cells[n] = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '-' | '_' | ' ' => None,
                _ => return None,
            };
            n += 1;
        }
        (n == CELL_COUNT).then_some(Self { cells })
    }

    /// Get a cell. Returns `None` if the index is off the board.
    pub fn get(&self, index: u8) -> Option<Cell> {
        self.cells.get(index as usize).copied()
    }

    /// Return a copy of this board with `index` set to `player`.
    ///
    /// The receiver is left untouched. Returns `None` if the index is off the board.
    pub fn with_mark(&self, index: u8, player: Player) -> Option<Self> {
        let mut next = *self;
        let slot = next.cells.get_mut(index as usize)?;
        *slot = Some(player);
        Some(next)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_empty_at(&self, index: u8) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// True when all 9 cells are taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for i in 0..CELL_COUNT as u8 {
            assert!(board.is_empty_at(i));
        }
        assert!(!board.is_full());
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Player::X).unwrap();
        assert_eq!(board.get(4), Some(None));
        assert_eq!(next.get(4), Some(Some(Player::X)));
    }

    #[test]
    fn off_board_access() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(board.with_mark(9, Player::O).is_none());
        assert!(!board.is_empty_at(42));
    }

    #[test]
    fn parse_layouts() {
        let full = Board::parse("XOXXOOOXX").unwrap();
        assert!(full.is_full());
        assert!(Board::parse("XOX").is_none());
        assert!(Board::parse("XOXXOOOXXX").is_none());
        assert!(Board::parse("XOXXOOOX?").is_none());
    }
}
