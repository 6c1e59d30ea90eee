//! Win evaluation.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Player;

/// The 8 winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of [`evaluate`].
///
/// `caused_cells` is either empty or holds exactly the 3 indices of the
/// completed line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    pub winner: Option<Player>,
    pub caused_cells: ArrayVec<u8, 3>,
}

impl WinResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// True if `index` is part of the completed line.
    pub fn contains(&self, index: u8) -> bool {
        self.caused_cells.contains(&index)
    }
}

/// Find the first completed line on `board`.
///
/// Lines are checked in [`LINES`] order, so a board completing several lines
/// always reports the earliest one. Does not tell a draw from an ongoing game.
pub fn evaluate(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let Some(Some(player)) = board.get(a) else {
            continue;
        };
        if board.get(b) == Some(Some(player)) && board.get(c) == Some(Some(player)) {
            return WinResult {
                winner: Some(player),
                caused_cells: ArrayVec::from(line),
            };
        }
    }
    WinResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(line: [u8; 3], player: Player) -> Board {
        let mut board = Board::new();
        for i in line {
            board = board.with_mark(i, player).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(evaluate(&Board::new()), WinResult::none());
    }

    #[test]
    fn every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let result = evaluate(&board_with(line, player));
                assert_eq!(result.winner, Some(player), "line {:?}", line);
                assert_eq!(result.caused_cells.as_slice(), &line);
            }
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = Board::parse("XXO......").unwrap();
        assert!(!evaluate(&board).has_winner());
    }

    #[test]
    fn full_board_without_line_is_no_winner() {
        // X O X
        // X O O
        // O X X
        let board = Board::parse("XOXXOOOXX").unwrap();
        let result = evaluate(&board);
        assert_eq!(result.winner, None);
        assert!(result.caused_cells.is_empty());
    }

    #[test]
    fn first_line_in_order_wins_ties() {
        // Unreachable in play, but must be deterministic:
        // top row and left column both X -> row (0,1,2) comes first.
        let board = Board::parse("XXXX..X..").unwrap();
        let result = evaluate(&board);
        assert_eq!(result.caused_cells.as_slice(), &[0, 1, 2]);

        // Both diagonals: (0,4,8) before (2,4,6).
        let board = Board::parse("O.O.O.O.O").unwrap();
        let result = evaluate(&board);
        assert_eq!(result.winner, Some(Player::O));
        assert_eq!(result.caused_cells.as_slice(), &[0, 4, 8]);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let board = Board::parse("OX.OX.O..").unwrap();
        let first = evaluate(&board);
        for _ in 0..3 {
            assert_eq!(evaluate(&board), first);
        }
        assert!(first.contains(3));
        assert!(!first.contains(1));
    }
}
