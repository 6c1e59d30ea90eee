//! Rejections returned by the game state machine.
//!
//! A rejected call never changes the state. The terminal front-end treats every
//! rejection as "nothing happened".

use derive_more::{Display, Error, From};

use crate::types::Player;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    /// The target cell already holds a mark.
    #[display("cell {index} is already occupied")]
    CellOccupied { index: u8 },

    /// The board being viewed already has a winner.
    #[display("game is already won by {winner}")]
    GameOver { winner: Player },

    /// The index is not a board cell.
    #[display("cell {index} is off the board")]
    OutOfRange { index: u8 },
}

/// Why a history jump was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    #[display("step {step} is out of range for a history of {len} records")]
    OutOfRange { step: usize, len: usize },
}

/// Any rejection from [`GameState::apply_action`](crate::GameState::apply_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ActionError {
    #[display("move rejected: {_0}")]
    Move(MoveRejected),
    #[display("jump rejected: {_0}")]
    Jump(JumpError),
}
