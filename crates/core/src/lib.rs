//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the move history and the replay logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same actions always produce the same state
//! - **Testable**: every rule is checked by unit tests
//! - **Portable**: any front-end can drive it with [`GameAction`](types::GameAction)s
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board snapshot
//! - [`win`]: detection of the first completed line
//! - [`game_state`]: history, step number, turn and sort-order flags
//! - [`render`]: the per-frame render model (board, status, move list)
//! - [`error`]: typed rejections
//!
//! # Rules
//!
//! - X always moves first; turns alternate.
//! - A move on a taken cell, or on a board that already has a winner, is
//!   rejected and leaves the state untouched.
//! - Jumping to an earlier step and then moving discards the later steps.
//! - The move list can be shown oldest-first or newest-first; move numbers
//!   always count from the start of the game.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{GameState, GameStatus};
//! use tui_tictactoe_types::{GameAction, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_action(GameAction::CellClicked(cell)).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! // Replay from the start; the history is kept until a new move is made.
//! game.apply_action(GameAction::HistoryStepClicked(0)).unwrap();
//! assert_eq!(game.history().len(), 6);
//! game.apply_action(GameAction::CellClicked(0)).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod render;
pub mod win;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ActionError, JumpError, MoveRejected};
pub use game_state::{GameState, MoveRecord};
pub use render::{CellView, GameStatus, MoveEntry, RenderModel};
pub use win::{evaluate, WinResult, LINES};
