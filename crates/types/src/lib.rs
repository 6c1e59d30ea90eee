//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game rules attached, making them usable in
//! any context (core logic, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid stored as 9 cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A cell index `i` sits at row `i / 3` and column `i % 3`.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{GameAction, Location, Player, BOARD_SIDE, CELL_COUNT};
//!
//! assert_eq!(BOARD_SIDE, 3);
//! assert_eq!(CELL_COUNT, 9);
//!
//! assert_eq!(Player::X.opponent(), Player::O);
//! assert_eq!(Player::from_str("o"), Some(Player::O));
//!
//! let loc = Location::from_index(5);
//! assert_eq!((loc.row, loc.col), (1, 2));
//! assert_eq!(loc.index(), 5);
//!
//! assert_eq!(GameAction::from_str("cell:4"), Some(GameAction::CellClicked(4)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_SIDE: u8 = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Upper bound on history length: the empty board plus one record per cell.
pub const MAX_HISTORY: usize = CELL_COUNT + 1;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player that moves after this one.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player whose turn it is given the `x_is_next` flag.
    pub fn from_x_is_next(x_is_next: bool) -> Self {
        if x_is_next {
            Player::X
        } else {
            Player::O
        }
    }

    /// Parse a player mark (case-insensitive).
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::from_str("x"), Some(Player::X));
    /// assert_eq!(Player::from_str("O"), Some(Player::O));
    /// assert_eq!(Player::from_str("-"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Player::X),
            "o" => Some(Player::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(Player)`: taken by that player
pub type Cell = Option<Player>;

/// Row/column position of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: u8,
    pub col: u8,
}

impl Location {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Location of a row-major cell index. The index must be below [`CELL_COUNT`].
    pub fn from_index(index: u8) -> Self {
        Self {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        }
    }

    /// Row-major cell index.
    pub fn index(&self) -> u8 {
        self.row * BOARD_SIDE + self.col
    }
}

/// Actions the UI layer forwards into the game
///
/// These are the only three inputs the state machine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// A board cell was clicked (row-major index 0-8)
    CellClicked(u8),
    /// A move-list entry was clicked (forward-time step index)
    HistoryStepClicked(usize),
    /// The sort button was clicked
    SortToggleClicked,
}

impl GameAction {
    /// Parse an action from its textual form.
    ///
    /// Accepted forms: `cell:<index>`, `step:<index>`, `sort`.
    ///
    /// ```
    /// use tui_tictactoe_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cell:0"), Some(GameAction::CellClicked(0)));
    /// assert_eq!(GameAction::from_str("step:3"), Some(GameAction::HistoryStepClicked(3)));
    /// assert_eq!(GameAction::from_str("SORT"), Some(GameAction::SortToggleClicked));
    /// assert_eq!(GameAction::from_str("cell:x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if lower == "sort" {
            return Some(GameAction::SortToggleClicked);
        }
        let (kind, arg) = lower.split_once(':')?;
        match kind {
            "cell" => arg.parse().ok().map(GameAction::CellClicked),
            "step" => arg.parse().ok().map(GameAction::HistoryStepClicked),
            _ => None,
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameAction::CellClicked(i) => write!(f, "cell:{i}"),
            GameAction::HistoryStepClicked(step) => write!(f, "step:{step}"),
            GameAction::SortToggleClicked => f.write_str("sort"),
        }
    }
}

/// Pane that receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    Board,
    History,
}

/// Keyboard cursor position, shared between input handling and the view.
///
/// `row` indexes the move list in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub focus: Focus,
    pub cell: u8,
    pub row: usize,
}
