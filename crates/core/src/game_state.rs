//! Game state module - history, replay position and turn tracking
//!
//! `GameState` is the single owner of mutable game data. It changes only
//! through [`GameState::apply_move`], [`GameState::jump_to`] and
//! [`GameState::toggle_sort_order`] (or [`GameState::apply_action`], which
//! dispatches to them). Everything shown to the player is derived fresh from
//! the history and the step number.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::Board;
use crate::error::{ActionError, JumpError, MoveRejected};
use crate::render::{GameStatus, MoveEntry, RenderModel};
use crate::types::{GameAction, Location, Player, CELL_COUNT, MAX_HISTORY};
use crate::win::{evaluate, WinResult};

/// One history entry: a board snapshot and the move that produced it.
///
/// The game-start record has no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    squares: Board,
    location: Option<Location>,
}

impl MoveRecord {
    /// The game-start record (empty board).
    pub fn start() -> Self {
        Self {
            squares: Board::new(),
            location: None,
        }
    }

    pub fn squares(&self) -> &Board {
        &self.squares
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Never empty. Records are only pushed or truncated, never edited.
    history: Vec<MoveRecord>,
    /// Forward-time index of the record being viewed.
    step_number: usize,
    /// Display order of the move list. Has no effect on `step_number`.
    ascending: bool,
    x_is_next: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: one empty-board record, step 0, X to move, ascending list.
    pub fn new() -> Self {
        let mut history = Vec::with_capacity(MAX_HISTORY);
        history.push(MoveRecord::start());
        Self {
            history,
            step_number: 0,
            ascending: true,
            x_is_next: true,
        }
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    pub fn is_ascending_order(&self) -> bool {
        self.ascending
    }

    /// Player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Record at the current step.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step_number]
    }

    /// Board at the current step, always in forward-time indexing.
    pub fn current_board(&self) -> &Board {
        &self.current().squares
    }

    pub fn win_result(&self) -> WinResult {
        evaluate(self.current_board())
    }

    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match evaluate(board).winner {
            Some(winner) => GameStatus::Winner(winner),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entry = |(step, record): (usize, &MoveRecord)| MoveEntry {
            step,
            location: record.location,
            is_current: step == self.step_number,
        };
        let iter = self.history.iter().enumerate();
        if self.ascending {
            iter.map(entry).collect()
        } else {
            iter.rev().map(entry).collect()
        }
    }

    /// Everything the view needs for one frame.
    pub fn render_model(&self) -> RenderModel {
        RenderModel::new(
            *self.current_board(),
            self.win_result(),
            self.status(),
            self.move_list(),
            self.ascending,
        )
    }

    /// Place the next player's mark on `index`.
    ///
    /// Any future records beyond the current step are discarded first, then
    /// exactly one record is appended. On rejection the state is unchanged.
    pub fn apply_move(&mut self, index: u8) -> Result<(), MoveRejected> {
        if index as usize >= CELL_COUNT {
            return Err(MoveRejected::OutOfRange { index });
        }
        let current = *self.current();
        if let Some(winner) = evaluate(&current.squares).winner {
            return Err(MoveRejected::GameOver { winner });
        }
        let player = self.next_player();
        let squares = match current.squares.get(index) {
            Some(None) => current
                .squares
                .with_mark(index, player)
                .ok_or(MoveRejected::OutOfRange { index })?,
            _ => return Err(MoveRejected::CellOccupied { index }),
        };

        self.history.truncate(self.step_number + 1);
        self.history.push(MoveRecord {
            squares,
            location: Some(Location::from_index(index)),
        });
        self.step_number = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        trace!(index, %player, step = self.step_number, "move applied");
        Ok(())
    }

    /// View the record at forward-time index `step`.
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        trace!(step, "jumped");
        Ok(())
    }

    /// Flip the move-list display order.
    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
        trace!(ascending = self.ascending, "sort order toggled");
    }

    /// Route a UI action to the matching operation.
    pub fn apply_action(&mut self, action: GameAction) -> Result<(), ActionError> {
        let result = match action {
            GameAction::CellClicked(index) => self.apply_move(index).map_err(ActionError::from),
            GameAction::HistoryStepClicked(step) => self.jump_to(step).map_err(ActionError::from),
            GameAction::SortToggleClicked => {
                self.toggle_sort_order();
                Ok(())
            }
        };
        if let Err(err) = &result {
            debug!(%action, %err, "action ignored");
        }
        result
    }
}
