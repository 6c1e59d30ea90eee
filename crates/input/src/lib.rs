//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Mapping is
//! split in two steps: [`map`] turns a key into a [`KeyIntent`] without any
//! state, and [`InputHandler`] resolves intents against the focused pane and
//! its cursor.

pub mod handler;
pub mod map;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, Direction, KeyIntent};
