//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,input,term,types}`
//! and adds the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub use config::AppConfig;
