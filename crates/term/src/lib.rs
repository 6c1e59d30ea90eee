//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and instead renders into a framebuffer that is flushed to the
//! terminal with crossterm.
//!
//! - [`game_view`] draws a [`RenderModel`](core::RenderModel) (pure, testable)
//! - [`renderer`] owns the terminal and writes only what changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
