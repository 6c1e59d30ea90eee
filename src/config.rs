//! Runtime configuration for the terminal binary.
//!
//! Everything comes from environment variables; invalid values fall back to
//! the defaults.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TICTACTOE_LOG_PATH` | unset | Write logs to this file (no logging when unset) |
//! | `TICTACTOE_CELL_WIDTH` | 5 | Terminal columns per board cell (3..=9) |
//! | `TICTACTOE_ANCHOR` | `center` | Vertical placement: `center` or `top` |
//!
//! The log filter itself is read from `RUST_LOG` (see [`crate::logging`]).

use std::env;
use std::path::PathBuf;

use crate::term::{AnchorY, GameView};

pub const DEFAULT_CELL_WIDTH: u16 = 5;
pub const MIN_CELL_WIDTH: u16 = 3;
pub const MAX_CELL_WIDTH: u16 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_path: Option<PathBuf>,
    pub cell_width: u16,
    pub anchor_y: AnchorY,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
            anchor_y: AnchorY::Center,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("TICTACTOE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let cell_width = lookup("TICTACTOE_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(|w| w.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        let anchor_y = match lookup("TICTACTOE_ANCHOR")
            .map(|s| s.trim().to_lowercase())
            .as_deref()
        {
            Some("top") => AnchorY::Top,
            _ => AnchorY::Center,
        };

        Self {
            log_path,
            cell_width,
            anchor_y,
        }
    }

    /// Game view configured for this terminal.
    pub fn game_view(&self) -> GameView {
        GameView::new(self.cell_width, 1).with_anchor_y(self.anchor_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("TICTACTOE_LOG_PATH", " /tmp/ttt.log "),
            ("TICTACTOE_CELL_WIDTH", "7"),
            ("TICTACTOE_ANCHOR", "TOP"),
        ]);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/ttt.log")));
        assert_eq!(cfg.cell_width, 7);
        assert_eq!(cfg.anchor_y, AnchorY::Top);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("TICTACTOE_LOG_PATH", "   "),
            ("TICTACTOE_CELL_WIDTH", "wide"),
            ("TICTACTOE_ANCHOR", "bottom"),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn cell_width_is_clamped() {
        assert_eq!(config(&[("TICTACTOE_CELL_WIDTH", "1")]).cell_width, MIN_CELL_WIDTH);
        assert_eq!(config(&[("TICTACTOE_CELL_WIDTH", "40")]).cell_width, MAX_CELL_WIDTH);
    }
}
