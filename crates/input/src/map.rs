//! Key mapping from terminal events to input intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks for, before focus and cursors are taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Click a board cell directly (row-major index).
    Cell(u8),
    /// Move the cursor of the focused pane.
    Move(Direction),
    /// Click whatever the cursor is on.
    Activate,
    /// Switch focus between the board and the move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Jump back to the empty board.
    GameStart,
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyIntent> {
    match key.code {
        // Direct cell selection, 1-9 in reading order
        KeyCode::Char(c @ '1'..='9') => Some(KeyIntent::Cell(c as u8 - b'1')),

        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyIntent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyIntent::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyIntent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyIntent::Move(Direction::Right))
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyIntent::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(KeyIntent::SwitchFocus),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('o') | KeyCode::Char('O') => {
            Some(KeyIntent::ToggleSort)
        }
        KeyCode::Home | KeyCode::Char('g') | KeyCode::Char('G') => Some(KeyIntent::GameStart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(KeyIntent::Cell(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(KeyIntent::Cell(8))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(KeyIntent::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(KeyIntent::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(KeyIntent::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(KeyIntent::Move(Direction::Down))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(KeyIntent::Activate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(KeyIntent::SwitchFocus)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(KeyIntent::ToggleSort)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Home)),
            Some(KeyIntent::GameStart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
