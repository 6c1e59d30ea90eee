//! Integration tests for the main event loop: keys -> actions -> state -> frame

use crossterm::event::{KeyCode, KeyEvent};

use tui_tictactoe::core::{GameState, GameStatus};
use tui_tictactoe::input::{handle_key_event, should_quit, InputHandler};
use tui_tictactoe::term::{GameView, Viewport};
use tui_tictactoe::types::{Focus, Player};

/// Feed one key through the same path the binary uses.
fn press(game: &mut GameState, input: &mut InputHandler, code: KeyCode) {
    let key = KeyEvent::from(code);
    assert!(!should_quit(key));
    let model = game.render_model();
    input.sync(&model);
    if let Some(intent) = handle_key_event(key) {
        if let Some(action) = input.handle_intent(intent, &model) {
            let _ = game.apply_action(action);
        }
    }
    input.sync(&game.render_model());
}

fn press_all(game: &mut GameState, input: &mut InputHandler, codes: &[KeyCode]) {
    for &code in codes {
        press(game, input, code);
    }
}

#[test]
fn test_digit_keys_play_a_game() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    press_all(
        &mut game,
        &mut input,
        &[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Char('2'),
            KeyCode::Char('4'),
            KeyCode::Char('3'),
        ],
    );
    assert_eq!(game.status(), GameStatus::Winner(Player::X));

    // Further clicks are ignored.
    press(&mut game, &mut input, KeyCode::Char('9'));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_cursor_keys_play_moves() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    press_all(
        &mut game,
        &mut input,
        &[KeyCode::Right, KeyCode::Down, KeyCode::Enter],
    );
    assert_eq!(game.current_board().get(4), Some(Some(Player::X)));

    // Same cell again is a no-op.
    press(&mut game, &mut input, KeyCode::Char(' '));
    assert_eq!(game.history().len(), 2);
    assert!(!game.x_is_next());
}

#[test]
fn test_replay_through_move_list() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    press_all(
        &mut game,
        &mut input,
        &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')],
    );

    // Focus the list, go up twice (step 1), click.
    press_all(
        &mut game,
        &mut input,
        &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter],
    );
    assert_eq!(input.focus(), Focus::History);
    assert_eq!(game.step_number(), 1);
    assert!(!game.x_is_next());
    assert_eq!(game.history().len(), 4);

    // Back to the board and play: future steps are dropped.
    press_all(&mut game, &mut input, &[KeyCode::Tab, KeyCode::Char('3')]);
    assert_eq!(input.focus(), Focus::Board);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_board().get(2), Some(Some(Player::O)));
}

#[test]
fn test_sort_key_and_game_start() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    press_all(
        &mut game,
        &mut input,
        &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('s')],
    );
    assert!(!game.is_ascending_order());
    assert_eq!(game.step_number(), 2);

    press(&mut game, &mut input, KeyCode::Char('g'));
    assert_eq!(game.step_number(), 0);
    assert!(game.x_is_next());
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_frame_follows_state() {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let before = view.render(&game.render_model(), &input.cursor(), vp);
    press(&mut game, &mut input, KeyCode::Char('5'));
    let after = view.render(&game.render_model(), &input.cursor(), vp);

    assert_ne!(before, after);
    assert!(after.text().contains("Next player: O"));
    assert!(after.text().contains("Go to move #1 (col, 1, row, 1)"));
}

#[test]
fn test_render_model_json_shape() {
    let mut game = GameState::new();
    for cell in [0, 4, 1, 3, 2] {
        game.apply_move(cell).unwrap();
    }
    game.toggle_sort_order();

    let json = serde_json::to_value(game.render_model()).unwrap();
    assert_eq!(json["status_text"], "Winner: X");
    assert_eq!(json["ascending"], false);
    assert_eq!(json["moves"][0]["step"], 5);
    assert_eq!(json["moves"][0]["is_current"], true);
    assert_eq!(json["moves"][5]["location"], serde_json::Value::Null);
    assert_eq!(json["cells"][2]["highlight"], true);
    assert_eq!(json["cells"][3]["highlight"], false);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
}
