use crossterm::event::KeyCode;

use crate::app::App;

/// Map a key press to an app action. Quit and restart are handled by
/// the main loop before this is called; everything unrecognized is
/// ignored.
pub fn handle_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            app.move_cursor_left();
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            app.move_cursor_right();
        }
        KeyCode::Down | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s')
        | KeyCode::Char('S') => {
            app.drop_piece();
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Column hotkeys are 1-based
            app.select_column(c as usize - '1' as usize);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
    use crate::game::Player;
    use ratatui::style::Color;

    fn app() -> App {
        App::new(
            DEFAULT_BOARD_HEIGHT,
            DEFAULT_BOARD_WIDTH,
            Color::Red,
            Color::Blue,
        )
    }

    #[test]
    fn test_arrows_move_cursor() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 2);
        handle_input(&mut app, KeyCode::Right);
        handle_input(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session.board().get(5, 3), Some(Player::One));
    }

    #[test]
    fn test_digit_drops_in_that_column() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('7'));
        assert_eq!(app.cursor, 6);
        assert_eq!(app.session.board().get(5, 6), Some(Player::One));
    }

    #[test]
    fn test_digit_beyond_board_is_ignored() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('9'));
        assert_eq!(app.cursor, 3);
        for col in 0..app.session.board().width() {
            assert_eq!(app.session.board().get(5, col), None);
        }
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('x'));
        assert_eq!(app.cursor, 3);
        assert!(app.message.is_none());
    }
}
