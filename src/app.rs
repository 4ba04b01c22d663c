use ratatui::style::Color;

use crate::game::{GameSession, GameStatus, Player};

/// Everything the UI needs between frames: the session itself plus
/// the column selector and the one-line status message. The session
/// knows nothing about any of this.
pub struct App {
    pub session: GameSession,
    pub cursor: usize,
    pub message: Option<String>,
    p1_color: Color,
    p2_color: Color,
}

impl App {
    pub fn new(height: usize, width: usize, p1_color: Color, p2_color: Color) -> Self {
        App {
            session: GameSession::new(height, width),
            cursor: width / 2,
            message: None,
            p1_color,
            p2_color,
        }
    }

    pub fn player_color(&self, player: Player) -> Color {
        match player {
            Player::One => self.p1_color,
            Player::Two => self.p2_color,
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor + 1 < self.session.board().width() {
            self.cursor += 1;
        }
    }

    /// Jump the selector to `col` and drop there (digit hotkeys).
    /// Columns beyond the board are ignored.
    pub fn select_column(&mut self, col: usize) {
        if col < self.session.board().width() {
            self.cursor = col;
            self.drop_piece();
        }
    }

    /// Drop into the selected column. Rejected moves leave the game
    /// untouched and only set the message line.
    pub fn drop_piece(&mut self) {
        self.message = None;

        match self.session.play(self.cursor) {
            Ok(_) => match self.session.status() {
                GameStatus::Won(player) => {
                    self.message = Some(format!("{} wins!", player.name()));
                }
                GameStatus::Tied => {
                    self.message = Some("Tie game!".to_string());
                }
                GameStatus::Turn(_) => {}
            },
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// New game with the same board dimensions
    pub fn restart(&mut self) {
        let height = self.session.board().height();
        let width = self.session.board().width();
        self.session.reset(height, width);
        self.cursor = width / 2;
        self.message = None;
    }
}
