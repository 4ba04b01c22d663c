use crate::game::board::{Board, MoveError};
use crate::game::player::Player;

/// The whole turn state machine. A terminal status carries no next
/// player, so the turn is frozen once the game ends; only `reset`
/// leaves `Won`/`Tied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Turn(Player),
    Won(Player),
    Tied,
}

/// One game: a board plus whose move it is. Created fresh at start
/// and on every restart; `play` is the only mutation path.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
}

impl GameSession {
    /// New session with an empty board. Player 1 moves first.
    pub fn new(height: usize, width: usize) -> Self {
        GameSession {
            board: Board::new(height, width),
            status: GameStatus::Turn(Player::One),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::Turn(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::Turn(_))
    }

    /// Drop a piece for the current player and return the landing row.
    ///
    /// Win is checked before tie, so a move that fills the board and
    /// completes a line reports `Won`. On any error the board and the
    /// turn are unchanged; callers may treat the error as a no-op.
    pub fn play(&mut self, column: usize) -> Result<usize, MoveError> {
        let player = self.current_player().ok_or(MoveError::GameOver)?;

        let row = self.board.drop_piece(column, player)?;

        self.status = if self.board.check_win(player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::Turn(player.other())
        };

        Ok(row)
    }

    /// Discard the old board entirely and start over
    pub fn reset(&mut self, height: usize, width: usize) {
        self.board = Board::new(height, width);
        self.status = GameStatus::Turn(Player::One);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

    fn session() -> GameSession {
        GameSession::new(DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH)
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.status(), GameStatus::Turn(Player::One));
        assert_eq!(session.current_player(), Some(Player::One));
        assert!(!session.is_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = session();

        session.play(3).unwrap();
        assert_eq!(session.status(), GameStatus::Turn(Player::Two));
        assert_eq!(session.board().get(5, 3), Some(Player::One));

        session.play(3).unwrap();
        assert_eq!(session.status(), GameStatus::Turn(Player::One));
        assert_eq!(session.board().get(4, 3), Some(Player::Two));
    }

    #[test]
    fn test_vertical_win_in_column_zero() {
        let mut session = session();

        // Player 1 stacks column 0; player 2 plays column 6 in between
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(6).unwrap();
        }
        session.play(0).unwrap();

        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert!(session.is_over());
        for row in 2..6 {
            assert_eq!(session.board().get(row, 0), Some(Player::One));
        }
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let mut session = session();
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(6).unwrap();
        }
        session.play(0).unwrap();
        assert_eq!(session.status(), GameStatus::Won(Player::One));

        // Terminal state: the move is a no-op and the status is frozen
        assert_eq!(session.play(1), Err(MoveError::GameOver));
        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert_eq!(session.current_player(), None);
        assert_eq!(session.board().get(5, 1), None);
    }

    #[test]
    fn test_full_column_does_not_advance_turn() {
        let mut session = session();

        // Six alternating drops fill column 0 without a win
        for _ in 0..6 {
            session.play(0).unwrap();
        }
        assert!(session.board().is_column_full(0));
        assert_eq!(session.status(), GameStatus::Turn(Player::One));

        let result = session.play(0);
        assert_eq!(result, Err(MoveError::ColumnFull(0)));
        assert_eq!(session.status(), GameStatus::Turn(Player::One));
    }

    #[test]
    fn test_out_of_range_column_is_rejected() {
        let mut session = session();
        assert_eq!(session.play(99), Err(MoveError::InvalidColumn(99)));
        assert_eq!(session.status(), GameStatus::Turn(Player::One));
    }

    #[test]
    fn test_tie_on_full_board_without_win() {
        // 4x4 board filled so no line of four exists anywhere:
        //   row 0:  2 1 2 1
        //   row 1:  2 1 2 1
        //   row 2:  1 2 1 2
        //   row 3:  1 2 1 2
        let mut session = GameSession::new(4, 4);
        let moves = [0, 1, 0, 1, 2, 3, 2, 3, 1, 0, 1, 0, 3, 2, 3, 2];

        for (i, &col) in moves.iter().enumerate() {
            assert!(!session.is_over(), "ended early at move {i}");
            session.play(col).unwrap();
        }

        assert_eq!(session.status(), GameStatus::Tied);
        assert!(session.board().is_full());
        assert_eq!(session.play(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_win_takes_precedence_over_tie_on_final_move() {
        // 4x4 board where player 2's last piece both fills the board
        // and completes the top row.
        let mut session = GameSession::new(4, 4);
        let moves = [0, 3, 0, 3, 1, 0, 1, 1, 2, 0, 2, 1, 2, 2, 3, 3];

        for (i, &col) in moves.iter().enumerate() {
            assert!(!session.is_over(), "ended early at move {i}");
            session.play(col).unwrap();
        }

        assert!(session.board().is_full());
        assert_eq!(session.status(), GameStatus::Won(Player::Two));
    }

    #[test]
    fn test_reset_starts_fresh() {
        let mut session = session();
        for _ in 0..3 {
            session.play(0).unwrap();
            session.play(6).unwrap();
        }
        session.play(0).unwrap();
        assert!(session.is_over());

        session.reset(4, 5);
        assert_eq!(session.status(), GameStatus::Turn(Player::One));
        assert_eq!(session.board().height(), 4);
        assert_eq!(session.board().width(), 5);
        for row in 0..4 {
            for col in 0..5 {
                assert_eq!(session.board().get(row, col), None);
            }
        }
    }
}
