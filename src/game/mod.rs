pub mod board;
pub mod player;
pub mod session;

pub use board::{Board, MoveError};
pub use player::Player;
pub use session::{GameSession, GameStatus};
