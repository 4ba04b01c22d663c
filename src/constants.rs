pub const DEFAULT_BOARD_WIDTH: usize = 7;
pub const DEFAULT_BOARD_HEIGHT: usize = 6;

// Number of contiguous same-player cells that wins the game
pub const WIN_LENGTH: usize = 4;

// How long the event loop blocks waiting for a key (milliseconds)
pub const EVENT_POLL_MS: u64 = 100;
