use thiserror::Error;

use crate::constants::WIN_LENGTH;
use crate::game::player::Player;

/// Reasons a move attempt is ignored. None of these are fatal: the
/// caller treats them as no-ops and the turn does not advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
    /// Returned by the session, never by the board itself.
    #[error("the game is already over")]
    GameOver,
}

/// The grid. Row 0 is the top, row `height - 1` is the bottom.
/// Pieces fill each column bottom-up; a cell is occupied only if
/// every cell below it in the same column is occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position. Both indices must be in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col).is_some()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// This is the only mutation path for the grid.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            if self.get(row, col).is_none() {
                self.cells[row * self.width + col] = Some(player);
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Check whether `player` has four in a row anywhere on the board.
    ///
    /// Every cell is a candidate line start, with four line shapes per
    /// cell: right, down, down-right, down-left. A line wins when all
    /// four cells are in bounds and owned by `player`. The scan
    /// short-circuits on the first winning line. O(height * width) per
    /// call, which is fine at these board sizes with a human driving
    /// move frequency.
    pub fn check_win(&self, player: Player) -> bool {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for row in 0..self.height {
            for col in 0..self.width {
                for (dr, dc) in DIRECTIONS {
                    let line = (0..WIN_LENGTH as isize).all(|i| {
                        self.owner_at(row as isize + dr * i, col as isize + dc * i)
                            == Some(player)
                    });
                    if line {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Bounds-checked lookup: out-of-bounds coordinates read as empty,
    /// so a line running off the edge never counts toward a win.
    fn owner_at(&self, row: isize, col: isize) -> Option<Player> {
        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            return None;
        }
        self.get(row as usize, col as usize)
    }
}
