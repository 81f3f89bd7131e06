//! The gameboard state machine.

use crate::error::MoveError;
use crate::rules;
use crate::types::{Board, Cell, GameStatus, Mark};
use tracing::{debug, instrument};

/// Gameboard state machine: the grid plus a count of placements.
///
/// The mark to move is derived from the parity of the move count (`X` on
/// even counts, `O` on odd), so turn state cannot drift out of sync with the
/// board. One long-lived instance is mutated in place by its own operations;
/// `reset` is the only way a mark ever leaves the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gameboard {
    pub(crate) board: Board,
    pub(crate) move_count: u8,
}

impl Gameboard {
    /// Creates a fresh board: all cells empty, zero moves, `X` to play.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
        }
    }

    /// Restores the initial state in place. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves_cleared = self.move_count, "Resetting gameboard");
        self.board = Board::new();
        self.move_count = 0;
    }

    /// The grid, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of successful placements since the last reset.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// The cell at the given index (0-8), `None` if out of range.
    pub fn cell(&self, pos: usize) -> Option<Cell> {
        self.board.get(pos)
    }

    /// The mark that plays next.
    pub fn to_move(&self) -> Mark {
        if self.move_count % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The mark that placed most recently, `None` on a fresh board.
    pub fn last_mover(&self) -> Option<Mark> {
        if self.move_count == 0 {
            None
        } else {
            Some(self.to_move().opponent())
        }
    }

    /// Places the current turn's mark at the given index (0-8).
    ///
    /// Returns the mark just placed. On rejection nothing changes: not the
    /// cells, not the count, not whose turn it is.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8,
    /// [`MoveError::Occupied`] when the cell already holds a mark.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn apply_move(&mut self, pos: usize) -> Result<Mark, MoveError> {
        if pos >= 9 {
            return Err(MoveError::OutOfBounds { position: pos });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { position: pos });
        }

        let mark = self.to_move();
        self.board.set(pos, Cell::Occupied(mark))?;
        self.move_count += 1;

        debug!(%mark, pos, move_count = self.move_count, "Mark placed");
        Ok(mark)
    }

    /// The mark holding three in a row, if any.
    ///
    /// No line can be completed before the 5th placement, so the scan is
    /// skipped until then.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Mark> {
        if self.move_count > 4 {
            rules::winner(&self.board)
        } else {
            None
        }
    }

    /// Boolean view of [`winner`](Self::winner).
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// True once the game has ended, by a win or by a full board.
    ///
    /// Stays true until [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn is_over(&self) -> bool {
        self.has_winner() || self.move_count == 9
    }

    /// Summary of where the game stands, derived on demand.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Won(mark)
        } else if self.move_count == 9 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}
