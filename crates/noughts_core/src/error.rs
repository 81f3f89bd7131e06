//! Error types for gameboard operations.

use derive_more::{Display, Error};

/// A rejected move.
///
/// Neither variant is fatal: the turn driver treats both as "move rejected"
/// and waits for another input. State is never altered on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The targeted cell already holds a mark.
    #[display("square {} is already occupied", position + 1)]
    Occupied {
        /// Board index of the occupied cell.
        position: usize,
    },

    /// The index does not name a cell on the 3x3 grid.
    #[display("position {} is outside the board (expected 0-8)", position)]
    OutOfBounds {
        /// The offending index.
        position: usize,
    },
}
