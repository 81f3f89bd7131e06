//! Win detection.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding three in a row, if any.
///
/// A line only counts when all three cells hold the same non-empty mark;
/// three empty cells compare equal but are never a win.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(Cell::Occupied(mark)) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(mark);
        }
    }
    None
}
