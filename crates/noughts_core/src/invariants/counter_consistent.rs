//! Counter consistency: the move count mirrors the board.

use super::Invariant;
use crate::Gameboard;

/// Invariant: the move count equals the number of occupied cells.
///
/// Every successful placement fills exactly one cell and bumps the count by
/// one, and only a full reset clears either, so the two can never diverge.
pub struct CounterConsistent;

impl Invariant<Gameboard> for CounterConsistent {
    fn holds(board: &Gameboard) -> bool {
        board.move_count() as usize == board.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}
