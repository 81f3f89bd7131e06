//! Earliest-win bound: no line before the fifth placement.

use super::Invariant;
use crate::{Gameboard, rules};

/// Invariant: a completed line implies at least five placements.
///
/// The winning side needs three marks and the opponent moves in between, so
/// the earliest possible win lands on move five. A line on a board with a
/// lower count means state was mutated outside `apply_move`.
pub struct WinRequiresFiveMoves;

impl Invariant<Gameboard> for WinRequiresFiveMoves {
    fn holds(board: &Gameboard) -> bool {
        // Scan the grid directly; the gameboard's own query short-circuits
        // on the count this invariant is auditing.
        rules::winner(board.board()).is_none() || board.move_count() >= 5
    }

    fn description() -> &'static str {
        "A winning line implies at least five placements"
    }
}
