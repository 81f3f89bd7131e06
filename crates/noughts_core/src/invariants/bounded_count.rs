//! Bounded count: at most nine placements per game.

use super::Invariant;
use crate::Gameboard;

/// Invariant: the move count stays in `[0, 9]`.
///
/// A full board rejects every further placement, so the counter cannot pass
/// nine without a corrupted transition.
pub struct BoundedCount;

impl Invariant<Gameboard> for BoundedCount {
    fn holds(board: &Gameboard) -> bool {
        board.move_count() <= 9
    }

    fn description() -> &'static str {
        "Move count never exceeds nine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_on_a_full_board() {
        let mut board = Gameboard::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            board.apply_move(pos).unwrap();
        }
        assert_eq!(board.move_count(), 9);
        assert!(BoundedCount::holds(&board));
    }

    #[test]
    fn test_detects_overflowed_count() {
        let mut board = Gameboard::new();
        board.move_count = 10;
        assert!(!BoundedCount::holds(&board));
    }
}
