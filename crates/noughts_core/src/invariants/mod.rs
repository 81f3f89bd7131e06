//! First-class gameboard invariants.
//!
//! Each invariant is a logical property the state machine guarantees.
//! Keeping them as named types makes the guarantees testable on their own
//! and lets callers check a whole set in one step.

mod bounded_count;
mod counter_consistent;
mod win_requires_five;

pub use bounded_count::BoundedCount;
pub use counter_consistent::CounterConsistent;
pub use win_requires_five::WinRequiresFiveMoves;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Whether the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Record of a violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// Every gameboard invariant as one composable set.
pub type GameboardInvariants = (CounterConsistent, BoundedCount, WinRequiresFiveMoves);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Gameboard, Mark};

    #[test]
    fn test_set_holds_for_fresh_board() {
        let board = Gameboard::new();
        assert!(GameboardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_set_holds_through_a_full_game() {
        let mut board = Gameboard::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            board.apply_move(pos).unwrap();
            assert!(GameboardInvariants::check_all(&board).is_ok());
        }
    }

    #[test]
    fn test_set_reports_every_violation() {
        let mut board = Gameboard::new();
        board.apply_move(4).unwrap();

        // Stamp a mark in behind the state machine's back.
        board.board.set(0, Cell::Occupied(Mark::O)).unwrap();
        board.move_count = 13;

        let violations = GameboardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let board = Gameboard::new();
        type Pair = (CounterConsistent, BoundedCount);
        assert!(Pair::check_all(&board).is_ok());
    }
}
