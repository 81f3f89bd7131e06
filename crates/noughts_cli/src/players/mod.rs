//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use anyhow::Result;
use noughts_core::Gameboard;

/// A source of moves for one side of the board.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Picks a board index (0-8) for the next move.
    ///
    /// The returned index may still be rejected by the gameboard; the
    /// orchestrator will ask again.
    async fn choose_move(&mut self, board: &Gameboard) -> Result<usize>;

    /// The player's display name.
    fn name(&self) -> &str;

    /// Whether moves come from the machine rather than a person.
    fn is_automated(&self) -> bool {
        false
    }
}
