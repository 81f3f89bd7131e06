//! Draw detection.

use crate::types::Board;
use tracing::instrument;

/// True when the board is full and nobody has a line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && super::winner(board).is_none()
}
