//! Pure tic-tac-toe game logic.
//!
//! The centerpiece is [`Gameboard`], a small state machine over a 3x3 grid:
//! move legality, turn alternation, win/draw detection, and reset. It does no
//! I/O and owns no scheduling; driving play (human input, the random
//! computer opponent) lives in the `noughts_cli` crate.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Gameboard, Mark};
//!
//! let mut board = Gameboard::new();
//! assert_eq!(board.to_move(), Mark::X);
//!
//! let placed = board.apply_move(4)?;
//! assert_eq!(placed, Mark::X);
//! assert_eq!(board.to_move(), Mark::O);
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod gameboard;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use error::MoveError;
pub use gameboard::Gameboard;
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Mark};
