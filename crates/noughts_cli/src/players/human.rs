//! Human player fed by terminal input.

use super::Player;
use crate::input::LineInput;
use anyhow::{Context, Result};
use noughts_core::{Gameboard, Position};
use tracing::{debug, info};

/// A person at the keyboard.
///
/// Accepts the square numbers shown on the rendered grid (`1`-`9`) or a
/// square's name ("center", "top-left").
pub struct HumanPlayer {
    name: String,
    input: LineInput,
}

impl HumanPlayer {
    /// Creates a human player reading from the given input handle.
    pub fn new(name: impl Into<String>, input: LineInput) -> Self {
        let name = name.into();
        info!(player = %name, "Creating human player");
        Self { name, input }
    }
}

/// Parses a typed square: `1`-`9` as rendered, or a position label.
pub(crate) fn parse_square(s: &str) -> Option<usize> {
    let s = s.trim();
    if let Ok(num) = s.parse::<usize>() {
        return (1..=9).contains(&num).then(|| num - 1);
    }
    Position::from_label(s).map(Position::to_index)
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn choose_move(&mut self, board: &Gameboard) -> Result<usize> {
        loop {
            let line = self
                .input
                .next_line()
                .await
                .context("Input closed before the game finished")?;

            match parse_square(&line) {
                Some(pos) => {
                    debug!(player = %self.name, pos, "Parsed move");
                    return Ok(pos);
                }
                None => {
                    let open = Position::open_positions(board.board())
                        .iter()
                        .map(|pos| (pos.to_index() + 1).to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!(
                        "Unrecognized square '{}' - enter one of {} or a name like 'center'.",
                        line.trim(),
                        open
                    );
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
