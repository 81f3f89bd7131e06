//! The computer opponent: uniform-random legal moves.

use super::Player;
use anyhow::Result;
use noughts_core::Gameboard;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Random-move computer player.
///
/// Waits out a configurable "thinking" delay, then samples indices uniformly
/// from the whole grid until one lands on an empty cell. No look-ahead, no
/// blocking or winning heuristics. With any empty cell left the sampling
/// terminates, so a near-full board still resolves to exactly one move.
pub struct RandomPlayer {
    name: String,
    think_delay: Duration,
    rng: SmallRng,
}

impl RandomPlayer {
    /// Creates a computer player with an OS-seeded generator.
    pub fn new(name: impl Into<String>, think_delay_ms: u64) -> Self {
        Self::with_rng(name, think_delay_ms, SmallRng::from_os_rng())
    }

    /// Creates a computer player with a fixed seed, for reproducible games.
    pub fn seeded(name: impl Into<String>, think_delay_ms: u64, seed: u64) -> Self {
        Self::with_rng(name, think_delay_ms, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(name: impl Into<String>, think_delay_ms: u64, rng: SmallRng) -> Self {
        let name = name.into();
        info!(player = %name, think_delay_ms, "Creating computer player");
        Self {
            name,
            think_delay: Duration::from_millis(think_delay_ms),
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn choose_move(&mut self, board: &Gameboard) -> Result<usize> {
        // The whole turn slot waits on this one future, so no other input
        // can be applied while the computer is "thinking".
        sleep(self.think_delay).await;

        let mut rejected = 0u32;
        loop {
            let pos = self.rng.random_range(0..9);
            if board.board().is_empty(pos) {
                debug!(player = %self.name, pos, rejected, "Sampled move");
                return Ok(pos);
            }
            rejected += 1;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}
