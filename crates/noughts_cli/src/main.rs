//! Noughts - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts_cli::cli::Cli;
use noughts_cli::config::{AppConfig, GameMode};
use noughts_cli::driver::{GameEvent, Orchestrator, Outcome};
use noughts_cli::input::LineInput;
use noughts_cli::players::{HumanPlayer, Player, RandomPlayer};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;
    info!(mode = ?config.mode(), "Starting noughts");

    let input = LineInput::stdin();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (announced_tx, mut announced_rx) = mpsc::unbounded_channel();
    tokio::spawn(print_events(event_rx, announced_tx));

    let player_x: Box<dyn Player> =
        Box::new(HumanPlayer::new(config.x_name().clone(), input.clone()));
    let player_o: Box<dyn Player> = match config.mode() {
        GameMode::Local => Box::new(HumanPlayer::new(config.o_name().clone(), input.clone())),
        GameMode::Computer => {
            let delay = *config.think_delay_ms();
            match config.seed() {
                Some(seed) => Box::new(RandomPlayer::seeded("Computer", delay, *seed)),
                None => Box::new(RandomPlayer::new("Computer", delay)),
            }
        }
    };

    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);

    loop {
        orchestrator.run_game().await?;
        // Let the printer announce the result before prompting.
        let _ = announced_rx.recv().await;

        println!("Play again? [y/N]");
        let answer = input.next_line().await.unwrap_or_default();
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
        orchestrator.restart();
    }

    Ok(())
}

/// Renders game events to the terminal.
async fn print_events(
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
    announced_tx: mpsc::UnboundedSender<()>,
) {
    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::BoardChanged(grid) => println!("\n{grid}\n"),
            GameEvent::TurnStarted { name, mark } => println!("{name} ({mark}) to move."),
            GameEvent::ComputerThinking => println!("Computer is thinking..."),
            GameEvent::MoveMade { name, position, .. } => {
                println!("{name} played square {}.", position + 1);
            }
            GameEvent::MoveRejected { name, error } => {
                println!("{name}: {error}. Try another square.");
            }
            GameEvent::GameOver { outcome } => {
                match outcome {
                    Outcome::Winner(mark) => println!("Game over! Player {mark} wins."),
                    Outcome::Draw => println!("Game over! It's a draw."),
                }
                let _ = announced_tx.send(());
            }
        }
    }
}
