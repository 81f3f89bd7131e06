//! Tests for the orchestrator and players.

use anyhow::Result;
use noughts_cli::driver::{GameEvent, Orchestrator, Outcome};
use noughts_cli::input::LineInput;
use noughts_cli::players::{HumanPlayer, Player, RandomPlayer};
use noughts_core::{Gameboard, Mark};
use std::collections::VecDeque;
use tokio::sync::mpsc;

/// Test player that replays a fixed move list.
struct ScriptedPlayer {
    name: String,
    moves: VecDeque<usize>,
}

impl ScriptedPlayer {
    fn new(name: &str, moves: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn choose_move(&mut self, _board: &Gameboard) -> Result<usize> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Script for {} ran out of moves", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_scenario_a_x_wins_top_row() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new("Ann", &[0, 1, 2])),
        Box::new(ScriptedPlayer::new("Ben", &[4, 5])),
        event_tx,
    );

    let outcome = orchestrator.run_game().await.unwrap();
    assert_eq!(outcome, Outcome::Winner(Mark::X));
    assert!(orchestrator.board().is_over());
    assert_eq!(orchestrator.board().move_count(), 5);

    let events = drain(&mut event_rx);
    let moves_made = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves_made, 5);
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver {
            outcome: Outcome::Winner(Mark::X)
        })
    ));
}

#[tokio::test]
async fn test_draw_game_through_driver() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new("Ann", &[0, 2, 3, 7, 8])),
        Box::new(ScriptedPlayer::new("Ben", &[1, 4, 5, 6])),
        event_tx,
    );

    let outcome = orchestrator.run_game().await.unwrap();
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(orchestrator.board().move_count(), 9);

    let events = drain(&mut event_rx);
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver {
            outcome: Outcome::Draw
        })
    ));
}

#[tokio::test]
async fn test_rejected_move_reprompts_same_player() {
    // Ben tries the occupied corner first; the driver must ask him again
    // without advancing the turn.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new("Ann", &[0, 1, 2])),
        Box::new(ScriptedPlayer::new("Ben", &[0, 4, 5])),
        event_tx,
    );

    let outcome = orchestrator.run_game().await.unwrap();
    assert_eq!(outcome, Outcome::Winner(Mark::X));
    assert_eq!(orchestrator.board().move_count(), 5);

    let events = drain(&mut event_rx);
    let rejected: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveRejected { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, vec!["Ben"]);

    // The rejected attempt is followed by a successful move from Ben.
    let mover_after_rejection = events
        .iter()
        .skip_while(|e| !matches!(e, GameEvent::MoveRejected { .. }))
        .find_map(|e| match e {
            GameEvent::MoveMade { name, position, .. } => Some((name.as_str(), *position)),
            _ => None,
        });
    assert_eq!(mover_after_rejection, Some(("Ben", 4)));
}

#[tokio::test]
async fn test_random_player_takes_last_open_square() {
    // Scenario D: eight squares filled, square 8 open; rejection sampling
    // must land there no matter the seed.
    let mut board = Gameboard::new();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6] {
        board.apply_move(pos).unwrap();
    }

    for seed in [0, 1, 7, 42, 1234] {
        let mut computer = RandomPlayer::seeded("Computer", 0, seed);
        let pos = computer.choose_move(&board).await.unwrap();
        assert_eq!(pos, 8);
    }

    board.apply_move(8).unwrap();
    assert!(board.is_over());
}

#[tokio::test]
async fn test_random_vs_random_always_terminates() {
    for seed in 0..20 {
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(
            Box::new(RandomPlayer::seeded("A", 0, seed)),
            Box::new(RandomPlayer::seeded("B", 0, seed + 1000)),
            event_tx,
        );

        let outcome = orchestrator.run_game().await.unwrap();
        assert!(orchestrator.board().is_over());
        assert!(orchestrator.board().move_count() >= 5);
        if orchestrator.board().move_count() == 9 && !orchestrator.board().has_winner() {
            assert_eq!(outcome, Outcome::Draw);
        }
    }
}

#[tokio::test]
async fn test_restart_gives_a_fresh_board() {
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Box::new(ScriptedPlayer::new("Ann", &[0, 1, 2])),
        Box::new(ScriptedPlayer::new("Ben", &[4, 5])),
        event_tx,
    );

    orchestrator.run_game().await.unwrap();
    assert!(orchestrator.board().is_over());

    orchestrator.restart();
    assert!(!orchestrator.board().is_over());
    assert_eq!(orchestrator.board().move_count(), 0);
    assert_eq!(orchestrator.board().to_move(), Mark::X);
}

#[tokio::test]
async fn test_human_player_skips_unparseable_lines() {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    let input = LineInput::new(line_rx);
    let mut human = HumanPlayer::new("Ann", input);

    line_tx.send("somewhere nice".to_string()).unwrap();
    line_tx.send("5".to_string()).unwrap();

    let board = Gameboard::new();
    let pos = human.choose_move(&board).await.unwrap();
    assert_eq!(pos, 4);
}

#[tokio::test]
async fn test_human_player_errors_when_input_closes() {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    let input = LineInput::new(line_rx);
    let mut human = HumanPlayer::new("Ann", input);
    drop(line_tx);

    let board = Gameboard::new();
    assert!(human.choose_move(&board).await.is_err());
}
