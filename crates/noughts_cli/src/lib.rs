//! Turn driving and terminal presentation for noughts.
//!
//! The [`driver::Orchestrator`] sequences moves from two [`players::Player`]
//! implementations over a `noughts_core::Gameboard` and reports what happened
//! through a [`driver::GameEvent`] stream. The binary wires the orchestrator
//! to stdin/stdout; nothing in `noughts_core` knows any of this exists.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod input;
pub mod players;
