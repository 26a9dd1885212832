//! Guess selection and the solve loop
//!
//! Builds on the pure types in [`crate::core`]: a [`SolverContext`] holds the read-only
//! dictionary and seed list, the selector picks guesses, and [`Game`] plays rounds.

mod config;
mod context;
mod error;
mod game;
pub mod seeds;
pub mod selector;

pub use config::SolverConfig;
pub use context::{Dictionary, SolverContext};
pub use error::SolverError;
pub use game::{Game, GameState, Round, Solution, Tracker, solve};
pub use seeds::{SeedEntry, SeedList};
pub use selector::{Choice, GuessScore, choose_guess, select_guess};
