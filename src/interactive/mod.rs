//! Interactive terminal viewer
//!
//! Steps the solver round by round against a known secret.

pub mod app;
pub mod rendering;

pub use app::{App, GameStatus, run_tui};
