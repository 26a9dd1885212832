//! Core domain types for Wordle
//!
//! Words, feedback and the accumulated knowledge used to filter candidates.
//! Everything here is pure and deterministic.

mod feedback;
mod knowledge;
pub mod letters;
mod word;

pub use feedback::{Feedback, FeedbackRule, Mark};
pub use knowledge::{Knowledge, count_candidates, filter_candidates};
pub use letters::LetterSet;
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
