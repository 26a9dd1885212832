//! Wordle Sampler
//!
//! A Wordle solver that opens with a high letter-coverage word and then picks each guess by
//! Monte-Carlo simulation: for a sample of candidate guesses it estimates, over a sample of
//! possible secrets, how much of the candidate pool would survive, and plays the guess that
//! leaves the least.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_sampler::core::{Feedback, Mark, Word};
//! use wordle_sampler::solver::{SolverConfig, SolverContext, solve};
//! use wordle_sampler::wordlists::{WORDS, loader::words_from_slice};
//!
//! // Score a guess against a secret
//! let secret = Word::new("trace").unwrap();
//! let guess = Word::new("crane").unwrap();
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.marks()[1], Mark::Exact);
//!
//! // Let the solver find the secret
//! let ctx = SolverContext::new(words_from_slice(WORDS), SolverConfig::default()).unwrap();
//! let solution = solve(&ctx, &secret, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(solution.guesses().last(), Some(&secret));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
