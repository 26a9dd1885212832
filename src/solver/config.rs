//! Solver configuration

use crate::core::{DEFAULT_WORD_LENGTH, FeedbackRule};

/// Tunable parameters shared by every game in a run
///
/// The defaults reproduce the classic setup: five-letter words, a 100-word seed list and
/// 100 × 100 Monte-Carlo samples per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Letters per word
    pub word_length: usize,
    /// Number of opening words kept in the seed list
    pub seed_count: usize,
    /// Pool words added as candidate guesses when the pool is small or no seed fits
    pub guess_sample: usize,
    /// Hypothetical targets simulated per candidate guess
    pub target_sample: usize,
    /// Pools at or below this size also contribute candidate guesses
    pub small_pool_threshold: usize,
    /// Give up after this many rounds
    pub max_rounds: usize,
    /// Duplicate-letter scoring
    pub feedback_rule: FeedbackRule,
    /// Score candidate guesses on the rayon thread pool
    pub parallel: bool,
}

impl SolverConfig {
    /// Set both Monte-Carlo sample sizes at once
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.guess_sample = samples;
        self.target_sample = samples;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            seed_count: 100,
            guess_sample: 100,
            target_sample: 100,
            small_pool_threshold: 100,
            max_rounds: 100,
            feedback_rule: FeedbackRule::Standard,
            parallel: true,
        }
    }
}
