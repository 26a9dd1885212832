//! Solve loop
//!
//! [`Tracker`] holds the per-game state (candidate pool, knowledge, history) and folds in
//! feedback from any source. [`Game`] pairs a tracker with a known secret and plays rounds
//! until the feedback comes back all green.

use super::context::SolverContext;
use super::error::SolverError;
use super::selector::{Choice, choose_guess};
use crate::core::{Feedback, Knowledge, Word, filter_candidates};
use log::{debug, info};
use rand::Rng;

/// Game progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Searching,
    Solved,
}

/// One played round, as plain data for presentation layers
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub number: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub pool_before: usize,
    pub pool_after: usize,
    /// Estimated surviving-pool fraction, when the guess came from simulation
    pub score: Option<f64>,
}

/// Candidate pool and knowledge for one game, with undo
#[derive(Debug, Clone)]
pub struct Tracker<'a> {
    ctx: &'a SolverContext,
    pool: Vec<Word>,
    knowledge: Knowledge,
    history: Vec<(Word, Feedback)>,
    snapshots: Vec<(Vec<Word>, Knowledge)>,
}

impl<'a> Tracker<'a> {
    /// Start from the full dictionary and empty knowledge
    #[must_use]
    pub fn new(ctx: &'a SolverContext) -> Self {
        Self {
            ctx,
            pool: ctx.dictionary().words().to_vec(),
            knowledge: Knowledge::new(ctx.word_length()),
            history: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Number of the round about to be played (1-based)
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len() + 1
    }

    /// Ask the selector for the next guess
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` once the pool is empty.
    pub fn suggest<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Choice, SolverError> {
        choose_guess(self.ctx, &self.pool, &self.knowledge, self.round(), rng)
    }

    /// Fold a guess and its feedback into the state, returning the new pool size
    ///
    /// # Errors
    /// Fails if the guess or feedback does not match the configured word length.
    pub fn record(&mut self, guess: Word, feedback: Feedback) -> Result<usize, SolverError> {
        let expected = self.ctx.word_length();
        if guess.len() != expected {
            return Err(SolverError::LengthMismatch {
                word: guess.text().to_string(),
                expected,
            });
        }
        if feedback.len() != expected {
            return Err(SolverError::FeedbackLength {
                expected,
                actual: feedback.len(),
            });
        }

        let knowledge = self.knowledge.update(&guess, &feedback);
        let pool = filter_candidates(&self.pool, &knowledge);

        let previous_pool = std::mem::replace(&mut self.pool, pool);
        let previous_knowledge = std::mem::replace(&mut self.knowledge, knowledge);
        self.snapshots.push((previous_pool, previous_knowledge));
        self.history.push((guess, feedback));

        Ok(self.pool.len())
    }

    /// Revert the last recorded round; false if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.snapshots.pop() {
            Some((pool, knowledge)) => {
                self.pool = pool;
                self.knowledge = knowledge;
                self.history.pop();
                true
            }
            None => false,
        }
    }

    /// Forget everything and start a new game
    pub fn reset(&mut self) {
        *self = Self::new(self.ctx);
    }
}

/// A game against a known secret
#[derive(Debug, Clone)]
pub struct Game<'a> {
    tracker: Tracker<'a>,
    target: Word,
    rounds: Vec<Round>,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Start a game in the `Searching` state
    ///
    /// The target does not have to be in the dictionary; it only has to have the configured
    /// length.
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the target has the wrong length.
    pub fn new(ctx: &'a SolverContext, target: Word) -> Result<Self, SolverError> {
        if target.len() != ctx.word_length() {
            return Err(SolverError::LengthMismatch {
                word: target.text().to_string(),
                expected: ctx.word_length(),
            });
        }

        Ok(Self {
            tracker: Tracker::new(ctx),
            target,
            rounds: Vec::new(),
            state: GameState::Searching,
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn tracker(&self) -> &Tracker<'a> {
        &self.tracker
    }

    /// Play one round: select, evaluate, update, filter
    ///
    /// Returns `None` once the game is solved.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if every candidate has been ruled out (the secret
    /// is not in the dictionary) and `SolverError::RoundLimit` past `max_rounds`.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<&Round>, SolverError> {
        if self.is_solved() {
            return Ok(None);
        }

        let ctx = self.tracker.ctx;
        let config = ctx.config();
        let number = self.tracker.round();
        if number > config.max_rounds {
            return Err(SolverError::RoundLimit(config.max_rounds));
        }

        let choice = self.tracker.suggest(rng)?;
        let score = choice.score();
        let guess = choice.into_guess();
        let feedback = Feedback::evaluate_with(config.feedback_rule, &self.target, &guess);

        let pool_before = self.tracker.pool().len();
        let pool_after = self.tracker.record(guess.clone(), feedback.clone())?;

        debug!(
            "round {number}: {guess} {feedback} pool {pool_before} -> {pool_after}{}",
            score.map(|s| format!(" (expected {s:.3})")).unwrap_or_default()
        );

        if feedback.is_solved() {
            self.state = GameState::Solved;
        }

        self.rounds.push(Round {
            number,
            guess,
            feedback,
            pool_before,
            pool_after,
            score,
        });

        Ok(self.rounds.last())
    }

    /// Play rounds until solved
    ///
    /// # Errors
    /// Propagates any error from [`Game::step`].
    pub fn finish<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<Solution, SolverError> {
        while !self.is_solved() {
            self.step(rng)?;
        }

        info!("solved {} in {} guesses", self.target, self.rounds.len());

        Ok(Solution {
            target: self.target,
            rounds: self.rounds,
        })
    }
}

/// A finished game
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub target: Word,
    pub rounds: Vec<Round>,
}

impl Solution {
    /// The guesses in the order they were played
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.rounds.iter().map(|round| &round.guess)
    }

    /// Number of guesses needed, the game's score
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rounds.len()
    }
}

/// Solve for `target` from scratch
///
/// # Errors
/// See [`Game::new`] and [`Game::step`].
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_sampler::core::Word;
/// use wordle_sampler::solver::{SolverConfig, SolverContext, solve};
/// use wordle_sampler::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "trace", "grape"]);
/// let ctx = SolverContext::new(words, SolverConfig::default()).unwrap();
/// let target = Word::new("trace").unwrap();
///
/// let solution = solve(&ctx, &target, &mut StdRng::seed_from_u64(4)).unwrap();
/// assert_eq!(solution.guesses().last(), Some(&target));
/// ```
pub fn solve<R: Rng + ?Sized>(
    ctx: &SolverContext,
    target: &Word,
    rng: &mut R,
) -> Result<Solution, SolverError> {
    Game::new(ctx, target.clone())?.finish(rng)
}
