//! Guess selection
//!
//! Round one plays a random seed word. Later rounds estimate, for each candidate guess, the
//! fraction of the pool expected to survive it by simulating the guess against a random
//! sample of possible targets, then play the guess with the lowest estimate.

use super::context::SolverContext;
use super::error::SolverError;
use crate::core::{Feedback, FeedbackRule, Knowledge, Word, count_candidates};
use log::trace;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;

/// A candidate guess and its estimated surviving-pool fraction (lower is better)
#[derive(Debug, Clone, PartialEq)]
pub struct GuessScore {
    pub word: Word,
    pub score: f64,
}

/// How the selector arrived at a guess
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// Only one candidate was left
    Forced(Word),
    /// Random seed word for the first round
    Opener(Word),
    /// Best of `considered` simulated guesses
    Simulated {
        guess: Word,
        score: f64,
        considered: usize,
    },
}

impl Choice {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        match self {
            Self::Forced(word) | Self::Opener(word) | Self::Simulated { guess: word, .. } => word,
        }
    }

    #[must_use]
    pub fn into_guess(self) -> Word {
        match self {
            Self::Forced(word) | Self::Opener(word) | Self::Simulated { guess: word, .. } => word,
        }
    }

    /// Estimated surviving-pool fraction, when a simulation ran
    #[must_use]
    pub const fn score(&self) -> Option<f64> {
        match self {
            Self::Simulated { score, .. } => Some(*score),
            Self::Forced(_) | Self::Opener(_) => None,
        }
    }
}

/// Select the next guess
///
/// # Errors
/// Returns `SolverError::NoCandidates` if `pool` is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_sampler::core::Knowledge;
/// use wordle_sampler::solver::{SolverConfig, SolverContext, select_guess};
/// use wordle_sampler::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "trace", "grape"]);
/// let ctx = SolverContext::new(words.clone(), SolverConfig::default()).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let guess = select_guess(&ctx, &words, &Knowledge::new(5), 1, &mut rng).unwrap();
/// assert!(words.contains(&guess));
/// ```
pub fn select_guess<R: Rng + ?Sized>(
    ctx: &SolverContext,
    pool: &[Word],
    knowledge: &Knowledge,
    round: usize,
    rng: &mut R,
) -> Result<Word, SolverError> {
    choose_guess(ctx, pool, knowledge, round, rng).map(Choice::into_guess)
}

/// Select the next guess and report how it was chosen
///
/// # Errors
/// Returns `SolverError::NoCandidates` if `pool` is empty.
pub fn choose_guess<R: Rng + ?Sized>(
    ctx: &SolverContext,
    pool: &[Word],
    knowledge: &Knowledge,
    round: usize,
    rng: &mut R,
) -> Result<Choice, SolverError> {
    match pool {
        [] => return Err(SolverError::NoCandidates),
        [only] => return Ok(Choice::Forced(only.clone())),
        _ => {}
    }

    if round <= 1 {
        let opener = ctx
            .seeds()
            .choose(rng)
            .or_else(|| pool.choose(rng))
            .ok_or(SolverError::NoCandidates)?;
        return Ok(Choice::Opener(opener.clone()));
    }

    let guesses = candidate_guesses(ctx, pool, knowledge, rng);
    let scores = score_guesses(ctx, pool, knowledge, &guesses, rng);

    for entry in scores.iter().take(3) {
        trace!("candidate {} -> {:.4}", entry.word, entry.score);
    }

    let considered = scores.len();
    let best = scores
        .into_iter()
        .next()
        .ok_or(SolverError::NoCandidates)?;

    Ok(Choice::Simulated {
        guess: best.word,
        score: best.score,
        considered,
    })
}

/// Build the set of guesses worth simulating
///
/// Seed words consistent with `knowledge`, plus a random sample of the pool when no seed
/// fits or the pool is small. Words are never repeated.
pub fn candidate_guesses<R: Rng + ?Sized>(
    ctx: &SolverContext,
    pool: &[Word],
    knowledge: &Knowledge,
    rng: &mut R,
) -> Vec<Word> {
    let config = ctx.config();

    let mut guesses: Vec<Word> = ctx
        .seeds()
        .words()
        .filter(|word| knowledge.admits(word))
        .cloned()
        .collect();

    if guesses.is_empty() || pool.len() <= config.small_pool_threshold {
        let amount = config.guess_sample.max(1).min(pool.len());
        for word in pool.choose_multiple(rng, amount) {
            if !guesses.contains(word) {
                guesses.push(word.clone());
            }
        }
    }

    guesses
}

/// Score every guess by Monte-Carlo simulation, best first
///
/// Each guess gets its own random sample of up to `target_sample` hypothetical targets.
/// Samples are drawn from `rng` before any scoring starts, so the result for a seeded
/// generator does not depend on whether scoring runs in parallel. Ties are broken by the
/// alphabetically smaller word.
pub fn score_guesses<R: Rng + ?Sized>(
    ctx: &SolverContext,
    pool: &[Word],
    knowledge: &Knowledge,
    guesses: &[Word],
    rng: &mut R,
) -> Vec<GuessScore> {
    let config = ctx.config();
    let rule = config.feedback_rule;
    let amount = config.target_sample.max(1).min(pool.len());

    let samples: Vec<Vec<&Word>> = guesses
        .iter()
        .map(|_| pool.choose_multiple(rng, amount).collect())
        .collect();

    let score_one = |(guess, targets): (&Word, &Vec<&Word>)| GuessScore {
        word: guess.clone(),
        score: expected_fraction(rule, pool, knowledge, guess, targets),
    };

    let mut scores: Vec<GuessScore> = if config.parallel {
        guesses.par_iter().zip(samples.par_iter()).map(score_one).collect()
    } else {
        guesses.iter().zip(samples.iter()).map(score_one).collect()
    };

    scores.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.word.cmp(&b.word)));
    scores
}

/// Mean surviving-pool size after `guess`, over `targets`, as a fraction of the pool
///
/// Returns 1.0 (no expected reduction) when there is nothing to simulate.
#[must_use]
pub fn expected_fraction(
    rule: FeedbackRule,
    pool: &[Word],
    knowledge: &Knowledge,
    guess: &Word,
    targets: &[&Word],
) -> f64 {
    if targets.is_empty() || pool.is_empty() {
        return 1.0;
    }

    let total: usize = targets
        .iter()
        .map(|&target| {
            let feedback = Feedback::evaluate_with(rule, target, guess);
            count_candidates(pool, &knowledge.update(guess, &feedback))
        })
        .sum();

    total as f64 / targets.len() as f64 / pool.len() as f64
}
