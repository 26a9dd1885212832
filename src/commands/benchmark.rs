//! Benchmark command
//!
//! Plays many independent games against random dictionary targets and summarises how many
//! guesses the solver needed.

use crate::core::Word;
use crate::solver::{Solution, SolverContext, SolverError, solve};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of one benchmark game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub target: Word,
    pub result: Result<Solution, SolverError>,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub outcomes: Vec<GameOutcome>,
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw `count` targets uniformly from the dictionary, with replacement
pub fn pick_targets<R: Rng + ?Sized>(ctx: &SolverContext, count: usize, rng: &mut R) -> Vec<Word> {
    let words = ctx.dictionary().words();
    (0..count)
        .filter_map(|_| words.choose(rng).cloned())
        .collect()
}

/// Progress bar styled for benchmark runs
///
/// # Panics
///
/// Panics if the hard-coded template is rejected by `indicatif`.
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Run one game per target, in parallel
///
/// Game `i` uses its own generator seeded with `seed + i`, so a run is reproducible
/// regardless of scheduling.
#[must_use]
pub fn run_benchmark(
    ctx: &SolverContext,
    targets: &[Word],
    seed: u64,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = targets
        .par_iter()
        .enumerate()
        .map(|(i, target)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let result = solve(ctx, target, &mut rng);
            if let Err(e) = &result {
                warn!("game for {target} failed: {e}");
            }
            progress.inc(1);
            GameOutcome {
                target: target.clone(),
                result,
            }
        })
        .collect();

    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let result = summarise(outcomes, duration);
    info!(
        "benchmark: {} games, {} solved, average {:.3} guesses",
        result.total_words, result.solved, result.average_guesses
    );
    result
}

fn summarise(outcomes: Vec<GameOutcome>, duration: Duration) -> BenchmarkResult {
    let counts: Vec<usize> = outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .map(Solution::guess_count)
        .collect();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &count in &counts {
        *distribution.entry(count).or_insert(0) += 1;
    }

    let total_words = outcomes.len();
    let solved = counts.len();
    let total_guesses: usize = counts.iter().sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses,
        min_guesses: counts.iter().copied().min().unwrap_or(0),
        max_guesses: counts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn context() -> SolverContext {
        SolverContext::new(words_from_slice(WORDS), SolverConfig::default()).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let ctx = context();
        let targets = pick_targets(&ctx, 10, &mut StdRng::seed_from_u64(1));
        let result = run_benchmark(&ctx, &targets, 1, &ProgressBar::hidden());

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert_eq!(result.failed, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let ctx = context();
        let targets = pick_targets(&ctx, 8, &mut StdRng::seed_from_u64(2));
        let result = run_benchmark(&ctx, &targets, 2, &ProgressBar::hidden());

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let ctx = context();
        let targets = pick_targets(&ctx, 5, &mut StdRng::seed_from_u64(3));

        let a = run_benchmark(&ctx, &targets, 9, &ProgressBar::hidden());
        let b = run_benchmark(&ctx, &targets, 9, &ProgressBar::hidden());

        let guesses = |r: &BenchmarkResult| -> Vec<Vec<Word>> {
            r.outcomes
                .iter()
                .map(|o| o.result.as_ref().unwrap().guesses().cloned().collect())
                .collect()
        };
        assert_eq!(guesses(&a), guesses(&b));
    }

    #[test]
    fn failed_games_are_counted() {
        let ctx = SolverContext::new(
            words_from_slice(&["crane", "slate", "trace", "grape"]),
            SolverConfig::default(),
        )
        .unwrap();
        let targets = words_from_slice(&["crane", "fuzzy"]);
        let result = run_benchmark(&ctx, &targets, 0, &ProgressBar::hidden());

        assert_eq!(result.solved, 1);
        assert_eq!(result.failed, 1);
        assert!(matches!(
            result.outcomes[1].result,
            Err(SolverError::NoCandidates)
        ));
    }

    #[test]
    fn benchmark_empty_target_list() {
        let ctx = context();
        let result = run_benchmark(&ctx, &[], 0, &ProgressBar::hidden());

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn targets_come_from_the_dictionary() {
        let ctx = context();
        let targets = pick_targets(&ctx, 20, &mut StdRng::seed_from_u64(4));
        assert_eq!(targets.len(), 20);
        assert!(targets.iter().all(|t| ctx.dictionary().contains(t)));
    }
}
