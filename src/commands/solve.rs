//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::solver::{Solution, SolverContext, SolverError, solve};
use log::warn;
use rand::Rng;

/// Solve a specific word given as user text
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a word of the configured length
/// - Every candidate is ruled out before the target is found (target not in the dictionary)
/// - The round limit is reached
pub fn solve_word<R: Rng + ?Sized>(
    ctx: &SolverContext,
    target: &str,
    rng: &mut R,
) -> Result<Solution, SolverError> {
    let target = ctx.parse_word(target)?;

    if !ctx.dictionary().contains(&target) {
        warn!("{target} is not in the dictionary, the solver may run out of candidates");
    }

    solve(ctx, &target, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn context() -> SolverContext {
        SolverContext::new(words_from_slice(WORDS), SolverConfig::default()).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let ctx = context();
        let mut rng = StdRng::seed_from_u64(42);

        let solution = solve_word(&ctx, "crane", &mut rng).unwrap();

        assert_eq!(solution.target.text(), "crane");
        assert_eq!(solution.guesses().last().map(|w| w.text()), Some("crane"));
    }

    #[test]
    fn solve_accepts_uppercase_input() {
        let ctx = context();
        let mut rng = StdRng::seed_from_u64(42);
        let solution = solve_word(&ctx, "SLATE", &mut rng).unwrap();
        assert_eq!(solution.target.text(), "slate");
    }

    #[test]
    fn solve_records_history() {
        let ctx = context();
        let mut rng = StdRng::seed_from_u64(7);

        let solution = solve_word(&ctx, "watch", &mut rng).unwrap();

        assert!(solution.guess_count() >= 1);
        for round in &solution.rounds {
            assert!(round.pool_after <= round.pool_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let ctx = context();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            solve_word(&ctx, "toolong", &mut rng),
            Err(SolverError::LengthMismatch { .. })
        ));
        assert!(matches!(
            solve_word(&ctx, "cr4ne", &mut rng),
            Err(SolverError::InvalidWord { .. })
        ));
    }

    #[test]
    fn same_seed_same_solution() {
        let ctx = context();
        let a = solve_word(&ctx, "grace", &mut StdRng::seed_from_u64(5));
        let b = solve_word(&ctx, "grace", &mut StdRng::seed_from_u64(5));
        assert!(a.is_ok());
        assert_eq!(a, b);
    }
}
