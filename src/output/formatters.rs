//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess with one coloured tile per letter
///
/// Green for exact, yellow for misplaced, red for absent.
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| {
            let tile = char::from(letter.to_ascii_uppercase()).to_string();
            match mark {
                Mark::Exact => tile.green().bold().to_string(),
                Mark::Misplaced => tile.yellow().bold().to_string(),
                Mark::Absent => tile.red().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a guess score: the emptier, the better the expected pruning
#[must_use]
pub fn survival_bar(fraction: f64, width: usize) -> String {
    create_progress_bar(fraction, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_every_letter() {
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::evaluate(&Word::new("trace").unwrap(), &guess);
        let rendered = colored_guess(&guess, &feedback);
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(rendered.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_out_of_range() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn survival_bar_scales_to_one() {
        assert_eq!(survival_bar(0.25, 8), "██░░░░░░");
    }
}
