//! Interactive assistant for a real game
//!
//! Line-based helper without TUI: suggests a guess, reads the feedback the game showed and
//! narrows the candidates.

use crate::core::{Feedback, Word};
use crate::output::formatters::colored_guess;
use crate::solver::{Choice, SolverContext, Tracker};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the user asked for at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Undo,
    Feedback(Feedback),
    /// A guess other than the suggestion, with its feedback
    Manual(Word, Feedback),
    Invalid,
}

impl Input {
    fn parse(ctx: &SolverContext, line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "undo" | "u" => Self::Undo,
            "win" | "correct" | "solved" => Self::Feedback(Feedback::solved(ctx.word_length())),
            _ => match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [pattern] => Feedback::parse(pattern).map_or(Self::Invalid, Self::Feedback),
                [word, pattern] => match (ctx.parse_word(word), Feedback::parse(pattern)) {
                    (Ok(word), Some(feedback)) => Self::Manual(word, feedback),
                    _ => Self::Invalid,
                },
                _ => Self::Invalid,
            },
        }
    }
}

/// Run the assistant on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<R: Rng + ?Sized>(ctx: &SolverContext, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_assist_with(ctx, rng, stdin.lock(), stdout.lock())
}

/// Run the assistant over arbitrary streams; end of input quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist_with<R, I, O>(
    ctx: &SolverContext,
    rng: &mut R,
    mut input: I,
    mut output: O,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let out = &mut output;
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║              Wordle Sampler - Assist Mode                    ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(out, "After each guess, enter the feedback pattern:\n")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - Type 'WORD PATTERN' if you played another word")?;
    writeln!(out, "  - Or type 'win' if you got it right!\n")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n"
    )?;

    let mut tracker = Tracker::new(ctx);

    loop {
        let remaining = tracker.pool().len();

        if remaining == 0 {
            writeln!(out, "\n❌ No candidates remain! Your feedback may be incorrect.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

            match read_line(&mut input, out, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => break,
                Some("undo" | "u") => undo(&mut tracker, out)?,
                Some("new" | "n") => new_game(&mut tracker, out)?,
                Some(_) => {}
            }
            continue;
        }

        let choice = tracker.suggest(rng)?;

        writeln!(
            out,
            "────────────────────────────────────────────────────────────"
        )?;
        writeln!(
            out,
            "Turn {}: {remaining} candidates remaining",
            tracker.round()
        )?;
        writeln!(
            out,
            "────────────────────────────────────────────────────────────"
        )?;
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            choice.guess().text().to_uppercase().bright_white().bold()
        )?;
        match &choice {
            Choice::Forced(_) => writeln!(out, "   Only one candidate left\n")?,
            Choice::Opener(_) => writeln!(out, "   Opening word from the seed list\n")?,
            Choice::Simulated {
                score, considered, ..
            } => writeln!(
                out,
                "   Expected to keep {:.1}% of the pool ({considered} guesses simulated)\n",
                score * 100.0
            )?,
        }

        if remaining <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in tracker.pool() {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let entry = loop {
            let Some(line) =
                read_line(&mut input, out, "Enter feedback (G/Y/-, 'win', or command)")?
            else {
                return Ok(());
            };

            match Input::parse(ctx, &line) {
                Input::Quit => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                Input::NewGame => {
                    new_game(&mut tracker, out)?;
                    break None;
                }
                Input::Undo => {
                    undo(&mut tracker, out)?;
                    break None;
                }
                Input::Feedback(feedback) => break Some((choice.guess().clone(), feedback)),
                Input::Manual(word, feedback) => break Some((word, feedback)),
                Input::Invalid => {
                    writeln!(out, "❌ Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n")?;
                }
            }
        };

        let Some((guess, feedback)) = entry else {
            continue;
        };

        if let Err(e) = tracker.record(guess, feedback.clone()) {
            writeln!(out, "❌ {e}\n")?;
            continue;
        }

        if feedback.is_solved() {
            let turns = tracker.history().len();
            writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "{}",
                "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
            writeln!(
                out,
                "\n  Solution found in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            )?;

            writeln!(out, "\n  Guess history:")?;
            for (i, (word, marks)) in tracker.history().iter().enumerate() {
                writeln!(
                    out,
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    colored_guess(word, marks),
                    marks.to_emoji()
                )?;
            }
            writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())?;

            match read_line(&mut input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => new_game(&mut tracker, out)?,
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }

    Ok(())
}

fn new_game<O: Write>(tracker: &mut Tracker<'_>, out: &mut O) -> io::Result<()> {
    tracker.reset();
    writeln!(out, "\n🔄 New game started!\n")
}

fn undo<O: Write>(tracker: &mut Tracker<'_>, out: &mut O) -> io::Result<()> {
    if tracker.undo() {
        writeln!(out, "✓ Undone! Back to turn {}\n", tracker.round())
    } else {
        writeln!(out, "Nothing to undo!\n")
    }
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
