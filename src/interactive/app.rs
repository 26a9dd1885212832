//! TUI application state and logic
//!
//! The viewer plays the solver against a secret it knows and lets the user step through the
//! rounds one at a time.

use crate::core::Word;
use crate::solver::{Game, SolverContext, SolverError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub ctx: &'a SolverContext,
    pub game: Game<'a>,
    pub status: GameStatus,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

/// Whether the current game can still be stepped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Solved,
    Failed(SolverError),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl<'a> App<'a> {
    /// Start watching a game against `target`, or a random dictionary word
    ///
    /// # Errors
    ///
    /// Returns an error if the target does not have the configured length.
    pub fn new(
        ctx: &'a SolverContext,
        target: Option<Word>,
        seed: u64,
    ) -> Result<Self, SolverError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = match target {
            Some(word) => word,
            None => random_target(ctx, &mut rng)?,
        };

        let mut app = Self {
            ctx,
            game: Game::new(ctx, target)?,
            status: GameStatus::Playing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Watching the solver. Press SPACE or ENTER to play a round.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Play one round of the current game
    pub fn step(&mut self) {
        if self.status != GameStatus::Playing {
            self.add_message("Game over. Press 'n' for a new game.", MessageStyle::Info);
            return;
        }

        let outcome = self.game.step(&mut self.rng).map(|round| {
            round.map(|round| {
                format!(
                    "Round {}: {} left {} of {} candidates",
                    round.number,
                    round.guess.text().to_uppercase(),
                    round.pool_after,
                    round.pool_before
                )
            })
        });

        match outcome {
            Ok(Some(text)) => {
                self.add_message(&text, MessageStyle::Info);

                if self.game.is_solved() {
                    let guesses = self.game.rounds().len();
                    self.status = GameStatus::Solved;
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    self.stats.total_guesses += guesses;
                    self.add_message(
                        &format!(
                            "🎉 Solved {} in {guesses}!",
                            self.game.target().text().to_uppercase()
                        ),
                        MessageStyle::Success,
                    );
                }
            }
            Ok(None) => self.status = GameStatus::Solved,
            Err(e) => {
                self.stats.total_games += 1;
                self.add_message(&format!("Solver stopped: {e}"), MessageStyle::Error);
                self.status = GameStatus::Failed(e);
            }
        }
    }

    /// Play the remaining rounds of the current game
    pub fn finish(&mut self) {
        while self.status == GameStatus::Playing {
            self.step();
        }
    }

    /// Start a new game against a random dictionary word
    pub fn new_game(&mut self) {
        let game = random_target(self.ctx, &mut self.rng).and_then(|t| Game::new(self.ctx, t));
        match game {
            Ok(game) => {
                debug!("new watched game: {}", game.target());
                self.game = game;
                self.status = GameStatus::Playing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.game.tracker().pool().len()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.step(),
            KeyCode::Char('f') => self.finish(),
            KeyCode::Char('n') => self.new_game(),
            _ => {}
        }
    }
}

fn random_target<R: Rng + ?Sized>(
    ctx: &SolverContext,
    rng: &mut R,
) -> Result<Word, SolverError> {
    ctx.dictionary()
        .words()
        .choose(rng)
        .cloned()
        .ok_or(SolverError::EmptyDictionary {
            word_length: ctx.word_length(),
        })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    fn context() -> SolverContext {
        SolverContext::new(
            words_from_slice(&["crane", "slate", "trace", "grape"]),
            SolverConfig::default(),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn stepping_reaches_the_target() {
        let ctx = context();
        let mut app = App::new(&ctx, Some(Word::new("trace").unwrap()), 1).unwrap();

        for _ in 0..10 {
            press(&mut app, KeyCode::Char(' '));
        }

        assert_eq!(app.status, GameStatus::Solved);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.candidates_count(), 1);
        assert_eq!(
            app.game.rounds().last().map(|round| round.guess.text()),
            Some("trace")
        );
    }

    #[test]
    fn finish_and_new_game() {
        let ctx = context();
        let mut app = App::new(&ctx, None, 2).unwrap();

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.status, GameStatus::Solved);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.status, GameStatus::Playing);
        assert!(app.game.rounds().is_empty());
        assert_eq!(app.candidates_count(), 4);
        assert!(ctx.dictionary().contains(app.game.target()));
    }

    #[test]
    fn unknown_target_fails_cleanly() {
        let ctx = context();
        let mut app = App::new(&ctx, Some(Word::new("fuzzy").unwrap()), 3).unwrap();

        app.finish();
        assert_eq!(app.status, GameStatus::Failed(SolverError::NoCandidates));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|message| message.style == MessageStyle::Error)
        );
    }

    #[test]
    fn quit_keys() {
        let ctx = context();
        let mut app = App::new(&ctx, None, 4).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&ctx, None, 4).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let ctx = context();
        let mut app = App::new(&ctx, None, 5).unwrap();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }

    #[test]
    fn wrong_length_target_is_rejected() {
        let ctx = context();
        assert!(App::new(&ctx, Some(Word::new("cranes").unwrap()), 0).is_err());
    }
}
