//! TUI rendering with ratatui
//!
//! Visualizations for the solver viewer.

use super::app::{App, GameStatus, MessageStyle};
use crate::core::{Feedback, Mark, Word};
use crate::core::letters::ALPHABET_SIZE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 WORDLE SAMPLER - Watching: {}",
        app.game.target().text().to_uppercase()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_rounds(f, app, chunks[0]);
    render_knowledge(f, app, chunks[1]);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Exact => Color::Green,
        Mark::Misplaced => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tiles(guess: &Word, feedback: &Feedback) -> Vec<Span<'static>> {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| {
            Span::styled(
                format!(" {} ", char::from(letter.to_ascii_uppercase())),
                tile_style(mark),
            )
        })
        .collect()
}

fn render_rounds(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.game.rounds().is_empty() {
        vec![Line::from("Press SPACE to play the first round")]
    } else {
        app.game
            .rounds()
            .iter()
            .map(|round| {
                let mut spans = vec![Span::raw(format!("{:>2}. ", round.number))];
                spans.extend(tiles(&round.guess, &round.feedback));
                spans.push(Span::raw(format!(
                    "  {} → {}",
                    round.pool_before, round.pool_after
                )));
                if let Some(score) = round.score {
                    spans.push(Span::styled(
                        format!("  ({:.1}% expected)", score * 100.0),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app.game.tracker().knowledge();

    let mut lines: Vec<Line> = (0..knowledge.word_length())
        .map(|position| {
            let allowed = knowledge.allowed_at(position);
            let letters = if allowed.len() == ALPHABET_SIZE {
                "any".to_string()
            } else {
                allowed.to_string().to_uppercase()
            };
            let style = if allowed.len() == 1 {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("Position {}: ", position + 1)),
                Span::styled(letters, style),
            ])
        })
        .collect();

    let confirmed = knowledge.confirmed();
    lines.push(Line::from(vec![
        Span::raw("Confirmed: "),
        Span::styled(
            if confirmed.is_empty() {
                "none".to_string()
            } else {
                confirmed.to_string().to_uppercase()
            },
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Knowledge ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Pool gauge
            Constraint::Percentage(45), // Candidates
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_pool_gauge(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_pool_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.ctx.dictionary().len();
    let remaining = app.candidates_count();
    let ratio = if total == 0 {
        0.0
    } else {
        remaining as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Candidate Pool ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{total} candidates"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.game.tracker().pool();

    let content: Vec<Line> = if pool.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if pool.len() <= 12 {
        pool.iter()
            .map(|word| {
                let style = if word == app.game.target() {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!("  • {}", word.text().to_uppercase()),
                    style,
                ))
            })
            .collect()
    } else {
        vec![Line::from(format!("{} candidates remaining", pool.len()))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (state_text, state_color) = match &app.status {
        GameStatus::Playing => ("Playing", Color::Yellow),
        GameStatus::Solved => ("Solved", Color::Green),
        GameStatus::Failed(_) => ("Failed", Color::Red),
    };
    let state = Paragraph::new(format!("State: {state_text}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(state_color));
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Avg: {:.2}",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.average_guesses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("SPACE: Step | f: Finish | n: New Game | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
