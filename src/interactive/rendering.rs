//! TUI rendering with ratatui
//!
//! Visualizations for watching the solver play.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, GameView};
use crate::output::formatters::{create_progress_bar, guess_label, spaced_pattern};
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
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_solver_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HANGMAN SOLVER - Watch Mode")
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

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Pattern
            Constraint::Length(3), // Wrong guess gauge
            Constraint::Min(3),    // Turn history
        ])
        .split(area);

    render_pattern(f, app, chunks[0]);
    render_wrong_gauge(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_pattern(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Secret Word ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(game) = app.game() else {
        let paragraph = Paragraph::new("Waiting for a secret word...")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let color = match game.status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::KeepGuessing => Color::Yellow,
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_pattern(game.pattern()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "Score: {}   Status: {}",
            game.score(),
            game.status()
        ))
        .alignment(Alignment::Center),
    ];
    if game.status() != GameStatus::KeepGuessing {
        content.push(
            Line::from(format!("Secret: {}", game.secret())).alignment(Alignment::Center),
        );
    }

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_wrong_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (made, max) = app
        .game()
        .map_or((0, app.max_wrong_guesses), |g| {
            (g.wrong_guesses_made(), g.max_wrong_guesses())
        });
    let ratio = if max == 0 {
        1.0
    } else {
        (made as f64 / max as f64).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if made > max {
            Color::Red
        } else {
            Color::Magenta
        }))
        .ratio(ratio)
        .label(format!("{made}/{max}"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let turns = app.session.as_ref().map_or(&[][..], |s| s.turns.as_slice());

    let history_items: Vec<ListItem> = turns
        .iter()
        .enumerate()
        .rev()
        .map(|(i, turn)| {
            let (mark, color) = if turn.hit {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:2}. ", i + 1)),
                Span::styled(mark, Style::default().fg(color)),
                Span::raw(format!(
                    " {:<16} {} [{} candidates]",
                    guess_label(&turn.guess),
                    turn.pattern_after,
                    turn.candidates
                )),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" Turns ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_solver_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Letter ranking
            Constraint::Percentage(25), // Candidates
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_ranking(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let guessed = app.game().map(GameView::guessed_letters).unwrap_or_default();
    let ranking = app.candidates().map_or(&[][..], |c| c.ranking());
    let best = ranking.first().map_or(1, |s| s.word_count.max(1));

    let items: Vec<ListItem> = ranking
        .iter()
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|stat| {
            let style = if guessed.contains(stat.letter) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            let bar = create_progress_bar(stat.word_count as f64, best as f64, 16);
            ListItem::new(format!(
                "{} [{bar}] {:4} in {:4}",
                char::from(stat.letter),
                stat.count,
                stat.word_count
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Letter Ranking ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.candidates() {
        None => vec![Line::from("-")],
        Some(candidates) if candidates.is_empty() => {
            vec![Line::from("No candidates - secret not in dictionary?")]
        }
        Some(candidates) => {
            let sample: Vec<&str> = candidates.iter().take(24).collect();
            let more = candidates.len().saturating_sub(sample.len());
            let mut lines = vec![Line::from(Span::styled(
                format!("{} words", candidates.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            let mut text = sample.join(" ");
            if more > 0 {
                text.push_str(&format!(" ... +{more}"));
            }
            lines.push(Line::from(text));
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::SecretEntry => (
            " Secret Word | Enter to start, TAB for random, ESC to quit ",
            app.secret_input.as_str(),
            Color::Yellow,
        ),
        InputMode::Watching if app.autoplay => (
            " Autoplay | 'a' to pause ",
            "",
            Color::Magenta,
        ),
        InputMode::Watching => (
            " Enter/Space: next turn | 'a': autoplay | 'n': new word ",
            "",
            Color::Cyan,
        ),
        InputMode::GameOver => (" Game over | 'n': new word | 'q': quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let average_text = format!("Avg score: {:.2}", app.stats.average_score());
    f.render_widget(
        Paragraph::new(average_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!(
        "Candidates: {}",
        app.candidates().map_or(0, |c| c.len())
    );
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New | a: Auto")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
