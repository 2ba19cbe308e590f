//! TUI application state and logic

use crate::core::{GameStatus, HangmanGame};
use crate::solver::{CandidateSet, FrequencyStrategy, Turn, step};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::IteratorRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Delay between automatic turns
const AUTOPLAY_DELAY: Duration = Duration::from_millis(400);

/// A game being watched
pub struct Session {
    pub game: HangmanGame,
    pub strategy: FrequencyStrategy,
    pub turns: Vec<Turn>,
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub max_wrong_guesses: usize,
    pub input_mode: InputMode,
    pub secret_input: String,
    pub session: Option<Session>,
    pub autoplay: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the secret word
    SecretEntry,
    /// Stepping through the solver's turns
    Watching,
    GameOver,
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
    pub total_score: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.total_games as f64
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, max_wrong_guesses: usize) -> Self {
        Self {
            dictionary,
            max_wrong_guesses,
            input_mode: InputMode::SecretEntry,
            secret_input: String::new(),
            session: None,
            autoplay: false,
            messages: vec![Message {
                text: format!(
                    "Welcome! Type a secret word ({} in dictionary) or press TAB for a random one.",
                    dictionary.len()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Candidate words the solver is currently considering
    #[must_use]
    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.session.as_ref().map(|s| s.strategy.candidates())
    }

    #[must_use]
    pub fn game(&self) -> Option<&HangmanGame> {
        self.session.as_ref().map(|s| &s.game)
    }

    /// Start a game with the typed secret
    pub fn start_game(&mut self) {
        let secret = self.secret_input.trim().to_string();
        let game = match HangmanGame::new(&secret, self.max_wrong_guesses) {
            Ok(game) => game,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if !self.dictionary.contains(&secret) {
            self.add_message(
                &format!(
                    "'{}' is not in the dictionary; the solver cannot find it.",
                    game.secret()
                ),
                MessageStyle::Error,
            );
        }

        let strategy = FrequencyStrategy::new(game.secret_len(), self.dictionary);
        self.add_message(
            &format!(
                "New game: {} letters. Enter to step, 'a' for autoplay.",
                game.secret_len()
            ),
            MessageStyle::Info,
        );
        self.session = Some(Session {
            game,
            strategy,
            turns: Vec::new(),
        });
        self.secret_input.clear();
        self.input_mode = InputMode::Watching;
    }

    /// Pick a random dictionary word as the secret
    pub fn start_random_game(&mut self) {
        if let Some(word) = self.dictionary.iter().choose(&mut rand::rng()) {
            self.secret_input = word.to_string();
            self.start_game();
        } else {
            self.add_message("Dictionary is empty!", MessageStyle::Error);
        }
    }

    /// Let the solver play one turn
    pub fn step(&mut self) {
        if self.input_mode != InputMode::Watching {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match step(&mut session.game, &mut session.strategy) {
            Ok(turn) => {
                let text = format!(
                    "{} → {} ({})",
                    turn.guess,
                    turn.pattern_after,
                    if turn.hit { "hit" } else { "miss" }
                );
                let style = if turn.hit {
                    MessageStyle::Success
                } else {
                    MessageStyle::Info
                };
                session.turns.push(turn);
                self.add_message(&text, style);
            }
            Err(err) => {
                self.autoplay = false;
                self.input_mode = InputMode::GameOver;
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.finish_if_over();
    }

    fn finish_if_over(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let status = session.game.status();
        if status == GameStatus::KeepGuessing {
            return;
        }

        let score = session.game.score();
        let secret = session.game.secret().to_string();
        self.stats.total_games += 1;
        self.stats.total_score += score;
        self.autoplay = false;
        self.input_mode = InputMode::GameOver;

        if status == GameStatus::Won {
            self.stats.games_won += 1;
            self.add_message(
                &format!("🎉 Solved {secret} with score {score}!"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 Lost on {secret} (score {score})"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    pub fn toggle_autoplay(&mut self) {
        if self.input_mode == InputMode::Watching {
            self.autoplay = !self.autoplay;
        }
    }

    pub fn new_game(&mut self) {
        self.session = None;
        self.autoplay = false;
        self.secret_input.clear();
        self.input_mode = InputMode::SecretEntry;
        self.add_message("Type the next secret word.", MessageStyle::Info);
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::SecretEntry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.start_random_game(),
                KeyCode::Enter => self.start_game(),
                KeyCode::Backspace => {
                    self.secret_input.pop();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.secret_input.push(c.to_ascii_uppercase());
                }
                _ => {}
            },
            InputMode::Watching => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('a') => self.toggle_autoplay(),
                KeyCode::Enter | KeyCode::Char(' ') => self.step(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(AUTOPLAY_DELAY)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        } else if app.autoplay {
            app.step();
        }
    }

    Ok(())
}
