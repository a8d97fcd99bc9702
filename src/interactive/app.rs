//! TUI application state and logic

use crate::catalog::Catalog;
use crate::game::{
    GameConfig, GameStatus, KeyValueStore, Session, Submission, Ticker, resume, save,
};
use crate::selector::{GameMode, Selection, WordSelector};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Timer ticks the current row stays marked after an incomplete submit
const SHAKE_TICKS: u8 = 1;

/// Application state
pub struct App<'a> {
    pub catalog: &'a Catalog,
    selector: WordSelector<'a>,
    pub config: GameConfig,
    pub session: Session,
    ticker: Ticker,
    store: &'a mut dyn KeyValueStore,
    rng: ThreadRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub shake: u8,
    pub should_quit: bool,
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

/// Games finished during this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    fn record(&mut self, session: &Session) {
        self.total_games += 1;
        if session.status() == GameStatus::Won {
            self.games_won += 1;
            let guesses = session.guesses().len();
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start on `selection`, resuming saved daily progress from `store`
    ///
    /// Returns `None` if the selection points outside the catalog.
    pub fn new(
        catalog: &'a Catalog,
        selection: Selection,
        config: GameConfig,
        store: &'a mut dyn KeyValueStore,
    ) -> Option<Self> {
        let session = resume(catalog, selection, config.clone(), store)?;
        let mut app = Self {
            catalog,
            selector: WordSelector::new(catalog),
            config,
            session,
            ticker: Ticker::every_second(Instant::now()),
            store,
            rng: rand::rng(),
            messages: Vec::new(),
            stats: Statistics::default(),
            shake: 0,
            should_quit: false,
        };

        if app.session.guesses().is_empty() {
            app.add_message(
                &format!(
                    "Guess the {}-letter slang word. Blue tiles are given.",
                    app.session.word_len()
                ),
                MessageStyle::Info,
            );
        } else {
            app.add_message("Welcome back! Your progress was restored.", MessageStyle::Info);
        }
        if app.session.is_over() {
            app.add_message("Press 'n' for a random word or 'q' to quit.", MessageStyle::Info);
        }
        Some(app)
    }

    /// How long the event loop may wait for input
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.ticker.timeout(now)
    }

    /// Run every timer tick that fell due up to `now`
    pub fn advance(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            self.on_tick();
        }
    }

    /// One second passed
    pub fn on_tick(&mut self) {
        self.shake = self.shake.saturating_sub(1);

        let before = self.session.hint_progress();
        if !self.session.tick() {
            return;
        }
        let after = self.session.hint_progress();

        if after.definitions > before.definitions {
            self.add_message("💡 New definition unlocked", MessageStyle::Info);
        }
        if after.letters > before.letters {
            self.add_message("💡 A letter was revealed", MessageStyle::Info);
        }
        // the timer is part of the saved state
        self.persist();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('n') if ctrl => self.new_random_game(),
            KeyCode::Esc => self.quit(),
            _ if self.session.is_over() => match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('n') => self.new_random_game(),
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => {
                self.session.add_letter(c);
            }
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Submission::NotPlaying => {}
            Submission::Incomplete => {
                self.shake = SHAKE_TICKS;
                self.add_message(
                    &format!("Not enough letters ({} needed)", self.session.input_len()),
                    MessageStyle::Error,
                );
            }
            Submission::Accepted(status) => {
                self.shake = 0;
                self.persist();
                match status {
                    GameStatus::Won => {
                        self.stats.record(&self.session);
                        let celebration = match self.session.guesses().len() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for a random word or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.record(&self.session);
                        self.add_message(
                            &format!("The word was {}", self.session.target().to_uppercase()),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 'n' for a random word or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Playing => {}
                }
            }
        }
    }

    /// Replace the session with a random word other than the current one
    pub fn new_random_game(&mut self) {
        self.persist();
        let index = self
            .selector
            .random_index(&mut self.rng, Some(self.session.target()));
        let selection = Selection {
            index,
            mode: GameMode::Free,
        };
        let Some(session) = Session::new(self.catalog, selection, self.config.clone()) else {
            self.add_message("Could not pick a new word", MessageStyle::Error);
            return;
        };
        self.session = session;
        self.ticker.reset(Instant::now());
        self.shake = 0;
        self.messages.clear();
        self.add_message(
            &format!("New game! {} letters.", self.session.word_len()),
            MessageStyle::Info,
        );
    }

    pub fn quit(&mut self) {
        self.persist();
        self.should_quit = true;
    }

    fn persist(&mut self) {
        save(&self.session, self.store);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.advance(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
