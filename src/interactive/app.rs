//! TUI application state and logic

use crate::core::WordSize;
use crate::game::{Game, GameState};
use crate::wordlists::{self, WordList, WordListError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};

/// Application state
pub struct App {
    /// Where `<N>.txt` word lists are loaded from
    pub words_dir: PathBuf,
    lists: FxHashMap<WordSize, Rc<WordList>>,
    /// `None` while the size menu is shown
    pub game: Option<Game>,
    pub rng: StdRng,
    pub strict: bool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Menu,
    Guessing,
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
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, state: GameState) {
        self.total_games += 1;
        if state == GameState::Won {
            self.games_won += 1;
        }
    }
}

impl App {
    /// Create the app on the word size menu
    #[must_use]
    pub fn new(words_dir: PathBuf, rng: StdRng, strict: bool) -> Self {
        let mut app = Self {
            words_dir,
            lists: FxHashMap::default(),
            game: None,
            rng,
            strict,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Menu,
        };
        app.add_message("Choose your word size to start", MessageStyle::Info);
        app
    }

    /// Use an in-memory list for its size instead of reading `<N>.txt`
    #[must_use]
    pub fn with_word_list(mut self, words: WordList) -> Self {
        self.lists.insert(words.size(), Rc::new(words));
        self
    }

    fn word_list(&mut self, size: WordSize) -> Result<Rc<WordList>, WordListError> {
        if let Some(words) = self.lists.get(&size) {
            return Ok(Rc::clone(words));
        }
        let words = Rc::new(wordlists::load(&self.words_dir, size)?);
        self.lists.insert(size, Rc::clone(&words));
        Ok(words)
    }

    /// Start a game of `size` words, loading its list on first use
    ///
    /// # Errors
    ///
    /// Returns an error if the word list for `size` cannot be loaded; the app
    /// state is left unchanged.
    pub fn select_size(&mut self, size: WordSize) -> Result<(), WordListError> {
        let words = self.word_list(size)?;
        self.start_game(&words);
        Ok(())
    }

    fn start_game(&mut self, words: &Rc<WordList>) {
        let mut game = Game::draw(words, &mut self.rng);
        if self.strict {
            game = game.with_dictionary(Rc::clone(words));
        }
        let size = game.size();
        self.game = Some(game);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "You have {} tries to guess the {size}-letter word I'm thinking of",
                size.guess_budget()
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
    }

    /// Count an unfinished game that had at least one guess as played
    fn abandon_game(&mut self) {
        if let Some(game) = &self.game
            && !game.is_over()
            && game.attempts_used() > 0
        {
            self.stats.record(game.state());
        }
    }

    /// Abandon the current game and draw a new secret of the same size
    pub fn new_game(&mut self) {
        let Some(size) = self.game.as_ref().map(Game::size) else {
            return;
        };
        let Some(words) = self.lists.get(&size).cloned() else {
            return;
        };
        self.abandon_game();
        self.start_game(&words);
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Abandon the current game and go back to the size menu
    pub fn main_menu(&mut self) {
        self.abandon_game();
        self.game = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Menu;
        self.add_message("Choose your word size to start", MessageStyle::Info);
    }

    pub fn push_letter(&mut self, c: char) {
        let Some(game) = &self.game else {
            return;
        };
        if c.is_ascii_alphabetic() && self.input_buffer.len() < game.size().len() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let input = std::mem::take(&mut self.input_buffer);
        let result = game.submit(&input);
        let secret = game.secret().text().to_uppercase();

        match result {
            Ok(turn) => match turn.state {
                GameState::Won => {
                    self.finish();
                    let noun = if turn.attempt == 1 { "guess" } else { "guesses" };
                    self.add_message(
                        &format!("You won in {} {noun}!", turn.attempt),
                        MessageStyle::Success,
                    );
                    self.add_message(
                        "Press 'n' for new game, 'm' for menu or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
                GameState::Exhausted => {
                    self.finish();
                    self.add_message(
                        &format!("The word was {secret}. You lost!"),
                        MessageStyle::Error,
                    );
                    self.add_message(
                        "Press 'n' for new game, 'm' for menu or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
                GameState::AwaitingGuess => {}
            },
            // Keep what was typed so far
            Err(err) if err.is_silent() => self.input_buffer = input,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self) {
        let Some(game) = &self.game else {
            return;
        };
        let (state, attempts) = (game.state(), game.attempts_used());
        self.stats.record(state);
        self.input_mode = InputMode::GameOver;
        info!(state = ?state, attempts, "game finished");
    }

    fn choose_size(&mut self, c: char) {
        let Some(size) = c
            .to_digit(10)
            .and_then(|d| WordSize::try_from(u64::from(d)).ok())
        else {
            return;
        };
        if let Err(err) = self.select_size(size) {
            warn!(%size, error = %err, "could not load word list");
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Menu => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if !ctrl => self.choose_size(c),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('m') => self.main_menu(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.main_menu(),
                KeyCode::Char('r') if ctrl => self.new_game(),
                KeyCode::Char(c) if !ctrl => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
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
            app.handle_key(key);
        }
    }

    Ok(())
}
