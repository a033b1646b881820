//! # algebra-quiz
//!
//! Short, randomized abstract-algebra quizzes in the terminal.
//!
//! Each topic owns a bank of question templates. A quiz samples one
//! question per template family (never two from the same family), walks
//! them in a strict setup -> question -> feedback -> summary lifecycle,
//! and grades by option index or trimmed, case-insensitive text match.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use algebra_quiz::{Quiz, QuizError, QuizOptions, Topic};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(QuizOptions {
//!         topic: Topic::Groups,
//!         ..QuizOptions::default()
//!     })?;
//!
//!     // Run the quiz in the terminal.
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The engine itself (sampling, shuffling, grading, the session state
//! machine) is exposed for callers that bring their own presentation:
//! see [`Session`], [`sample`], and [`grade`].

mod app;
mod content;
mod engine;
mod models;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Report, Screen, DIFFICULTIES};
pub use content::templates;
pub use engine::{
    grade, sample, shuffle_options, shuffled, GeneratorFn, SampleError, Session, SessionError,
    SessionState, Summary, Template, DEFAULT_MAX_ATTEMPTS, DEFAULT_QUIZ_LEN,
};
pub use models::{ContentError, Difficulty, Question, QuestionKind, Response, Topic};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Could not assemble a quiz from the topic's template bank.
    Content(SampleError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Content(e) => write!(f, "Failed to build quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Content(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<SampleError> for QuizError {
    fn from(err: SampleError) -> Self {
        QuizError::Content(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Configuration for a quiz run.
#[derive(Debug, Clone)]
pub struct QuizOptions {
    /// Topic bank to draw questions from.
    pub topic: Topic,
    /// Pre-selected difficulty; `None` shows the setup screen.
    pub difficulty: Option<Difficulty>,
    /// Questions per quiz.
    pub questions: usize,
    /// Fixed seed for the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            topic: Topic::Groups,
            difficulty: None,
            questions: DEFAULT_QUIZ_LEN,
            seed: None,
        }
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz. Fails only when a pre-selected difficulty is given
    /// and the topic bank cannot fill a quiz.
    pub fn new(options: QuizOptions) -> Result<Self, QuizError> {
        let mut app = App::new(options.topic, options.questions, options.seed);
        if let Some(difficulty) = options.difficulty {
            app.try_start(difficulty)?;
        }
        Ok(Self { app })
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, displays the quiz UI, and returns when the
    /// user quits, with the report of the last completed quiz, if any.
    pub fn run(mut self) -> Result<Option<Report>, QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result?;
        Ok(self.app.report().cloned())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Setup => handle_setup_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Result => handle_result_input(app, key),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_difficulty();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_difficulty();
            false
        }
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::Esc {
        return true;
    }

    if app.feedback().is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
            app.advance();
        }
        return false;
    }

    let is_choice = app
        .session()
        .and_then(|s| s.current_question())
        .map(|q| q.is_multiple_choice())
        .unwrap_or(false);

    if is_choice {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.submit(),
            _ => {}
        }
    } else {
        // Free response: the keyboard belongs to the input box.
        match key {
            KeyCode::Char(c) => app.input_push(c),
            KeyCode::Backspace => app.input_pop(),
            KeyCode::Enter => app.submit(),
            _ => {}
        }
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
