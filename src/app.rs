use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::content;
use crate::engine::{SampleError, Session, SessionState, Summary, DEFAULT_QUIZ_LEN};
use crate::models::{Difficulty, QuestionKind, Response, Topic};

/// Menu order on the setup screen.
pub const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Difficulty not yet chosen.
    Setup,
    /// Walking the questions.
    Quiz,
    /// Final score.
    Result,
}

/// Outcome of the most recently completed quiz, printed by `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub score: usize,
    pub total: usize,
}

/// Interactive state: owns the engine session, the random source, and the
/// per-screen cursor/input state the UI renders.
pub struct App {
    pub screen: Screen,
    topic: Topic,
    quiz_len: usize,
    rng: StdRng,
    selected_difficulty: usize,
    session: Option<Session>,
    selected_option: usize,
    input: String,
    feedback: Option<bool>,
    result_scroll: usize,
    report: Option<Report>,
    setup_error: Option<String>,
}

impl App {
    pub fn new(topic: Topic, quiz_len: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            screen: Screen::Setup,
            topic,
            quiz_len: if quiz_len == 0 { DEFAULT_QUIZ_LEN } else { quiz_len },
            rng,
            selected_difficulty: 0,
            session: None,
            selected_option: 0,
            input: String::new(),
            feedback: None,
            result_scroll: 0,
            report: None,
            setup_error: None,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn selected_difficulty(&self) -> usize {
        self.selected_difficulty
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Correctness of the current question, present once it is revealed.
    pub fn feedback(&self) -> Option<bool> {
        self.feedback
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn setup_error(&self) -> Option<&str> {
        self.setup_error.as_deref()
    }

    pub fn summary(&self) -> Option<Summary> {
        self.session.as_ref().map(|s| s.summary())
    }

    /// The most recently completed quiz, surviving restarts.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn select_next_difficulty(&mut self) {
        self.selected_difficulty = (self.selected_difficulty + 1) % DIFFICULTIES.len();
    }

    pub fn select_previous_difficulty(&mut self) {
        self.selected_difficulty =
            (self.selected_difficulty + DIFFICULTIES.len() - 1) % DIFFICULTIES.len();
    }

    /// Starts a session at `difficulty`, surfacing sampling failures.
    pub fn try_start(&mut self, difficulty: Difficulty) -> Result<(), SampleError> {
        let session = Session::start(
            &mut self.rng,
            content::templates(self.topic),
            difficulty,
            self.quiz_len,
        )?;
        self.session = Some(session);
        self.screen = Screen::Quiz;
        self.selected_option = 0;
        self.input.clear();
        self.feedback = None;
        self.setup_error = None;
        Ok(())
    }

    /// Starts a session at the difficulty selected on the setup screen;
    /// failures are kept for the setup screen to display.
    pub fn start_quiz(&mut self) {
        let difficulty = DIFFICULTIES[self.selected_difficulty];
        if let Err(err) = self.try_start(difficulty) {
            warn!("could not start session: {}", err);
            self.setup_error = Some(err.to_string());
        }
    }

    fn option_count(&self) -> usize {
        match self.session.as_ref().and_then(|s| s.current_question()) {
            Some(question) => match &question.kind {
                QuestionKind::MultipleChoice { options, .. } => options.len(),
                QuestionKind::FreeResponse { .. } => 0,
            },
            None => 0,
        }
    }

    fn answerable(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| !s.revealed() && !s.is_complete())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.answerable() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.answerable() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn input_push(&mut self, c: char) {
        if self.option_count() == 0 && self.answerable() && self.input.len() < 64 {
            self.input.push(c);
        }
    }

    pub fn input_pop(&mut self) {
        if self.answerable() {
            self.input.pop();
        }
    }

    /// Submits the in-progress answer. Rejected submissions (empty text,
    /// already revealed) are no-ops.
    pub fn submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(question) = session.current_question() else {
            return;
        };
        let response = match &question.kind {
            QuestionKind::MultipleChoice { .. } => Response::Choice(self.selected_option),
            QuestionKind::FreeResponse { .. } => Response::Text(self.input.clone()),
        };
        if let Ok(correct) = session.submit(response) {
            self.feedback = Some(correct);
        }
    }

    /// Moves past a revealed question; on the last one, records the report
    /// and shows the result screen. A no-op before the reveal.
    pub fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Ok(state) = session.advance() else {
            return;
        };
        match state {
            SessionState::Complete => {
                let summary = session.summary();
                let difficulty = session.difficulty();
                self.report = Some(Report {
                    topic: self.topic,
                    difficulty,
                    score: summary.score,
                    total: summary.total,
                });
                self.screen = Screen::Result;
                self.result_scroll = 0;
            }
            SessionState::Active { .. } => {
                self.selected_option = 0;
                self.input.clear();
                self.feedback = None;
            }
        }
    }

    /// Back to the setup screen, abandoning any in-flight session.
    pub fn restart(&mut self) {
        self.session = None;
        self.screen = Screen::Setup;
        self.selected_option = 0;
        self.input.clear();
        self.feedback = None;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .session
            .as_ref()
            .map(|s| s.len().saturating_sub(1))
            .unwrap_or(0);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
