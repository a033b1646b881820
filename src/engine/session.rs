//! The per-quiz state machine: a strict linear walk over the sampled
//! questions, one grading action per question.

use std::fmt;

use log::debug;
use rand::RngCore;

use crate::engine::grader::grade;
use crate::engine::sampler::{sample, SampleError, Template, DEFAULT_MAX_ATTEMPTS};
use crate::models::{Difficulty, Question, Response};

/// Quiz length used when the caller does not override it.
pub const DEFAULT_QUIZ_LEN: usize = 5;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// On the question at `position`; `revealed` is true once it is graded.
    Active { position: usize, revealed: bool },
    /// All questions answered.
    Complete,
}

/// Rejected session transitions. None of these change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `submit` after the current question was already graded.
    AlreadyRevealed,
    /// `advance` before the current question was graded.
    NotRevealed,
    /// `submit` or `advance` on a completed session.
    Complete,
    /// `submit` with no selection or blank text.
    EmptyResponse,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SessionError::AlreadyRevealed => "question already graded",
            SessionError::NotRevealed => "question not yet graded",
            SessionError::Complete => "session is complete",
            SessionError::EmptyResponse => "empty response",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for SessionError {}

/// Final (or running) score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

/// One complete quiz attempt, from difficulty selection to final score.
///
/// Owned exclusively by one interactive flow; restarting is simply dropping
/// the session and creating a new one.
pub struct Session {
    difficulty: Difficulty,
    questions: Vec<Question>,
    position: usize,
    pending: Option<Response>,
    revealed: bool,
    score: usize,
    outcomes: Vec<bool>,
}

impl Session {
    /// Samples `len` distinct-category questions and enters the active state.
    pub fn start(
        rng: &mut dyn RngCore,
        templates: &[Template],
        difficulty: Difficulty,
        len: usize,
    ) -> Result<Self, SampleError> {
        let questions = sample(rng, templates, difficulty, len, DEFAULT_MAX_ATTEMPTS)?;
        debug!("session started: {} questions at {}", questions.len(), difficulty);
        Ok(Self {
            difficulty,
            questions,
            position: 0,
            pending: None,
            revealed: false,
            score: 0,
            outcomes: Vec::with_capacity(len),
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else {
            SessionState::Active {
                position: self.position,
                revealed: self.revealed,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// The question awaiting an answer, `None` once the session is complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 0-based cursor; equals `len()` when complete.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The response submitted for the current question, present only while
    /// `revealed` is true.
    pub fn pending_response(&self) -> Option<&Response> {
        self.pending.as_ref()
    }

    /// Correctness of every graded question so far, in question order.
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    /// Grades `response` against the current question.
    ///
    /// Legal exactly once per question: before the reveal, with a non-empty
    /// response. On success returns whether the answer was correct and marks
    /// the question revealed; the score increments by one only on a correct
    /// grade. Every error leaves the session untouched.
    pub fn submit(&mut self, response: Response) -> Result<bool, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Complete);
        }
        if self.revealed {
            return Err(SessionError::AlreadyRevealed);
        }
        if response.is_empty() {
            return Err(SessionError::EmptyResponse);
        }

        let correct = grade(&self.questions[self.position], &response);
        if correct {
            self.score += 1;
        }
        self.outcomes.push(correct);
        self.pending = Some(response);
        self.revealed = true;
        debug!(
            "graded question {}/{}: {}",
            self.position + 1,
            self.questions.len(),
            if correct { "correct" } else { "incorrect" }
        );
        Ok(correct)
    }

    /// Moves past a revealed question, to the next one or to `Complete`.
    /// Clears the pending response and the reveal flag. Never changes the
    /// score and never skips grading.
    pub fn advance(&mut self) -> Result<SessionState, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Complete);
        }
        if !self.revealed {
            return Err(SessionError::NotRevealed);
        }

        self.position += 1;
        self.pending = None;
        self.revealed = false;
        if self.is_complete() {
            debug!("session complete: {}/{}", self.score, self.questions.len());
        }
        Ok(self.state())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            score: self.score,
            total: self.questions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn choice(category: &'static str, correct_index: usize) -> Question {
        Question {
            category,
            prompt: format!("{}?", category),
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice {
                options: ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
                correct_index,
            },
        }
    }

    fn gen_g1(_: &mut dyn RngCore, _: Difficulty) -> Question {
        choice("g1", 0)
    }
    fn gen_g2(_: &mut dyn RngCore, _: Difficulty) -> Question {
        choice("g2", 1)
    }
    fn gen_g3(_: &mut dyn RngCore, _: Difficulty) -> Question {
        choice("g3", 2)
    }
    fn gen_g4(_: &mut dyn RngCore, _: Difficulty) -> Question {
        choice("g4", 3)
    }
    fn gen_g5(_: &mut dyn RngCore, _: Difficulty) -> Question {
        Question {
            category: "g5",
            prompt: "g5?".to_string(),
            explanation: String::new(),
            kind: QuestionKind::FreeResponse {
                correct_answer: "21".to_string(),
                accepted_answers: vec!["21".to_string()],
            },
        }
    }
    fn gen_g6(_: &mut dyn RngCore, _: Difficulty) -> Question {
        choice("g6", 0)
    }

    const BANK: &[Template] = &[
        Template {
            category: "g1",
            generate: gen_g1,
        },
        Template {
            category: "g2",
            generate: gen_g2,
        },
        Template {
            category: "g3",
            generate: gen_g3,
        },
        Template {
            category: "g4",
            generate: gen_g4,
        },
        Template {
            category: "g5",
            generate: gen_g5,
        },
        Template {
            category: "g6",
            generate: gen_g6,
        },
    ];

    fn start(seed: u64, len: usize) -> Session {
        let mut rng = StdRng::seed_from_u64(seed);
        Session::start(&mut rng, BANK, Difficulty::Medium, len).unwrap()
    }

    fn correct_response(question: &Question) -> Response {
        match &question.kind {
            QuestionKind::MultipleChoice { correct_index, .. } => {
                Response::Choice(*correct_index)
            }
            QuestionKind::FreeResponse { correct_answer, .. } => {
                Response::Text(correct_answer.clone())
            }
        }
    }

    #[test]
    fn test_perfect_walk() {
        // Six categories, quiz size five: five distinct questions, and
        // answering all of them correctly scores 5/5.
        let mut session = start(11, 5);
        assert_eq!(session.len(), 5);

        while let Some(question) = session.current_question().cloned() {
            let correct = session.submit(correct_response(&question)).unwrap();
            assert!(correct);
            session.advance().unwrap();
        }

        assert!(session.is_complete());
        assert_eq!(session.summary(), Summary { score: 5, total: 5 });
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_score_increments_only_on_correct_submit() {
        let mut session = start(5, 4);
        let mut expected = 0;

        for i in 0..4 {
            let question = session.current_question().unwrap().clone();
            // Answer every other question wrong.
            let response = if i % 2 == 0 {
                expected += 1;
                correct_response(&question)
            } else {
                match &question.kind {
                    QuestionKind::MultipleChoice { correct_index, .. } => {
                        Response::Choice((correct_index + 1) % 4)
                    }
                    QuestionKind::FreeResponse { .. } => Response::Text("wrong".to_string()),
                }
            };
            let before = session.score();
            session.submit(response).unwrap();
            assert!(session.score() == before || session.score() == before + 1);
            let after_submit = session.score();
            session.advance().unwrap();
            assert_eq!(session.score(), after_submit);
        }

        assert_eq!(session.score(), expected);
        assert_eq!(session.outcomes(), &[true, false, true, false]);
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut session = start(2, 3);
        let question = session.current_question().unwrap().clone();
        session.submit(correct_response(&question)).unwrap();
        let score = session.score();

        let err = session.submit(correct_response(&question)).unwrap_err();
        assert_eq!(err, SessionError::AlreadyRevealed);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn test_advance_requires_reveal() {
        let mut session = start(2, 3);
        assert_eq!(session.advance().unwrap_err(), SessionError::NotRevealed);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_empty_response_rejected() {
        let mut session = start(8, 3);
        let err = session.submit(Response::Text("   ".to_string())).unwrap_err();
        assert_eq!(err, SessionError::EmptyResponse);
        assert!(!session.revealed());
        assert_eq!(session.score(), 0);
        // The question is still answerable afterwards.
        let question = session.current_question().unwrap().clone();
        session.submit(correct_response(&question)).unwrap();
    }

    #[test]
    fn test_complete_session_rejects_everything() {
        let mut session = start(4, 2);
        for _ in 0..2 {
            let question = session.current_question().unwrap().clone();
            session.submit(correct_response(&question)).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(
            session.submit(Response::Choice(0)).unwrap_err(),
            SessionError::Complete
        );
        assert_eq!(session.advance().unwrap_err(), SessionError::Complete);
    }

    #[test]
    fn test_pending_cleared_on_advance() {
        let mut session = start(6, 2);
        let question = session.current_question().unwrap().clone();
        session.submit(correct_response(&question)).unwrap();
        assert!(session.pending_response().is_some());
        session.advance().unwrap();
        assert!(session.pending_response().is_none());
        assert!(!session.revealed());
    }
}
