use std::fmt;

/// A single quiz question produced by a template generator.
///
/// Immutable once created; the session that sampled it owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Stable identifier of the template family, used to keep two questions
    /// from the same family out of one quiz.
    pub category: &'static str,
    /// Display text of the question.
    pub prompt: String,
    /// Display text shown after the answer has been graded.
    pub explanation: String,
    /// Response shape plus the correctness criterion.
    pub kind: QuestionKind,
}

/// The two question shapes, dispatched on by grading and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    MultipleChoice {
        /// Ordered answer options, length >= 2, already shuffled.
        options: Vec<String>,
        /// Index of the correct option after shuffling.
        correct_index: usize,
    },
    FreeResponse {
        /// Canonical answer, shown in feedback.
        correct_answer: String,
        /// All acceptable surface forms, compared case-insensitively.
        /// Must contain `correct_answer`.
        accepted_answers: Vec<String>,
    },
}

impl Question {
    /// Checks the content-provider contract. A violation means a broken
    /// template generator and fails session creation fast.
    pub fn validate(&self) -> Result<(), ContentError> {
        match &self.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_index,
            } => {
                if options.len() < 2 {
                    return Err(ContentError::TooFewOptions {
                        category: self.category,
                        count: options.len(),
                    });
                }
                if *correct_index >= options.len() {
                    return Err(ContentError::CorrectIndexOutOfRange {
                        category: self.category,
                        index: *correct_index,
                        len: options.len(),
                    });
                }
            }
            QuestionKind::FreeResponse {
                correct_answer,
                accepted_answers,
            } => {
                if accepted_answers.is_empty() {
                    return Err(ContentError::NoAcceptedAnswers {
                        category: self.category,
                    });
                }
                let canonical = correct_answer.trim().to_lowercase();
                if !accepted_answers
                    .iter()
                    .any(|a| a.trim().to_lowercase() == canonical)
                {
                    return Err(ContentError::CanonicalNotAccepted {
                        category: self.category,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }
}

/// A submitted answer: a selected option index or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Choice(usize),
    Text(String),
}

impl Response {
    /// An empty response is rejected by the session without a state change.
    pub fn is_empty(&self) -> bool {
        match self {
            Response::Choice(_) => false,
            Response::Text(text) => text.trim().is_empty(),
        }
    }
}

/// Contract violation by a template generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    TooFewOptions {
        category: &'static str,
        count: usize,
    },
    CorrectIndexOutOfRange {
        category: &'static str,
        index: usize,
        len: usize,
    },
    NoAcceptedAnswers {
        category: &'static str,
    },
    CanonicalNotAccepted {
        category: &'static str,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::TooFewOptions { category, count } => write!(
                f,
                "template '{}' produced {} options, need at least 2",
                category, count
            ),
            ContentError::CorrectIndexOutOfRange {
                category,
                index,
                len,
            } => write!(
                f,
                "template '{}' produced correct index {} for {} options",
                category, index, len
            ),
            ContentError::NoAcceptedAnswers { category } => {
                write!(f, "template '{}' produced no accepted answers", category)
            }
            ContentError::CanonicalNotAccepted { category } => write!(
                f,
                "template '{}' produced a canonical answer missing from its accepted list",
                category
            ),
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_question(options: &[&str], correct_index: usize) -> Question {
        Question {
            category: "test",
            prompt: "?".to_string(),
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice {
                options: options.iter().map(|s| s.to_string()).collect(),
                correct_index,
            },
        }
    }

    fn text_question(correct: &str, accepted: &[&str]) -> Question {
        Question {
            category: "test",
            prompt: "?".to_string(),
            explanation: String::new(),
            kind: QuestionKind::FreeResponse {
                correct_answer: correct.to_string(),
                accepted_answers: accepted.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_validate_multiple_choice() {
        assert!(choice_question(&["a", "b", "c"], 2).validate().is_ok());
        assert!(choice_question(&["a"], 0).validate().is_err());
        assert!(choice_question(&["a", "b"], 2).validate().is_err());
    }

    #[test]
    fn test_validate_free_response() {
        assert!(text_question("21", &["21", "twenty-one"]).validate().is_ok());
        // Membership of the canonical answer is case-insensitive.
        assert!(text_question("Abelian", &["abelian"]).validate().is_ok());
        assert!(text_question("21", &[]).validate().is_err());
        assert!(text_question("21", &["22"]).validate().is_err());
    }

    #[test]
    fn test_empty_response() {
        assert!(Response::Text("   ".to_string()).is_empty());
        assert!(Response::Text(String::new()).is_empty());
        assert!(!Response::Text("0".to_string()).is_empty());
        assert!(!Response::Choice(0).is_empty());
    }
}
