use crate::models::{Question, QuestionKind, Response};

/// Grades a response against a question's correctness criterion.
///
/// Pure: safe to call repeatedly for display. The session, not the grader,
/// owns the score increment.
///
/// Multiple choice is exact index equality. Free response is trimmed,
/// case-folded string equality against any accepted answer; there is no
/// numeric or algebraic normalization ("6/3" does not match "2").
/// A response of the wrong shape for the question grades incorrect.
pub fn grade(question: &Question, response: &Response) -> bool {
    match (&question.kind, response) {
        (QuestionKind::MultipleChoice { correct_index, .. }, Response::Choice(picked)) => {
            picked == correct_index
        }
        (QuestionKind::FreeResponse { accepted_answers, .. }, Response::Text(text)) => {
            let given = text.trim().to_lowercase();
            accepted_answers
                .iter()
                .any(|accepted| accepted.trim().to_lowercase() == given)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_question() -> Question {
        Question {
            category: "mc",
            prompt: "?".to_string(),
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice {
                options: ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
                correct_index: 2,
            },
        }
    }

    fn text_question(accepted: &[&str]) -> Question {
        Question {
            category: "fr",
            prompt: "?".to_string(),
            explanation: String::new(),
            kind: QuestionKind::FreeResponse {
                correct_answer: accepted[0].to_string(),
                accepted_answers: accepted.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_choice_index_equality() {
        let q = choice_question();
        assert!(grade(&q, &Response::Choice(2)));
        assert!(!grade(&q, &Response::Choice(1)));
        assert!(!grade(&q, &Response::Choice(3)));
    }

    #[test]
    fn test_text_trim_and_case_fold() {
        let q = text_question(&["21"]);
        assert!(grade(&q, &Response::Text(" 21 ".to_string())));
        assert!(!grade(&q, &Response::Text("twenty-one".to_string())));

        let q = text_question(&["Abelian", "commutative"]);
        assert!(grade(&q, &Response::Text("abelian".to_string())));
        assert!(grade(&q, &Response::Text("  COMMUTATIVE".to_string())));
        assert!(!grade(&q, &Response::Text("cyclic".to_string())));
    }

    #[test]
    fn test_no_numeric_normalization() {
        let q = text_question(&["2"]);
        assert!(!grade(&q, &Response::Text("6/3".to_string())));
        assert!(!grade(&q, &Response::Text("2.0".to_string())));
    }

    #[test]
    fn test_mismatched_response_shape() {
        assert!(!grade(&choice_question(), &Response::Text("C".to_string())));
        assert!(!grade(&text_question(&["21"]), &Response::Choice(0)));
    }

    #[test]
    fn test_grading_is_repeatable() {
        let q = choice_question();
        let r = Response::Choice(2);
        assert_eq!(grade(&q, &r), grade(&q, &r));
    }
}
