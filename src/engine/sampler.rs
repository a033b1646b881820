//! Category-deduplicated question sampling.

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};
use rand::{Rng, RngCore};

use crate::models::{ContentError, Difficulty, Question};

/// A template generator: pure per invocation, produces one randomized
/// question for the given difficulty, tagged with its category.
pub type GeneratorFn = fn(&mut dyn RngCore, Difficulty) -> Question;

/// One entry of a topic's template bank.
#[derive(Clone, Copy)]
pub struct Template {
    /// Stable category identifier; must match the generated question's tag.
    pub category: &'static str,
    pub generate: GeneratorFn,
}

/// Attempt cap for the rejection-sampling loop. Generous: a bank with
/// enough distinct categories hits the target far sooner.
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

/// Failure to assemble a quiz from a template bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The bank is empty.
    NoTemplates,
    /// The attempt cap was hit before `wanted` distinct categories turned up.
    ExhaustedTemplates {
        wanted: usize,
        found: usize,
        attempts: usize,
    },
    /// A generator broke the content contract.
    InvalidQuestion(ContentError),
    /// A generator tagged its output with a category other than its own.
    CategoryMismatch {
        declared: &'static str,
        tagged: &'static str,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NoTemplates => write!(f, "no question templates registered"),
            SampleError::ExhaustedTemplates {
                wanted,
                found,
                attempts,
            } => write!(
                f,
                "found {} of {} distinct categories after {} attempts",
                found, wanted, attempts
            ),
            SampleError::InvalidQuestion(e) => write!(f, "invalid question: {}", e),
            SampleError::CategoryMismatch { declared, tagged } => write!(
                f,
                "template '{}' tagged its question as '{}'",
                declared, tagged
            ),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::InvalidQuestion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContentError> for SampleError {
    fn from(err: ContentError) -> Self {
        SampleError::InvalidQuestion(err)
    }
}

/// Draws `count` questions with pairwise-distinct categories.
///
/// Loops picking a uniformly random template, keeping its question only if
/// the category has not been seen yet. Result order is first-acceptance
/// order. The loop is bounded by `max_attempts`; a bank with fewer than
/// `count` distinct categories fails with `ExhaustedTemplates` instead of
/// spinning forever.
pub fn sample(
    rng: &mut dyn RngCore,
    templates: &[Template],
    difficulty: Difficulty,
    count: usize,
    max_attempts: usize,
) -> Result<Vec<Question>, SampleError> {
    if templates.is_empty() {
        return Err(SampleError::NoTemplates);
    }

    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut picked = Vec::with_capacity(count);
    let mut attempts = 0;

    while picked.len() < count {
        if attempts >= max_attempts {
            warn!(
                "sampler gave up after {} attempts ({}/{} categories)",
                attempts,
                picked.len(),
                count
            );
            return Err(SampleError::ExhaustedTemplates {
                wanted: count,
                found: picked.len(),
                attempts,
            });
        }
        attempts += 1;

        let template = &templates[rng.gen_range(0..templates.len())];
        let question = (template.generate)(rng, difficulty);
        question.validate()?;
        if question.category != template.category {
            return Err(SampleError::CategoryMismatch {
                declared: template.category,
                tagged: question.category,
            });
        }

        if seen.insert(question.category) {
            debug!("accepted '{}' at {}", question.category, difficulty);
            picked.push(question);
        }
    }

    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed(category: &'static str) -> Question {
        Question {
            category,
            prompt: format!("prompt {}", category),
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice {
                options: vec!["yes".to_string(), "no".to_string()],
                correct_index: 0,
            },
        }
    }

    fn gen_a(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("a")
    }
    fn gen_b(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("b")
    }
    fn gen_c(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("c")
    }
    fn gen_d(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("d")
    }
    fn gen_e(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("e")
    }
    fn gen_f(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("f")
    }
    fn gen_bad_index(_: &mut dyn RngCore, _: Difficulty) -> Question {
        Question {
            category: "bad",
            prompt: "?".to_string(),
            explanation: String::new(),
            kind: QuestionKind::MultipleChoice {
                options: vec!["x".to_string(), "y".to_string()],
                correct_index: 5,
            },
        }
    }
    fn gen_mistagged(_: &mut dyn RngCore, _: Difficulty) -> Question {
        fixed("something-else")
    }

    const BANK: &[Template] = &[
        Template {
            category: "a",
            generate: gen_a,
        },
        Template {
            category: "b",
            generate: gen_b,
        },
        Template {
            category: "c",
            generate: gen_c,
        },
        Template {
            category: "d",
            generate: gen_d,
        },
        Template {
            category: "e",
            generate: gen_e,
        },
        Template {
            category: "f",
            generate: gen_f,
        },
    ];

    #[test]
    fn test_sample_distinct_categories() {
        let mut rng = StdRng::seed_from_u64(3);
        let questions = sample(&mut rng, BANK, Difficulty::Medium, 5, DEFAULT_MAX_ATTEMPTS)
            .expect("six categories can fill a five-question quiz");

        assert_eq!(questions.len(), 5);
        let mut categories: Vec<_> = questions.iter().map(|q| q.category).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), 5);
    }

    #[test]
    fn test_sample_deterministic_under_seed() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(99);
            sample(&mut rng, BANK, Difficulty::Hard, 4, DEFAULT_MAX_ATTEMPTS).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_exhausted_templates() {
        let bank = &BANK[..2];
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample(&mut rng, bank, Difficulty::Easy, 3, 50).unwrap_err();
        match err {
            SampleError::ExhaustedTemplates {
                wanted,
                found,
                attempts,
            } => {
                assert_eq!(wanted, 3);
                assert_eq!(found, 2);
                assert_eq!(attempts, 50);
            }
            other => panic!("expected ExhaustedTemplates, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bank() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            sample(&mut rng, &[], Difficulty::Easy, 1, 10),
            Err(SampleError::NoTemplates)
        );
    }

    #[test]
    fn test_malformed_question_fails_fast() {
        let bank = &[Template {
            category: "bad",
            generate: gen_bad_index,
        }];
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample(&mut rng, bank, Difficulty::Easy, 1, 10).unwrap_err();
        assert!(matches!(err, SampleError::InvalidQuestion(_)));
    }

    #[test]
    fn test_mistagged_question_fails_fast() {
        let bank = &[Template {
            category: "a",
            generate: gen_mistagged,
        }];
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample(&mut rng, bank, Difficulty::Easy, 1, 10).unwrap_err();
        assert!(matches!(err, SampleError::CategoryMismatch { .. }));
    }
}
