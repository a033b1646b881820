//! Built-in content provider: per-topic banks of question templates.
//!
//! Each generator is pure per invocation and tags its output with the
//! category declared by its `Template` entry. Difficulty only widens the
//! parameter pools; the question shapes stay the same.

mod fields;
mod groups;
mod rings;
mod sylow;

use rand::{Rng, RngCore};

use crate::engine::{shuffle_options, Template};
use crate::models::{Question, QuestionKind, Topic};

/// The template bank for a topic. Every bank carries more distinct
/// categories than the default quiz length, so sampling always terminates.
pub fn templates(topic: Topic) -> &'static [Template] {
    match topic {
        Topic::Groups => groups::TEMPLATES,
        Topic::Rings => rings::TEMPLATES,
        Topic::Fields => fields::TEMPLATES,
        Topic::Sylow => sylow::TEMPLATES,
    }
}

/// Assembles a multiple-choice question: correct answer first, then the
/// distractors, shuffled with the correct index tracking the move.
fn multiple_choice(
    rng: &mut dyn RngCore,
    category: &'static str,
    prompt: String,
    explanation: String,
    correct: String,
    distractors: Vec<String>,
) -> Question {
    let mut options = vec![correct];
    options.extend(distractors);
    let (options, correct_index) = shuffle_options(rng, options, 0);
    Question {
        category,
        prompt,
        explanation,
        kind: QuestionKind::MultipleChoice {
            options,
            correct_index,
        },
    }
}

/// Assembles a free-response question; `also` lists extra accepted surface
/// forms beyond the canonical answer.
fn free_response(
    category: &'static str,
    prompt: String,
    explanation: String,
    answer: String,
    also: &[&str],
) -> Question {
    let mut accepted = vec![answer.clone()];
    accepted.extend(also.iter().map(|s| s.to_string()));
    Question {
        category,
        prompt,
        explanation,
        kind: QuestionKind::FreeResponse {
            correct_answer: answer,
            accepted_answers: accepted,
        },
    }
}

fn pick<T: Copy>(rng: &mut dyn RngCore, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Picks `count` distinct values from `pool` (pool must be large enough and
/// duplicate-free).
fn pick_distinct<T: Copy + PartialEq>(rng: &mut dyn RngCore, pool: &[T], count: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let candidate = pick(rng, pool);
        if !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn euler_phi(n: u64) -> u64 {
    (1..=n).filter(|k| gcd(*k, n) == 1).count() as u64
}

fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

fn divisors(n: u64) -> Vec<u64> {
    (1..=n).filter(|d| n % d == 0).collect()
}

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Product of the distinct prime factors of `n`. An element of Z_n is
/// nilpotent exactly when the radical divides it.
fn radical(n: u64) -> u64 {
    (2..=n).filter(|p| is_prime(*p) && n % p == 0).product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grade;
    use crate::models::{Difficulty, Response};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DIFFICULTIES: [Difficulty; 3] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    const TOPICS: [Topic; 4] = [Topic::Groups, Topic::Rings, Topic::Fields, Topic::Sylow];

    #[test]
    fn test_helpers() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(euler_phi(12), 4);
        assert_eq!(euler_phi(7), 6);
        assert_eq!(factorial(5), 120);
        assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
        assert!(is_prime(2) && is_prime(13) && is_prime(97));
        assert!(!is_prime(1) && !is_prime(91));
        assert_eq!(radical(12), 6);
        assert_eq!(radical(8), 2);
        assert_eq!(radical(27), 3);
    }

    #[test]
    fn test_every_bank_has_headroom() {
        for topic in TOPICS {
            let bank = templates(topic);
            assert!(bank.len() >= 6, "{} bank too small", topic);
            let mut categories: Vec<_> = bank.iter().map(|t| t.category).collect();
            categories.sort_unstable();
            categories.dedup();
            assert_eq!(categories.len(), bank.len(), "{} has duplicate categories", topic);
        }
    }

    #[test]
    fn test_every_generator_output_is_well_formed() {
        for topic in TOPICS {
            for template in templates(topic) {
                for difficulty in DIFFICULTIES {
                    for seed in 0..25 {
                        let mut rng = StdRng::seed_from_u64(seed);
                        let question = (template.generate)(&mut rng, difficulty);
                        assert_eq!(question.category, template.category);
                        question.validate().unwrap_or_else(|e| {
                            panic!("{}/{} at {}: {}", topic, template.category, difficulty, e)
                        });
                        assert!(!question.prompt.is_empty());
                        assert!(!question.explanation.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_canonical_answer_always_grades_correct() {
        for topic in TOPICS {
            for template in templates(topic) {
                for difficulty in DIFFICULTIES {
                    for seed in 0..25 {
                        let mut rng = StdRng::seed_from_u64(seed);
                        let question = (template.generate)(&mut rng, difficulty);
                        let response = match &question.kind {
                            QuestionKind::MultipleChoice { correct_index, .. } => {
                                Response::Choice(*correct_index)
                            }
                            QuestionKind::FreeResponse { correct_answer, .. } => {
                                Response::Text(correct_answer.clone())
                            }
                        };
                        assert!(
                            grade(&question, &response),
                            "{}/{}: canonical answer graded wrong",
                            topic,
                            template.category
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_distractors_never_grade_correct() {
        // No multiple-choice question may carry the correct answer twice.
        for topic in TOPICS {
            for template in templates(topic) {
                for seed in 0..25 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let question = (template.generate)(&mut rng, Difficulty::Medium);
                    if let QuestionKind::MultipleChoice {
                        options,
                        correct_index,
                    } = &question.kind
                    {
                        let correct = &options[*correct_index];
                        let dupes = options.iter().filter(|o| *o == correct).count();
                        assert_eq!(
                            dupes, 1,
                            "{}/{}: correct option appears {} times",
                            topic, template.category, dupes
                        );
                    }
                }
            }
        }
    }
}
