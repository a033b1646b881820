//! Sylow-theory question templates: Sylow subgroup orders and counts,
//! Cauchy's theorem, p-groups.

use rand::RngCore;

use super::{free_response, is_prime, multiple_choice, pick, pick_distinct};
use crate::engine::Template;
use crate::models::{Difficulty, Question};

pub(super) const TEMPLATES: &[Template] = &[
    Template {
        category: "sylow-order",
        generate: sylow_order,
    },
    Template {
        category: "sylow-count",
        generate: sylow_count,
    },
    Template {
        category: "unique-sylow",
        generate: unique_sylow,
    },
    Template {
        category: "sylow-count-named",
        generate: sylow_count_named,
    },
    Template {
        category: "cauchy",
        generate: cauchy,
    },
    Template {
        category: "p-group-center",
        generate: p_group_center,
    },
    Template {
        category: "sylow-conjugacy",
        generate: sylow_conjugacy,
    },
];

/// (|G|, p) pairs with p a prime dividing |G| but not exhausting it.
fn order_prime_pool(difficulty: Difficulty) -> &'static [(u64, u64)] {
    match difficulty {
        Difficulty::Easy => &[(12, 2), (12, 3), (18, 3), (20, 2), (20, 5)],
        Difficulty::Medium => &[(24, 2), (36, 3), (40, 5), (48, 2), (54, 3)],
        Difficulty::Hard => &[(56, 2), (56, 7), (60, 2), (72, 3), (96, 2), (100, 5)],
    }
}

/// Largest power of `p` dividing `n`.
fn p_part(n: u64, p: u64) -> u64 {
    let mut part = 1;
    let mut rest = n;
    while rest % p == 0 {
        part *= p;
        rest /= p;
    }
    part
}

fn sylow_order(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (n, p) = pick(rng, order_prime_pool(difficulty));
    let order = p_part(n, p);
    free_response(
        "sylow-order",
        format!(
            "What is the order of a Sylow {}-subgroup of a group of order {}?",
            p, n
        ),
        format!(
            "A Sylow p-subgroup has order the full power of p dividing the group order; {} = {} · {}.",
            n,
            order,
            n / order
        ),
        order.to_string(),
        &[],
    )
}

fn sylow_count(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (n, p) = pick(rng, order_prime_pool(difficulty));
    let m = n / p_part(n, p);
    let valid: Vec<u64> = (1..=m).filter(|d| m % d == 0 && d % p == 1).collect();
    let invalid: Vec<u64> = (2..=n).filter(|d| !valid.contains(d)).collect();

    let correct = pick(rng, &valid);
    let distractors = pick_distinct(rng, &invalid, 3);
    multiple_choice(
        rng,
        "sylow-count",
        format!(
            "Which of the following can be the number of Sylow {}-subgroups of a group of order {}?",
            p, n
        ),
        format!(
            "The count must divide {} and be congruent to 1 mod {}; {} satisfies both, the other options fail at least one.",
            m, p, correct
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn unique_sylow(rng: &mut dyn RngCore, _difficulty: Difficulty) -> Question {
    let p = pick(rng, &[2u64, 3, 5, 7]);
    let distractors = [
        "cyclic".to_string(),
        "contained in the center".to_string(),
        "trivial".to_string(),
    ];
    multiple_choice(
        rng,
        "unique-sylow",
        format!(
            "If a finite group G has exactly one Sylow {}-subgroup P, then P must be which of the following?",
            p
        ),
        "Conjugation permutes the Sylow p-subgroups, so a unique one is fixed by every conjugation, i.e. normal.".to_string(),
        "normal in G".to_string(),
        distractors.to_vec(),
    )
}

fn sylow_count_named(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    // (group, |G|, p, number of Sylow p-subgroups)
    let table: &[(&str, u64, u64, u64)] = match difficulty {
        Difficulty::Easy => &[
            ("the symmetric group S_3", 6, 2, 3),
            ("the symmetric group S_3", 6, 3, 1),
            ("the dihedral group of order 10", 10, 5, 1),
            ("the dihedral group of order 10", 10, 2, 5),
        ],
        Difficulty::Medium => &[
            ("the alternating group A_4", 12, 3, 4),
            ("the alternating group A_4", 12, 2, 1),
            ("the dihedral group of order 12", 12, 3, 1),
            ("the dihedral group of order 12", 12, 2, 3),
        ],
        Difficulty::Hard => &[
            ("the symmetric group S_4", 24, 3, 4),
            ("the symmetric group S_4", 24, 2, 3),
            ("the symmetric group S_5", 120, 5, 6),
        ],
    };
    let (group, order, p, count) = pick(rng, table);
    free_response(
        "sylow-count-named",
        format!("How many Sylow {}-subgroups does {} (order {}) have?", p, group, order),
        format!(
            "Counting the elements of {}-power order in {} gives {} Sylow {}-subgroups, consistent with the congruence and divisibility constraints.",
            p, group, count, p
        ),
        count.to_string(),
        &[],
    )
}

fn cauchy(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[6, 10, 15, 21][..],
            Difficulty::Medium => &[20, 28, 44, 45],
            Difficulty::Hard => &[66, 70, 102, 105],
        },
    );
    let dividing: Vec<u64> = (2..=n).filter(|p| is_prime(*p) && n % p == 0).collect();
    let small_primes = [2u64, 3, 5, 7, 11, 13, 17, 19, 23];
    let non_dividing: Vec<u64> = small_primes
        .iter()
        .copied()
        .filter(|p| n % p != 0)
        .collect();

    let correct = pick(rng, &dividing);
    let distractors = pick_distinct(rng, &non_dividing, 3);
    multiple_choice(
        rng,
        "cauchy",
        format!(
            "By Cauchy's theorem, every group of order {} must contain an element of which order?",
            n
        ),
        format!(
            "Cauchy's theorem guarantees an element of order p for each prime p dividing the group order, and {} divides {}.",
            correct, n
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn p_group_center(rng: &mut dyn RngCore, _difficulty: Difficulty) -> Question {
    let p = pick(rng, &[2u64, 3, 5, 7]);
    let distractors = vec![
        "a trivial center".to_string(),
        format!("an element of order {}", p * p),
        "a proper noncyclic subgroup".to_string(),
    ];
    multiple_choice(
        rng,
        "p-group-center",
        format!("Every nontrivial finite {}-group must have which of the following?", p),
        "The class equation forces a nontrivial center: every nontrivial conjugacy class has size divisible by p, and so must the set of central elements.".to_string(),
        "a nontrivial center".to_string(),
        distractors,
    )
}

fn sylow_conjugacy(rng: &mut dyn RngCore, _difficulty: Difficulty) -> Question {
    let p = pick(rng, &[2u64, 3, 5, 7]);
    let distractors = [
        "they intersect trivially".to_string(),
        "they are always equal".to_string(),
        "they commute elementwise".to_string(),
    ];
    multiple_choice(
        rng,
        "sylow-conjugacy",
        format!(
            "According to the second Sylow theorem, any two Sylow {}-subgroups of a finite group are related how?",
            p
        ),
        "The second Sylow theorem states that all Sylow p-subgroups are conjugate to one another.".to_string(),
        "they are conjugate".to_string(),
        distractors.to_vec(),
    )
}
