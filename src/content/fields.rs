//! Finite-field question templates: orders, characteristic, extensions,
//! irreducibility over GF(2), the Frobenius map.

use rand::{Rng, RngCore};

use super::{divisors, free_response, multiple_choice, pick, pick_distinct};
use crate::engine::Template;
use crate::models::{Difficulty, Question};

pub(super) const TEMPLATES: &[Template] = &[
    Template {
        category: "finite-field-order",
        generate: finite_field_order,
    },
    Template {
        category: "multiplicative-group",
        generate: multiplicative_group,
    },
    Template {
        category: "field-characteristic",
        generate: field_characteristic,
    },
    Template {
        category: "irreducible-gf2",
        generate: irreducible_gf2,
    },
    Template {
        category: "extension-degree",
        generate: extension_degree,
    },
    Template {
        category: "subfield-count",
        generate: subfield_count,
    },
    Template {
        category: "frobenius",
        generate: frobenius,
    },
];

/// (q, p, k) with q = p^k, k >= 2.
fn prime_power_pool(difficulty: Difficulty) -> &'static [(u64, u64, u64)] {
    match difficulty {
        Difficulty::Easy => &[(4, 2, 2), (8, 2, 3), (9, 3, 2), (25, 5, 2)],
        Difficulty::Medium => &[(16, 2, 4), (27, 3, 3), (49, 7, 2), (121, 11, 2)],
        Difficulty::Hard => &[
            (64, 2, 6),
            (81, 3, 4),
            (125, 5, 3),
            (128, 2, 7),
            (243, 3, 5),
            (343, 7, 3),
        ],
    }
}

fn finite_field_order(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (prime_powers, others): (&[u64], &[u64]) = match difficulty {
        Difficulty::Easy => (&[4, 8, 9, 25, 27], &[6, 10, 12, 15]),
        Difficulty::Medium => (&[16, 32, 49, 81], &[18, 20, 24, 30, 36]),
        Difficulty::Hard => (&[64, 121, 125, 128, 243], &[60, 72, 96, 100, 144]),
    };
    let correct = pick(rng, prime_powers);
    let distractors = pick_distinct(rng, others, 3);
    multiple_choice(
        rng,
        "finite-field-order",
        "Which of the following can be the order of a finite field?".to_string(),
        format!(
            "A finite field has prime-power order, and {} is a prime power; the other options have at least two distinct prime factors.",
            correct
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn multiplicative_group(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (q, _, _) = pick(rng, prime_power_pool(difficulty));
    free_response(
        "multiplicative-group",
        format!(
            "How many elements does the multiplicative group of the field GF({}) have?",
            q
        ),
        format!(
            "Every nonzero element of a field is invertible, so the group has {} - 1 = {} elements.",
            q,
            q - 1
        ),
        (q - 1).to_string(),
        &[],
    )
}

fn field_characteristic(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (q, p, k) = pick(rng, prime_power_pool(difficulty));
    free_response(
        "field-characteristic",
        format!("What is the characteristic of the finite field with {} elements?", q),
        format!("{} = {}^{}, and the characteristic of GF(p^k) is p.", q, p, k),
        p.to_string(),
        &[],
    )
}

fn irreducible_gf2(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let irreducible: &[&str] = match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            &["x^2 + x + 1", "x^3 + x + 1", "x^3 + x^2 + 1"]
        }
        Difficulty::Hard => &[
            "x^2 + x + 1",
            "x^3 + x + 1",
            "x^3 + x^2 + 1",
            "x^4 + x + 1",
            "x^4 + x^3 + 1",
        ],
    };
    let reducible = [
        "x^2 + 1",
        "x^2 + x",
        "x^3 + 1",
        "x^3 + x^2 + x + 1",
        "x^4 + x^2 + 1",
    ];
    let correct = pick(rng, irreducible);
    let distractors = pick_distinct(rng, &reducible, 3);
    multiple_choice(
        rng,
        "irreducible-gf2",
        "Which of the following polynomials is irreducible over GF(2)?".to_string(),
        format!(
            "{} has no roots in GF(2) and no factorization into lower-degree factors there; each other option factors (note x^2 + 1 = (x + 1)^2 over GF(2)).",
            correct
        ),
        correct.to_string(),
        distractors.iter().map(|s| s.to_string()).collect(),
    )
}

fn extension_degree(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (q, p, k) = pick(rng, prime_power_pool(difficulty));
    free_response(
        "extension-degree",
        format!(
            "What is the degree of GF({}) as an extension of its prime subfield GF({})?",
            q, p
        ),
        format!(
            "GF({}) is a vector space of dimension {} over GF({}), since {} = {}^{}.",
            q, k, p, q, p, k
        ),
        k.to_string(),
        &[],
    )
}

fn subfield_count(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let p = pick(rng, &[2u64, 3, 5]);
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[4, 6][..],
            Difficulty::Medium => &[8, 12],
            Difficulty::Hard => &[16, 18, 24, 30],
        },
    );
    let count = divisors(n).len();
    free_response(
        "subfield-count",
        format!(
            "How many subfields does GF({}^{}) have, counting GF({}) and the field itself?",
            p, n, p
        ),
        format!(
            "The subfields of GF(p^n) are exactly the GF(p^d) with d dividing n, and {} has {} divisors.",
            n, count
        ),
        count.to_string(),
        &[],
    )
}

fn frobenius(rng: &mut dyn RngCore, _difficulty: Difficulty) -> Question {
    let p = pick(rng, &[2u64, 3, 5, 7]);
    let n = rng.gen_range(2..=5u64);
    let distractors = [
        "a ring homomorphism that is not injective",
        "additive but not multiplicative",
        "multiplicative but not additive",
    ];
    multiple_choice(
        rng,
        "frobenius",
        format!(
            "The Frobenius map x -> x^{} on GF({}^{}) is best described as which of the following?",
            p, p, n
        ),
        format!(
            "Freshman's dream makes x -> x^{} additive in characteristic {}, it is clearly multiplicative, and on a finite field injective implies bijective.",
            p, p
        ),
        "a field automorphism".to_string(),
        distractors.iter().map(|s| s.to_string()).collect(),
    )
}
