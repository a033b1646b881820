//! Group-theory question templates: element orders, cyclic groups,
//! Lagrange's theorem, abelian groups.

use rand::{Rng, RngCore};

use super::{
    divisors, euler_phi, factorial, free_response, gcd, multiple_choice, pick, pick_distinct,
};
use crate::engine::Template;
use crate::models::{Difficulty, Question};

pub(super) const TEMPLATES: &[Template] = &[
    Template {
        category: "element-order",
        generate: element_order,
    },
    Template {
        category: "cyclic-generators",
        generate: cyclic_generators,
    },
    Template {
        category: "subgroup-order",
        generate: subgroup_order,
    },
    Template {
        category: "abelian-groups",
        generate: abelian_groups,
    },
    Template {
        category: "symmetric-order",
        generate: symmetric_order,
    },
    Template {
        category: "additive-inverse",
        generate: additive_inverse,
    },
    Template {
        category: "not-a-group",
        generate: not_a_group,
    },
];

fn modulus_pool(difficulty: Difficulty) -> &'static [u64] {
    match difficulty {
        Difficulty::Easy => &[6, 8, 10, 12],
        Difficulty::Medium => &[12, 15, 18, 20, 24],
        Difficulty::Hard => &[24, 30, 36, 40, 48, 60],
    }
}

fn element_order(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(rng, modulus_pool(difficulty));
    let k = rng.gen_range(1..n);
    let order = n / gcd(n, k);
    free_response(
        "element-order",
        format!("What is the order of the element {} in the additive group Z_{}?", k, n),
        format!(
            "In Z_n an element k has order n / gcd(n, k); here {} / gcd({}, {}) = {}.",
            n,
            n,
            k,
            order
        ),
        order.to_string(),
        &[],
    )
}

fn cyclic_generators(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(rng, modulus_pool(difficulty));
    let count = euler_phi(n);
    free_response(
        "cyclic-generators",
        format!("How many generators does the cyclic group Z_{} have?", n),
        format!(
            "k generates Z_n exactly when gcd(k, n) = 1, so the count is phi({}) = {}.",
            n, count
        ),
        count.to_string(),
        &[],
    )
}

fn subgroup_order(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[8, 12][..],
            Difficulty::Medium => &[16, 18, 20],
            Difficulty::Hard => &[24, 36, 40],
        },
    );
    let proper: Vec<u64> = divisors(n).into_iter().filter(|d| *d > 1 && *d < n).collect();
    let non_divisors: Vec<u64> = (2..n).filter(|k| n % k != 0).collect();

    let correct = pick(rng, &proper);
    let distractors = pick_distinct(rng, &non_divisors, 3);
    multiple_choice(
        rng,
        "subgroup-order",
        format!(
            "Which of the following can be the order of a subgroup of a group of order {}?",
            n
        ),
        format!(
            "By Lagrange's theorem the order of a subgroup divides the order of the group, and {} divides {}.",
            correct, n
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn abelian_groups(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[4, 5, 6, 8][..],
            Difficulty::Medium => &[9, 10, 12, 15],
            Difficulty::Hard => &[16, 21, 30, 60],
        },
    );
    let non_abelian = ["S_3", "S_4", "D_4", "D_5", "Q_8", "A_5", "GL_2(R)"];
    let distractors = pick_distinct(rng, &non_abelian, 3);
    multiple_choice(
        rng,
        "abelian-groups",
        "Which of the following groups is abelian?".to_string(),
        format!(
            "Every cyclic group is abelian, and Z_{} is cyclic; the other three are standard non-abelian examples.",
            n
        ),
        format!("Z_{}", n),
        distractors.iter().map(|s| s.to_string()).collect(),
    )
}

fn symmetric_order(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[3, 4][..],
            Difficulty::Medium => &[4, 5, 6],
            Difficulty::Hard => &[6, 7, 8],
        },
    );
    let order = factorial(n);
    free_response(
        "symmetric-order",
        format!("What is the order of the symmetric group S_{}?", n),
        format!("S_n has n! elements; {}! = {}.", n, order),
        order.to_string(),
        &[],
    )
}

fn additive_inverse(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(rng, modulus_pool(difficulty));
    let k = rng.gen_range(1..n);
    let inverse = n - k;
    free_response(
        "additive-inverse",
        format!("What is the inverse of the element {} in the additive group Z_{}?", k, n),
        format!("{} + {} = {} = 0 in Z_{}.", k, inverse, n, n),
        inverse.to_string(),
        &[],
    )
}

fn not_a_group(rng: &mut dyn RngCore, _difficulty: Difficulty) -> Question {
    let failures = [
        ("(N, +)", "the natural numbers have no additive inverses"),
        ("(Z, ×)", "no integer other than ±1 has a multiplicative inverse"),
        ("(Q, ×)", "0 has no multiplicative inverse"),
    ];
    let groups = [
        "(Z, +)",
        "(Q \\ {0}, ×)",
        "(R, +)",
        "(Z_7 \\ {0}, ×)",
        "(Z_5, +)",
    ];
    let (correct, reason) = failures[rng.gen_range(0..failures.len())];
    let distractors = pick_distinct(rng, &groups, 3);
    multiple_choice(
        rng,
        "not-a-group",
        "Which of the following is NOT a group?".to_string(),
        format!("{} fails the group axioms: {}.", correct, reason),
        correct.to_string(),
        distractors.iter().map(|s| s.to_string()).collect(),
    )
}
