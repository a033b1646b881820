//! Ring-theory question templates: units, zero divisors, ideals,
//! characteristic, nilpotents.

use rand::{Rng, RngCore};

use super::{euler_phi, free_response, gcd, multiple_choice, pick, pick_distinct, radical};
use crate::engine::Template;
use crate::models::{Difficulty, Question};

pub(super) const TEMPLATES: &[Template] = &[
    Template {
        category: "units-count",
        generate: units_count,
    },
    Template {
        category: "zero-divisor",
        generate: zero_divisor,
    },
    Template {
        category: "integral-domain",
        generate: integral_domain,
    },
    Template {
        category: "characteristic",
        generate: characteristic,
    },
    Template {
        category: "ideal-of-z",
        generate: ideal_of_z,
    },
    Template {
        category: "nilpotent",
        generate: nilpotent,
    },
    Template {
        category: "poly-degree",
        generate: poly_degree,
    },
];

fn units_count(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[6, 8, 10, 12][..],
            Difficulty::Medium => &[14, 15, 18, 20],
            Difficulty::Hard => &[21, 24, 27, 30, 36],
        },
    );
    let count = euler_phi(n);
    free_response(
        "units-count",
        format!("How many units does the ring Z_{} have?", n),
        format!(
            "k is a unit of Z_n exactly when gcd(k, n) = 1, so the count is phi({}) = {}.",
            n, count
        ),
        count.to_string(),
        &[],
    )
}

fn zero_divisor(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[8, 9, 10][..],
            Difficulty::Medium => &[12, 14, 15],
            Difficulty::Hard => &[18, 20, 24, 30],
        },
    );
    let zero_divisors: Vec<u64> = (2..n).filter(|k| gcd(*k, n) > 1).collect();
    let units: Vec<u64> = (1..n).filter(|k| gcd(*k, n) == 1).collect();

    let correct = pick(rng, &zero_divisors);
    let distractors = pick_distinct(rng, &units, 3);
    multiple_choice(
        rng,
        "zero-divisor",
        format!("Which of the following is a zero divisor in Z_{}?", n),
        format!(
            "gcd({}, {}) = {} > 1, so {} times {} is 0 in Z_{}; the other options are units.",
            correct,
            n,
            gcd(correct, n),
            correct,
            n / gcd(correct, n),
            n
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn integral_domain(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let (primes, composites): (&[u64], &[u64]) = match difficulty {
        Difficulty::Easy => (&[2, 3, 5, 7], &[4, 6, 8, 9]),
        Difficulty::Medium => (&[11, 13, 17, 19], &[12, 15, 21, 25]),
        Difficulty::Hard => (&[23, 29, 31, 37], &[27, 33, 35, 39, 49]),
    };
    let correct = pick(rng, primes);
    let distractors = pick_distinct(rng, composites, 3);
    multiple_choice(
        rng,
        "integral-domain",
        "For which value of n is the ring Z_n an integral domain?".to_string(),
        format!(
            "Z_n is an integral domain exactly when n is prime, and {} is prime; composite moduli have zero divisors.",
            correct
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn characteristic(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => {
            let n = pick(
                rng,
                match difficulty {
                    Difficulty::Easy => &[5, 6, 8, 9][..],
                    _ => &[12, 15, 20, 24],
                },
            );
            free_response(
                "characteristic",
                format!("What is the characteristic of the ring Z_{}?", n),
                format!("The smallest m > 0 with m·1 = 0 in Z_{} is {} itself.", n, n),
                n.to_string(),
                &[],
            )
        }
        Difficulty::Hard => {
            let pair = pick_distinct(rng, &[4, 6, 9, 10, 12], 2);
            let (m, n) = (pair[0], pair[1]);
            let lcm = m * n / gcd(m, n);
            free_response(
                "characteristic",
                format!("What is the characteristic of the product ring Z_{} × Z_{}?", m, n),
                format!(
                    "The characteristic of Z_m × Z_n is lcm(m, n); lcm({}, {}) = {}.",
                    m, n, lcm
                ),
                lcm.to_string(),
                &[],
            )
        }
    }
}

fn ideal_of_z(rng: &mut dyn RngCore, _difficulty: Difficulty) -> Question {
    let m = rng.gen_range(2..=9u64);
    let non_ideals = [
        "the odd integers",
        "the positive integers",
        "{0, 1}",
        "{-1, 1}",
        "the set of all perfect squares",
    ];
    let distractors = pick_distinct(rng, &non_ideals, 3);
    multiple_choice(
        rng,
        "ideal-of-z",
        "Which of the following subsets is an ideal of the ring Z?".to_string(),
        format!(
            "{}Z is closed under addition and absorbs multiplication by any integer; the other sets fail one of those.",
            m
        ),
        format!("the set of all multiples of {}", m),
        distractors.iter().map(|s| s.to_string()).collect(),
    )
}

fn nilpotent(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let n = pick(
        rng,
        match difficulty {
            Difficulty::Easy => &[8, 9][..],
            Difficulty::Medium => &[12, 16],
            Difficulty::Hard => &[27, 32, 36],
        },
    );
    let rad = radical(n);
    let nilpotents: Vec<u64> = (1..n).filter(|k| k % rad == 0).collect();
    let units: Vec<u64> = (1..n).filter(|k| gcd(*k, n) == 1).collect();

    let correct = pick(rng, &nilpotents);
    let distractors = pick_distinct(rng, &units, 3);
    multiple_choice(
        rng,
        "nilpotent",
        format!("Which of the following elements of Z_{} is nilpotent (besides 0)?", n),
        format!(
            "Every prime dividing {} also divides {}, so a high enough power of {} is 0 in Z_{}; the other options are units.",
            n, correct, correct, n
        ),
        correct.to_string(),
        distractors.iter().map(|d| d.to_string()).collect(),
    )
}

fn poly_degree(rng: &mut dyn RngCore, difficulty: Difficulty) -> Question {
    let range = match difficulty {
        Difficulty::Easy => 1..=3u64,
        Difficulty::Medium => 2..=5,
        Difficulty::Hard => 3..=9,
    };
    let a = rng.gen_range(range.clone());
    let b = rng.gen_range(range);
    free_response(
        "poly-degree",
        format!(
            "Over an integral domain, what is the degree of the product of two polynomials of degrees {} and {}?",
            a, b
        ),
        format!(
            "Leading coefficients cannot multiply to zero in an integral domain, so degrees add: {} + {} = {}.",
            a,
            b,
            a + b
        ),
        (a + b).to_string(),
        &[],
    )
}
