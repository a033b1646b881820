//! Core data types shared by the engine, the content banks, and the UI.

mod question;

pub use question::{ContentError, Question, QuestionKind, Response};

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Difficulty of a quiz, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Topic whose question bank a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Group theory basics: orders, cyclic groups, Lagrange.
    Groups,
    /// Ring theory: units, zero divisors, ideals, characteristic.
    Rings,
    /// Finite fields and field extensions.
    Fields,
    /// Sylow theory and p-groups.
    Sylow,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Groups => "groups",
            Topic::Rings => "rings",
            Topic::Fields => "fields",
            Topic::Sylow => "sylow",
        };
        write!(f, "{}", name)
    }
}
