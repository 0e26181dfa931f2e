//! Classic Rock-Paper-Scissors.
//!
//! ## Rules
//!
//! ```text
//!        ROCK
//!       ↗    ↘
//!   PAPER ←── SCISSORS
//! ```
//!
//! - Rock crushes Scissors
//! - Paper covers Rock
//! - Scissors cut Paper
//!
//! The dominance relation lives in a single adjacency matrix indexed by the
//! canonical order ROCK, PAPER, SCISSORS.

use std::fmt;

use crate::markov::domain::ChoiceDomain;

pub mod players;

/// A Rock-Paper-Scissors throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Rock
    Rock,
    /// Paper
    Paper,
    /// Scissors
    Scissors,
}

/// Canonical order, also the matrix index basis.
const VALUES: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

/// `DEFEATS[a][b]` is true iff `a` defeats `b`.
const DEFEATS: [[bool; 3]; 3] = [
    //  rock   paper  scissors
    [false, false, true],  // rock
    [true, false, false],  // paper
    [false, true, false],  // scissors
];

impl ChoiceDomain for Choice {
    fn values() -> &'static [Self] {
        &VALUES
    }

    fn index(self) -> usize {
        self as usize
    }

    fn defeats(self, other: Self) -> bool {
        DEFEATS[self.index()][other.index()]
    }

    fn name(self) -> &'static str {
        match self {
            Choice::Rock => "ROCK",
            Choice::Paper => "PAPER",
            Choice::Scissors => "SCISSORS",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
