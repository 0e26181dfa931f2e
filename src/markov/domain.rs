//! Choice domain trait and the dominance helpers built on it.
//!
//! A choice domain is a fixed, ordered set of throws together with a
//! "defeats" relation. The order returned by [`ChoiceDomain::values`] is the
//! index basis for the transition table, so it must never change at runtime.
//!
//! Implementations are expected to store the relation as plain data (an
//! adjacency matrix indexed by [`ChoiceDomain::index`]) rather than per-variant
//! state. [`validate_domain`] checks that such a table describes a proper
//! tournament.

use std::fmt;
use std::hash::Hash;

/// Trait for a fixed set of throwable choices with a dominance relation.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Coin { Heads, Tails }
///
/// impl ChoiceDomain for Coin {
///     fn values() -> &'static [Self] { &[Coin::Heads, Coin::Tails] }
///     fn index(self) -> usize { self as usize }
///     fn defeats(self, other: Self) -> bool { self == Coin::Heads && other == Coin::Tails }
///     fn name(self) -> &'static str { /* ... */ }
/// }
/// ```
pub trait ChoiceDomain:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// All choices in canonical order.
    fn values() -> &'static [Self];

    /// Position of this choice in [`ChoiceDomain::values`].
    fn index(self) -> usize;

    /// Returns true iff `self` defeats `other`.
    fn defeats(self, other: Self) -> bool;

    /// Canonical name used for parsing and display.
    fn name(self) -> &'static str;

    /// Number of choices in the domain.
    fn count() -> usize {
        Self::values().len()
    }

    /// Look up a choice by its canonical index.
    fn from_index(index: usize) -> Option<Self> {
        Self::values().get(index).copied()
    }

    /// Case-insensitive lookup of a choice by canonical name.
    ///
    /// The text is matched as given; callers reading lines should strip the
    /// line terminator first.
    fn parse(text: &str) -> Result<Self, InvalidChoiceError> {
        Self::values()
            .iter()
            .copied()
            .find(|choice| choice.name().eq_ignore_ascii_case(text))
            .ok_or_else(|| InvalidChoiceError::new(text))
    }

    /// Every choice that defeats `self`, in canonical order.
    fn defeaters(self) -> Vec<Self> {
        Self::values()
            .iter()
            .copied()
            .filter(|other| other.defeats(self))
            .collect()
    }
}

/// Result of a single round, seen from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player's throw defeated the computer's.
    PlayerWins,
    /// Both threw the same choice.
    Tie,
    /// The computer's throw defeated the player's.
    ComputerWins,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWins => write!(f, "PlayerWins"),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::ComputerWins => write!(f, "ComputerWins"),
        }
    }
}

/// Returns true iff `a` defeats `b`.
pub fn defeats<C: ChoiceDomain>(a: C, b: C) -> bool {
    a.defeats(b)
}

/// Resolve a round between the computer's and the player's throw.
pub fn resolve<C: ChoiceDomain>(computer: C, player: C) -> Outcome {
    if defeats(computer, player) {
        Outcome::ComputerWins
    } else if computer == player {
        Outcome::Tie
    } else {
        Outcome::PlayerWins
    }
}

/// Check that a domain is usable by the predictive opponent.
///
/// The relation must be irreflexive, decide every pair of distinct choices
/// exactly one way, and leave no choice without a defeater or without a
/// choice it defeats. Indices must match positions in
/// [`ChoiceDomain::values`].
pub fn validate_domain<C: ChoiceDomain>() -> Result<(), DomainError> {
    let values = C::values();
    if values.is_empty() {
        return Err(DomainError::Empty);
    }

    for (i, &a) in values.iter().enumerate() {
        if a.index() != i {
            return Err(DomainError::Misindexed(a.name(), i));
        }
        if a.defeats(a) {
            return Err(DomainError::Reflexive(a.name()));
        }
        for &b in &values[i + 1..] {
            match (a.defeats(b), b.defeats(a)) {
                (true, true) => return Err(DomainError::Mutual(a.name(), b.name())),
                (false, false) => return Err(DomainError::Undecided(a.name(), b.name())),
                _ => {}
            }
        }
    }

    for &c in values {
        if c.defeaters().is_empty() {
            return Err(DomainError::Unbeatable(c.name()));
        }
        if values.iter().all(|&other| !c.defeats(other)) {
            return Err(DomainError::BeatsNothing(c.name()));
        }
    }

    Ok(())
}

/// Input text did not name any known choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoiceError {
    /// The rejected input.
    pub input: String,
}

impl InvalidChoiceError {
    /// Create an error for the given input text.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for InvalidChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid choice: {:?}", self.input)
    }
}

impl std::error::Error for InvalidChoiceError {}

/// Errors describing a malformed choice domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The domain has no choices.
    Empty,
    /// A choice reports an index different from its position.
    Misindexed(&'static str, usize),
    /// A choice defeats itself.
    Reflexive(&'static str),
    /// Two choices defeat each other.
    Mutual(&'static str, &'static str),
    /// Neither of two distinct choices defeats the other.
    Undecided(&'static str, &'static str),
    /// Nothing defeats this choice, so it can never be countered.
    Unbeatable(&'static str),
    /// This choice defeats no other choice.
    BeatsNothing(&'static str),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Empty => write!(f, "Choice domain is empty"),
            DomainError::Misindexed(name, position) => {
                write!(f, "{} is listed at position {} but reports a different index", name, position)
            }
            DomainError::Reflexive(name) => write!(f, "{} defeats itself", name),
            DomainError::Mutual(a, b) => write!(f, "{} and {} defeat each other", a, b),
            DomainError::Undecided(a, b) => {
                write!(f, "Neither {} nor {} defeats the other", a, b)
            }
            DomainError::Unbeatable(name) => write!(f, "No choice defeats {}", name),
            DomainError::BeatsNothing(name) => write!(f, "{} defeats no choice", name),
        }
    }
}

impl std::error::Error for DomainError {}
