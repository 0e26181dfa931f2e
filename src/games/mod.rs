//! Game implementations for the predictive opponent.
//!
//! Each game supplies a [`ChoiceDomain`](crate::markov::ChoiceDomain): the
//! set of throws and the dominance relation between them. The opponent,
//! transition table and tally are generic, so a new game only needs:
//!
//! 1. A new module under `src/games/`
//! 2. A `Copy` choice enum with a canonical order
//! 3. A dominance table and a `ChoiceDomain` impl
//! 4. Tests that `validate_domain` accepts it
//!
//! ## Available Games
//!
//! - [`rps`]: Classic Rock-Paper-Scissors, plus scripted players for offline
//!   evaluation

pub mod rps;
