//! Adaptive opponent engine.
//!
//! This module provides a generic order-1 Markov opponent for cyclic
//! dominance games such as Rock-Paper-Scissors.
//!
//! # Overview
//!
//! The opponent exploits the human player's own conditional move
//! distribution:
//! 1. Count every pair of consecutive player throws in a transition table
//! 2. Predict the next throw as the most frequent follow-up to the last one
//! 3. Throw a choice that defeats the prediction
//!
//! # Usage
//!
//! 1. Implement [`ChoiceDomain`] for your set of throws (or use
//!    [`crate::games::rps::Choice`])
//! 2. Create a [`PredictiveOpponent`] from an [`OpponentConfig`]
//! 3. Each round call `choose_move()`, then `play_round()` with the player's throw
//! 4. Read `summary()` at the end of the session
//!
//! # Example
//!
//! ```
//! use rps_markov::games::rps::Choice;
//! use rps_markov::markov::{Outcome, OpponentConfig, PredictiveOpponent};
//!
//! let mut opponent = PredictiveOpponent::<Choice>::new(OpponentConfig::default().with_seed(1)).unwrap();
//!
//! // A player who only ever throws rock is beaten from the second round on.
//! let mut outcomes = Vec::new();
//! for _ in 0..5 {
//!     let computer = opponent.choose_move();
//!     outcomes.push(opponent.play_round(computer, Choice::Rock));
//! }
//! assert!(outcomes[1..].iter().all(|&o| o == Outcome::ComputerWins));
//! println!("{}", opponent.summary());
//! ```

pub mod config;
pub mod domain;
pub mod opponent;
pub mod table;
pub mod tally;

// Re-export main types for convenient access
pub use config::{ConfigError, OpponentConfig, TieBreak};
pub use domain::{defeats, resolve, validate_domain, ChoiceDomain, DomainError, InvalidChoiceError, Outcome};
pub use opponent::PredictiveOpponent;
pub use table::{TableSnapshot, TransitionTable};
pub use tally::{format_percent, OutcomeTally, Percentages, Summary};
