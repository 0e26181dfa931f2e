//! # RPS Markov
//!
//! An adaptive Rock-Paper-Scissors opponent. The computer models the human
//! player with a first-order Markov chain over their throws, predicts the
//! most likely next throw and plays the choice that defeats it.
//!
//! ## Features
//!
//! - **Generic Engine**: Works with any choice set implementing `ChoiceDomain`
//! - **Seedable Randomness**: The random source is injected, so sessions replay exactly
//! - **Explicit Statistics**: Summaries report "no data" instead of NaN on empty sessions
//! - **Offline Evaluation**: Scripted players and a parallel session simulator
//!
//! ## Quick Start
//!
//! ```
//! use rps_markov::games::rps::Choice;
//! use rps_markov::markov::{ChoiceDomain, OpponentConfig, PredictiveOpponent};
//!
//! let mut opponent = PredictiveOpponent::<Choice>::new(OpponentConfig::default()).unwrap();
//!
//! let player = Choice::parse("paper").unwrap();
//! let computer = opponent.choose_move();
//! let outcome = opponent.play_round(computer, player);
//! println!("{} vs {}: {}", computer, player, outcome);
//! println!("{}", opponent.summary());
//! ```
//!
//! ## Modules
//!
//! - [`markov`]: Choice domains, transition table, opponent and tally
//! - [`games`]: Concrete games (Rock-Paper-Scissors) and scripted players
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 I/O loop (bin/play, bin/simulate)               │
//! │  - Reads / scripts player throws   - Prints results and stats   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ parse / choose_move / play_round
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     PredictiveOpponent<C>                       │
//! │  - TransitionTable (prev → next)  - OutcomeTally                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ implements ChoiceDomain
//!                               ▼
//!                    ┌─────────────────────┐
//!                    │ Rock-Paper-Scissors │
//!                    └─────────────────────┘
//! ```

#![warn(missing_docs)]

/// Adaptive opponent engine.
///
/// Generic over the choice domain; contains the prediction algorithm.
pub mod markov;

/// Game implementations module.
///
/// Contains the Rock-Paper-Scissors domain and scripted players.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use games::rps::Choice;
pub use markov::{ChoiceDomain, OpponentConfig, Outcome, PredictiveOpponent, Summary};
