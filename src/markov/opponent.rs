//! The adaptive computer opponent.
//!
//! The opponent keeps an order-1 transition table over the human player's
//! throws. Each round it looks up the row for the player's previous throw,
//! takes the most frequent follow-up as the predicted next throw, and answers
//! with a choice that defeats it:
//!
//! ```text
//! previous throw ──► table row ──► predicted throw ──► defeater (random pick)
//! ```
//!
//! Before the warmup is over (by default, before the first completed round)
//! there is nothing to condition on and the computer throws uniformly at
//! random.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::markov::config::{ConfigError, OpponentConfig, TieBreak};
use crate::markov::domain::{resolve, validate_domain, ChoiceDomain, Outcome};
use crate::markov::table::TransitionTable;
use crate::markov::tally::{OutcomeTally, Summary};

/// Computer player that predicts and counters the human's next throw.
///
/// # Type Parameters
/// - `C`: The choice domain
/// - `R`: The random source (seeded `StdRng` unless injected)
///
/// # Example
/// ```
/// use rps_markov::games::rps::Choice;
/// use rps_markov::markov::{ChoiceDomain, OpponentConfig, PredictiveOpponent};
///
/// let config = OpponentConfig::default().with_seed(42);
/// let mut opponent = PredictiveOpponent::<Choice>::new(config).unwrap();
///
/// let player = Choice::parse("rock").unwrap();
/// let computer = opponent.choose_move();
/// let outcome = opponent.play_round(computer, player);
///
/// assert_eq!(opponent.rounds_played(), 1);
/// assert_eq!(opponent.tally().get(outcome), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PredictiveOpponent<C: ChoiceDomain, R: Rng = StdRng> {
    /// Configuration for the opponent.
    config: OpponentConfig,

    /// Player transition counts.
    table: TransitionTable<C>,

    /// Player's throw in the last completed round.
    previous: Option<C>,

    /// Completed rounds.
    rounds_played: u64,

    /// Outcome counters.
    tally: OutcomeTally,

    /// Player throw predicted by the last `choose_move` call.
    last_prediction: Option<C>,

    /// Random number generator.
    rng: R,
}

impl<C: ChoiceDomain> PredictiveOpponent<C, StdRng> {
    /// Create an opponent with a `StdRng` seeded from `config.seed`.
    pub fn new(config: OpponentConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<C: ChoiceDomain, R: Rng> PredictiveOpponent<C, R> {
    /// Create an opponent drawing from the given random source.
    ///
    /// `config.seed` is ignored; the caller owns seeding.
    pub fn with_rng(config: OpponentConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_domain::<C>()?;

        info!(
            "new opponent: {} choices, seed {:?}, warmup {}, tie-break {:?}",
            C::count(),
            config.seed,
            config.warmup_rounds,
            config.tie_break
        );

        Ok(Self {
            config,
            table: TransitionTable::new(),
            previous: None,
            rounds_played: 0,
            tally: OutcomeTally::new(),
            last_prediction: None,
            rng,
        })
    }

    /// Pick the computer's throw for the upcoming round.
    pub fn choose_move(&mut self) -> C {
        let predicted = match self.predict() {
            Some(predicted) => predicted,
            None => {
                self.last_prediction = None;
                let values = C::values();
                return values[self.rng.gen_range(0..values.len())];
            }
        };
        self.last_prediction = Some(predicted);

        // Non-empty: validate_domain rejects unbeatable choices
        let counters = predicted.defeaters();
        let choice = counters[self.rng.gen_range(0..counters.len())];

        debug!(
            "after {:?} predicting {} (row {:?}), countering with {}",
            self.previous,
            predicted,
            self.previous.map(|p| self.table.row(p).to_vec()),
            choice
        );
        choice
    }

    /// Predicted next player throw, or `None` while warming up.
    fn predict(&mut self) -> Option<C> {
        if self.rounds_played < self.config.warmup_rounds {
            return None;
        }
        let previous = self.previous?;

        let predicted = match self.config.tie_break {
            TieBreak::FirstInOrder => self.table.most_frequent_after(previous),
            TieBreak::Uniform => {
                let leaders = self.table.leaders_after(previous);
                leaders[self.rng.gen_range(0..leaders.len())]
            }
        };
        Some(predicted)
    }

    /// Complete a round: learn from the player's throw, resolve and count it.
    ///
    /// `computer` should be the value returned by [`Self::choose_move`] for
    /// this round and `player` the already-parsed human throw.
    pub fn play_round(&mut self, computer: C, player: C) -> Outcome {
        if let Some(previous) = self.previous {
            self.table.observe(previous, player);
        }

        let outcome = resolve(computer, player);
        self.tally.record(outcome);

        self.previous = Some(player);
        self.rounds_played += 1;

        debug!(
            "round {}: computer {} vs player {} -> {}",
            self.rounds_played, computer, player, outcome
        );
        outcome
    }

    /// Counts and percentages for the session so far.
    pub fn summary(&self) -> Summary {
        self.tally.summary()
    }

    /// Start a new session, keeping the configuration and random source.
    pub fn reset(&mut self) {
        self.table = TransitionTable::new();
        self.previous = None;
        self.rounds_played = 0;
        self.tally = OutcomeTally::new();
        self.last_prediction = None;
    }

    /// Get the transition table.
    pub fn table(&self) -> &TransitionTable<C> {
        &self.table
    }

    /// Get the outcome counters.
    pub fn tally(&self) -> &OutcomeTally {
        &self.tally
    }

    /// Get the number of completed rounds.
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Get the player's throw from the last completed round.
    pub fn previous_choice(&self) -> Option<C> {
        self.previous
    }

    /// Get the prediction behind the most recent `choose_move`.
    pub fn last_prediction(&self) -> Option<C> {
        self.last_prediction
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &OpponentConfig {
        &self.config
    }
}
