//! Scripted players for evaluating the opponent offline.
//!
//! Each session pits a fresh [`PredictiveOpponent`] against a
//! [`ScriptedPlayer`] for a fixed number of rounds. Sessions are independent
//! and seeded, so [`simulate`] runs them in parallel with rayon and still
//! produces the same report for the same base seed.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::markov::config::{ConfigError, OpponentConfig};
use crate::markov::domain::ChoiceDomain;
use crate::markov::opponent::PredictiveOpponent;
use crate::markov::tally::{OutcomeTally, Summary};

/// Mixed into the session seed so player and opponent draw different streams.
const PLAYER_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Probability that a sticky player repeats its own last throw.
const STICKY_REPEAT: f64 = 0.8;

/// How a scripted player picks its throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Always the first choice in canonical order.
    Constant,
    /// Walk the choices in canonical order.
    Cycle,
    /// Uniformly random every round.
    Random,
    /// Repeat the computer's previous throw.
    Mirror,
    /// Repeat its own previous throw most of the time.
    Sticky,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Strategy; 5] = [
        Strategy::Constant,
        Strategy::Cycle,
        Strategy::Random,
        Strategy::Mirror,
        Strategy::Sticky,
    ];

    /// Lowercase name accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Constant => "constant",
            Strategy::Cycle => "cycle",
            Strategy::Random => "random",
            Strategy::Mirror => "mirror",
            Strategy::Sticky => "sticky",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
                format!("unknown strategy '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// A player following a fixed [`Strategy`].
#[derive(Debug, Clone)]
pub struct ScriptedPlayer<C: ChoiceDomain> {
    strategy: Strategy,
    own_last: Option<C>,
    opponent_last: Option<C>,
    rounds: usize,
    rng: StdRng,
}

impl<C: ChoiceDomain> ScriptedPlayer<C> {
    /// Create a player with its own seeded random source.
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            own_last: None,
            opponent_last: None,
            rounds: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The throw for the upcoming round.
    pub fn next_move(&mut self) -> C {
        let values = C::values();
        match self.strategy {
            Strategy::Constant => values[0],
            Strategy::Cycle => values[self.rounds % values.len()],
            Strategy::Random => values[self.rng.gen_range(0..values.len())],
            Strategy::Mirror => match self.opponent_last {
                Some(choice) => choice,
                None => values[self.rng.gen_range(0..values.len())],
            },
            Strategy::Sticky => match self.own_last {
                Some(choice) if self.rng.gen::<f64>() < STICKY_REPEAT => choice,
                _ => values[self.rng.gen_range(0..values.len())],
            },
        }
    }

    /// Remember what both sides threw.
    pub fn observe(&mut self, own: C, opponent: C) {
        self.own_last = Some(own);
        self.opponent_last = Some(opponent);
        self.rounds += 1;
    }
}

/// Play one seeded session and return its tally.
pub fn play_session<C: ChoiceDomain>(
    strategy: Strategy,
    config: &OpponentConfig,
    rounds: u64,
    seed: u64,
) -> Result<OutcomeTally, ConfigError> {
    let mut opponent = PredictiveOpponent::<C>::new(config.clone().with_seed(seed))?;
    let mut player = ScriptedPlayer::<C>::new(strategy, seed ^ PLAYER_SEED_SALT);

    for _ in 0..rounds {
        let computer = opponent.choose_move();
        let own = player.next_move();
        opponent.play_round(computer, own);
        player.observe(own, computer);
    }

    Ok(*opponent.tally())
}

/// Aggregate result of many sessions against one strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Strategy the scripted player followed.
    pub strategy: Strategy,
    /// Number of sessions played.
    pub sessions: u64,
    /// Rounds per session.
    pub rounds_per_session: u64,
    /// Seed of the first session; session `i` uses `base_seed + i`.
    pub base_seed: u64,
    /// Outcome counts summed over all sessions.
    pub tally: OutcomeTally,
    /// Percentages over all sessions.
    pub summary: Summary,
}

/// Play `sessions` independent sessions in parallel.
///
/// `on_session` is called once per finished session (from worker threads),
/// which lets callers drive a progress bar.
pub fn simulate<C, F>(
    strategy: Strategy,
    config: &OpponentConfig,
    sessions: u64,
    rounds: u64,
    base_seed: u64,
    on_session: F,
) -> Result<SimulationReport, ConfigError>
where
    C: ChoiceDomain,
    F: Fn() + Sync,
{
    config.validate()?;

    let tallies: Vec<OutcomeTally> = (0..sessions)
        .into_par_iter()
        .map(|i| {
            let tally = play_session::<C>(strategy, config, rounds, base_seed.wrapping_add(i));
            on_session();
            tally
        })
        .collect::<Result<_, _>>()?;

    let mut tally = OutcomeTally::new();
    for t in &tallies {
        tally.merge(t);
    }

    Ok(SimulationReport {
        strategy,
        sessions,
        rounds_per_session: rounds,
        base_seed,
        tally,
        summary: tally.summary(),
    })
}
