//! Outcome counters and the end-of-session summary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markov::domain::Outcome;

/// Per-session counts of each round outcome.
///
/// Exactly one counter moves per recorded round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    /// Rounds won by the human player.
    pub player_wins: u64,
    /// Rounds where both threw the same choice.
    pub ties: u64,
    /// Rounds won by the computer.
    pub computer_wins: u64,
}

impl OutcomeTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::ComputerWins => self.computer_wins += 1,
        }
    }

    /// Counter for a single outcome.
    pub fn get(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::PlayerWins => self.player_wins,
            Outcome::Tie => self.ties,
            Outcome::ComputerWins => self.computer_wins,
        }
    }

    /// Rounds recorded so far.
    pub fn total(&self) -> u64 {
        self.player_wins + self.ties + self.computer_wins
    }

    /// Add another tally into this one (used when aggregating sessions).
    pub fn merge(&mut self, other: &OutcomeTally) {
        self.player_wins += other.player_wins;
        self.ties += other.ties;
        self.computer_wins += other.computer_wins;
    }

    /// Counts plus percentages, or no percentages when nothing was played.
    pub fn summary(&self) -> Summary {
        let total = self.total();
        let percentages = if total == 0 {
            None
        } else {
            let share = |count: u64| round2(count as f64 / total as f64 * 100.0);
            Some(Percentages {
                player_wins: share(self.player_wins),
                ties: share(self.ties),
                computer_wins: share(self.computer_wins),
            })
        };

        Summary {
            player_wins: self.player_wins,
            ties: self.ties,
            computer_wins: self.computer_wins,
            total,
            percentages,
        }
    }
}

/// Share of each outcome in percent, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentages {
    /// Player win percentage.
    pub player_wins: f64,
    /// Tie percentage.
    pub ties: f64,
    /// Computer win percentage.
    pub computer_wins: f64,
}

/// End-of-session report.
///
/// `percentages` is `None` when no round was completed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Rounds won by the player.
    pub player_wins: u64,
    /// Tied rounds.
    pub ties: u64,
    /// Rounds won by the computer.
    pub computer_wins: u64,
    /// Completed rounds.
    pub total: u64,
    /// Outcome shares, absent when there is no data.
    pub percentages: Option<Percentages>,
}

impl Summary {
    /// True when no round was completed.
    pub fn is_empty(&self) -> bool {
        self.percentages.is_none()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (player, ties, computer) = match self.percentages {
            Some(p) => (
                format!("{}%", format_percent(p.player_wins)),
                format!("{}%", format_percent(p.ties)),
                format!("{}%", format_percent(p.computer_wins)),
            ),
            None => ("no data".to_string(), "no data".to_string(), "no data".to_string()),
        };

        writeln!(
            f,
            "You won: {} game(s) giving a win percentage of: {}",
            self.player_wins, player
        )?;
        writeln!(f, "This many games tied : {} with a percentage of {}", self.ties, ties)?;
        write!(
            f,
            "Computer won: {} game(s) giving a win percentage of {}",
            self.computer_wins, computer
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a percentage with at most two decimals, dropping trailing zeros.
pub fn format_percent(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_moves_one_counter() {
        let mut tally = OutcomeTally::new();
        tally.record(Outcome::Tie);
        assert_eq!(tally, OutcomeTally { player_wins: 0, ties: 1, computer_wins: 0 });

        tally.record(Outcome::ComputerWins);
        tally.record(Outcome::ComputerWins);
        assert_eq!(tally.get(Outcome::ComputerWins), 2);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_empty_summary_has_no_data() {
        let summary = OutcomeTally::new().summary();
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);

        let text = summary.to_string();
        assert_eq!(text.matches("no data").count(), 3);
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_percentages_rounded_to_two_decimals() {
        let tally = OutcomeTally { player_wins: 1, ties: 0, computer_wins: 2 };
        let p = tally.summary().percentages.unwrap();

        assert_eq!(p.player_wins, 33.33);
        assert_eq!(p.ties, 0.0);
        assert_eq!(p.computer_wins, 66.67);
    }

    #[test]
    fn test_format_percent_trims() {
        assert_eq!(format_percent(50.0), "50");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(33.33), "33.33");
        assert_eq!(format_percent(0.0), "0");
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut a = OutcomeTally { player_wins: 1, ties: 2, computer_wins: 3 };
        a.merge(&OutcomeTally { player_wins: 4, ties: 0, computer_wins: 1 });
        assert_eq!(a, OutcomeTally { player_wins: 5, ties: 2, computer_wins: 4 });
    }

    #[test]
    fn test_summary_lines() {
        let tally = OutcomeTally { player_wins: 2, ties: 1, computer_wins: 1 };
        let text = tally.summary().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "You won: 2 game(s) giving a win percentage of: 50%");
        assert_eq!(lines[1], "This many games tied : 1 with a percentage of 25%");
        assert_eq!(lines[2], "Computer won: 1 game(s) giving a win percentage of 25%");
    }
}
