//! Transition counts between consecutive player throws.
//!
//! The table is a dense `n × n` matrix stored row-major, where row `i` holds
//! what the player threw right after throwing choice `i`. Counts only ever
//! grow during a session.

use std::marker::PhantomData;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::markov::domain::ChoiceDomain;

/// Order-1 transition frequency table over a choice domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable<C: ChoiceDomain> {
    /// Row-major counts: `counts[prev * size + next]`.
    counts: Vec<u64>,

    /// Number of choices (row and column length).
    size: usize,

    _phantom: PhantomData<C>,
}

impl<C: ChoiceDomain> Default for TransitionTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ChoiceDomain> TransitionTable<C> {
    /// Create a zeroed table sized for the domain.
    pub fn new() -> Self {
        let size = C::count();
        Self {
            counts: vec![0; size * size],
            size,
            _phantom: PhantomData,
        }
    }

    /// Record that the player threw `next` right after `previous`.
    pub fn observe(&mut self, previous: C, next: C) {
        let cell = previous.index() * self.size + next.index();
        self.counts[cell] += 1;
        trace!("observed {} -> {} (now {})", previous, next, self.counts[cell]);
    }

    /// Number of times `next` followed `previous`.
    pub fn count(&self, previous: C, next: C) -> u64 {
        self.counts[previous.index() * self.size + next.index()]
    }

    /// Counts of every follow-up to `previous`, in canonical order.
    pub fn row(&self, previous: C) -> &[u64] {
        let start = previous.index() * self.size;
        &self.counts[start..start + self.size]
    }

    /// Number of transitions observed out of `previous`.
    pub fn row_total(&self, previous: C) -> u64 {
        self.row(previous).iter().sum()
    }

    /// Number of transitions observed overall.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True if nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// The most frequent follow-up to `previous`.
    ///
    /// Scans the row in canonical order and only moves on a strictly greater
    /// count, so ties (including an all-zero row) go to the lowest index.
    pub fn most_frequent_after(&self, previous: C) -> C {
        let row = self.row(previous);
        let mut best = 0;
        for (i, &count) in row.iter().enumerate() {
            if count > row[best] {
                best = i;
            }
        }
        C::values()[best]
    }

    /// Every follow-up to `previous` sharing the maximum count.
    pub fn leaders_after(&self, previous: C) -> Vec<C> {
        let row = self.row(previous);
        let max = row.iter().copied().max().unwrap_or(0);
        C::values()
            .iter()
            .copied()
            .filter(|choice| row[choice.index()] == max)
            .collect()
    }

    /// Export the table with choice names for display or reports.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            choices: C::values().iter().map(|c| c.name().to_string()).collect(),
            counts: self.counts.chunks(self.size).map(|row| row.to_vec()).collect(),
        }
    }
}

/// Serializable view of a transition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Choice names in canonical order (row and column labels).
    pub choices: Vec<String>,
    /// `counts[prev][next]`.
    pub counts: Vec<Vec<u64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rps::Choice;

    #[test]
    fn test_new_table_is_zeroed() {
        let table = TransitionTable::<Choice>::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        for &prev in Choice::values() {
            assert_eq!(table.row(prev), &[0, 0, 0]);
        }
    }

    #[test]
    fn test_observe_increments_single_cell() {
        let mut table = TransitionTable::<Choice>::new();
        table.observe(Choice::Paper, Choice::Scissors);
        table.observe(Choice::Paper, Choice::Scissors);

        assert_eq!(table.count(Choice::Paper, Choice::Scissors), 2);
        assert_eq!(table.count(Choice::Scissors, Choice::Paper), 0);
        assert_eq!(table.row(Choice::Paper), &[0, 0, 2]);
        assert_eq!(table.row_total(Choice::Paper), 2);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_most_frequent_prefers_first_on_ties() {
        let mut table = TransitionTable::<Choice>::new();

        // All-zero row predicts index 0
        assert_eq!(table.most_frequent_after(Choice::Scissors), Choice::Rock);

        table.observe(Choice::Rock, Choice::Scissors);
        table.observe(Choice::Rock, Choice::Paper);
        // Paper and Scissors tied at 1: Paper comes first
        assert_eq!(table.most_frequent_after(Choice::Rock), Choice::Paper);
        assert_eq!(
            table.leaders_after(Choice::Rock),
            vec![Choice::Paper, Choice::Scissors]
        );

        table.observe(Choice::Rock, Choice::Scissors);
        assert_eq!(table.most_frequent_after(Choice::Rock), Choice::Scissors);
        assert_eq!(table.leaders_after(Choice::Rock), vec![Choice::Scissors]);
    }

    #[test]
    fn test_snapshot_labels_rows() {
        let mut table = TransitionTable::<Choice>::new();
        table.observe(Choice::Scissors, Choice::Rock);

        let snapshot = table.snapshot();
        assert_eq!(snapshot.choices, vec!["ROCK", "PAPER", "SCISSORS"]);
        assert_eq!(snapshot.counts[2], vec![1, 0, 0]);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TableSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
