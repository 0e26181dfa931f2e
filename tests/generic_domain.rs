//! The opponent over a domain where every choice has two defeaters.

use std::collections::HashSet;
use std::fmt;

use rps_markov::markov::{validate_domain, ChoiceDomain, OpponentConfig, PredictiveOpponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Hand {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

const HANDS: [Hand; 5] = [Hand::Rock, Hand::Paper, Hand::Scissors, Hand::Lizard, Hand::Spock];

const BEATS: [[bool; 5]; 5] = [
    //  rock   paper  sciss  lizard spock
    [false, false, true, true, false],  // rock
    [true, false, false, false, true],  // paper
    [false, true, false, true, false],  // scissors
    [false, true, false, false, true],  // lizard
    [true, false, true, false, false],  // spock
];

impl ChoiceDomain for Hand {
    fn values() -> &'static [Self] {
        &HANDS
    }

    fn index(self) -> usize {
        self as usize
    }

    fn defeats(self, other: Self) -> bool {
        BEATS[self.index()][other.index()]
    }

    fn name(self) -> &'static str {
        match self {
            Hand::Rock => "ROCK",
            Hand::Paper => "PAPER",
            Hand::Scissors => "SCISSORS",
            Hand::Lizard => "LIZARD",
            Hand::Spock => "SPOCK",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[test]
fn test_five_choice_domain_is_valid() {
    assert_eq!(validate_domain::<Hand>(), Ok(()));
    for &hand in Hand::values() {
        assert_eq!(hand.defeaters().len(), 2);
    }
    assert_eq!(Hand::parse("spock"), Ok(Hand::Spock));
}

#[test]
fn test_counter_drawn_from_all_defeaters() {
    let mut counters = HashSet::new();

    for seed in 0..100 {
        let config = OpponentConfig::default().with_seed(seed);
        let mut opponent = PredictiveOpponent::<Hand>::new(config).unwrap();

        for _ in 0..3 {
            let computer = opponent.choose_move();
            opponent.play_round(computer, Hand::Lizard);
        }

        let computer = opponent.choose_move();
        assert_eq!(opponent.last_prediction(), Some(Hand::Lizard));
        assert!(computer.defeats(Hand::Lizard));
        counters.insert(computer);
    }

    let expected: HashSet<Hand> = [Hand::Rock, Hand::Scissors].into_iter().collect();
    assert_eq!(counters, expected);
}

#[test]
fn test_table_sized_to_domain() {
    let mut opponent = PredictiveOpponent::<Hand>::new(OpponentConfig::default().with_seed(1)).unwrap();
    opponent.play_round(Hand::Rock, Hand::Spock);
    opponent.play_round(Hand::Rock, Hand::Lizard);

    assert_eq!(opponent.table().row(Hand::Spock), &[0, 0, 0, 1, 0]);
    assert_eq!(opponent.table().snapshot().counts.len(), 5);
}
