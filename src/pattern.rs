//! Raw counts of the five-card core shape of each category.
//!
//! These overlap with each other (every straight flush is also a flush
//! pattern) and ignore the hand size. The probability engine adds kickers
//! and removes the overlaps.

use crate::combinatorics::{combination, permutation};
use crate::deck::DeckParameters;

const SHOWHAND: i32 = 5;

/// Starting ranks of a five-long run, with the ace also playing low.
fn run_starts(deck: &DeckParameters) -> f64 {
    deck.rank as f64 + 1.0 - (SHOWHAND - 1) as f64
}

pub fn royal_straight_flush(deck: &DeckParameters) -> f64 {
    (deck.duplicate as f64).powi(SHOWHAND) * deck.suit as f64
}

pub fn straight_flush(deck: &DeckParameters) -> f64 {
    (deck.duplicate as f64).powi(SHOWHAND) * run_starts(deck) * deck.suit as f64
}

pub fn four_card(deck: &DeckParameters) -> f64 {
    combination(deck.same_rank() as f64, 4) * deck.rank as f64
}

/// The triple and the pair come from an ordered pair of distinct ranks.
pub fn full_house(deck: &DeckParameters) -> f64 {
    let group = deck.same_rank() as f64;
    combination(group, 3) * combination(group, 2) * permutation(deck.rank as f64, 2)
}

pub fn flush(deck: &DeckParameters) -> f64 {
    combination(deck.same_suit() as f64, SHOWHAND as i64) * deck.suit as f64
}

pub fn straight(deck: &DeckParameters) -> f64 {
    (deck.same_rank() as f64).powi(SHOWHAND) * run_starts(deck)
}

pub fn three_card(deck: &DeckParameters) -> f64 {
    combination(deck.same_rank() as f64, 3) * deck.rank as f64
}

pub fn two_pair(deck: &DeckParameters) -> f64 {
    combination(deck.same_rank() as f64, 2).powi(2) * combination(deck.rank as f64, 2)
}

pub fn one_pair(deck: &DeckParameters) -> f64 {
    combination(deck.same_rank() as f64, 2) * deck.rank as f64
}
