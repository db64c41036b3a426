//! Exhaustive enumeration of every hand of a small deck.
//!
//! Slow, but free of any counting argument, so it is the reference the
//! closed-form engine gets checked against.

use arrayvec::ArrayVec;

use crate::category::{self, Category, CategoryResult};
use crate::combinatorics::combination;
use crate::deck::DeckParameters;
use crate::error::DeckError;

pub const MAX_CARDS: usize = 12;

pub const MAX_RANKS: usize = 32;

/// Hands past this many take too long to walk.
pub const DEFAULT_LIMIT: f64 = 5_000_000.0;

type RankCounts = ArrayVec<u8, MAX_RANKS>;

/// Slot 0 is the ace playing low, slot `r + 1` is rank `r`.
type Ranks = ArrayVec<u8, { MAX_RANKS + 1 }>;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
struct Card {
    rank: u8,
    suit: u32,
}

fn rank_counts(cards: &[Card], ranks: usize) -> RankCounts {
    let mut ret: RankCounts = (0..ranks).map(|_| 0).collect();
    for c in cards {
        ret[c.rank as usize] += 1;
    }
    ret
}

fn ranks_for_straight(cards: &[Card], ranks: usize) -> Ranks {
    let mut ret: Ranks = (0..=ranks).map(|_| 0).collect();
    for c in cards {
        ret[c.rank as usize + 1] = 1;
    }
    ret[0] = ret[ranks];
    ret
}

fn is_n_of_a_kind(counts: &[u8], n: u8) -> bool {
    counts.iter().any(|&c| c >= n)
}

fn is_two_pair(counts: &[u8]) -> bool {
    counts.iter().map(|&c| c / 2).sum::<u8>() >= 2
}

fn is_full_house(counts: &[u8]) -> bool {
    let mut has_three = false;
    let mut has_two = false;
    for &count in counts {
        let mut count = count;
        if count >= 3 && !has_three {
            count -= 3;
            has_three = true;
        }
        if count >= 2 {
            has_two = true;
        }
    }
    has_three && has_two
}

fn suit_counts(cards: &[Card]) -> ArrayVec<(u32, u8), MAX_CARDS> {
    let mut ret = ArrayVec::<(u32, u8), MAX_CARDS>::new();
    for c in cards {
        match ret.iter_mut().find(|(suit, _)| *suit == c.suit) {
            Some((_, count)) => *count += 1,
            None => ret.push((c.suit, 1)),
        }
    }
    ret
}

fn is_flush(cards: &[Card]) -> bool {
    suit_counts(cards).iter().any(|&(_, c)| c >= 5)
}

/// Highest slot ending a run of five, if any.
fn straight_top(cards: &[Card], ranks: usize) -> Option<usize> {
    if ranks < 5 {
        return None;
    }
    let slots = ranks_for_straight(cards, ranks);
    let mut window_sum = slots.iter().take(5).sum::<u8>();
    let mut top = (window_sum == 5).then_some(4);
    for i in 5..slots.len() {
        window_sum -= slots[i - 5];
        window_sum += slots[i];
        if window_sum == 5 {
            top = Some(i);
        }
    }
    top
}

fn straight_flush_top(cards: &[Card], ranks: usize) -> Option<usize> {
    suit_counts(cards)
        .iter()
        .filter(|&&(_, count)| count >= 5)
        .filter_map(|&(suit, _)| {
            let suited = cards
                .iter()
                .filter(|c| c.suit == suit)
                .copied()
                .collect::<ArrayVec<Card, MAX_CARDS>>();
            straight_top(&suited, ranks)
        })
        .max()
}

/// Best category the hand makes.
fn classify(cards: &[Card], ranks: usize) -> Category {
    match straight_flush_top(cards, ranks) {
        Some(top) if top == ranks => return Category::RoyalStraightFlush,
        Some(_) => return Category::StraightFlush,
        None => {}
    }
    let counts = rank_counts(cards, ranks);
    if is_n_of_a_kind(&counts, 4) {
        Category::FourCard
    } else if is_full_house(&counts) {
        Category::FullHouse
    } else if is_flush(cards) {
        Category::Flush
    } else if straight_top(cards, ranks).is_some() {
        Category::Straight
    } else if is_n_of_a_kind(&counts, 3) {
        Category::ThreeCard
    } else if is_two_pair(&counts) {
        Category::TwoPair
    } else if is_n_of_a_kind(&counts, 2) {
        Category::OnePair
    } else {
        Category::HighCard
    }
}

fn build_deck(deck: &DeckParameters) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck.deck_size() as usize);
    for _ in 0..deck.duplicate {
        for suit in 0..deck.suit {
            for rank in 0..deck.rank {
                cards.push(Card {
                    suit,
                    rank: rank as u8,
                });
            }
        }
    }
    cards
}

/// Calls `visit` with every `size`-card subset of `deck`, in lexicographic
/// index order.
fn each_hand(deck: &[Card], size: usize, mut visit: impl FnMut(&[Card])) {
    let n = deck.len();
    if size > n {
        return;
    }
    let mut idx = (0..size).collect::<ArrayVec<usize, MAX_CARDS>>();
    let mut hand = ArrayVec::<Card, MAX_CARDS>::new();
    loop {
        hand.clear();
        hand.extend(idx.iter().map(|&i| deck[i]));
        visit(&hand);

        let Some(i) = (0..size).rev().find(|&i| idx[i] < n - size + i) else {
            return;
        };
        idx[i] += 1;
        for j in i + 1..size {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Hands seen per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub counts: [u64; Category::COUNT],
}

impl Tally {
    pub fn hands(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn probabilities(&self) -> [f64; Category::COUNT] {
        let total = self.hands() as f64;
        if total == 0.0 {
            return [0.0; Category::COUNT];
        }
        self.counts.map(|c| c as f64 / total)
    }

    pub fn distribution(&self) -> Vec<CategoryResult> {
        category::ordered(self.probabilities())
    }
}

/// Deals every possible hand and tallies the best category of each.
pub fn enumerate(deck: &DeckParameters, limit: f64) -> Result<Tally, DeckError> {
    if deck.hand_size as usize > MAX_CARDS {
        return Err(DeckError::HandTooLarge {
            hand: deck.hand_size,
            max: MAX_CARDS,
        });
    }
    if deck.rank as usize > MAX_RANKS {
        return Err(DeckError::TooManyRanks {
            rank: deck.rank,
            max: MAX_RANKS,
        });
    }
    let hands = combination(deck.deck_size() as f64, deck.hand_size as i64);
    if hands > limit {
        return Err(DeckError::EnumerationTooLarge { hands, limit });
    }

    let cards = build_deck(deck);
    let ranks = deck.rank as usize;
    let mut tally = Tally::default();
    each_hand(&cards, deck.hand_size as usize, |hand| {
        tally.counts[classify(hand, ranks).idx()] += 1;
    });
    log::info!("enumerated {} hands of {}", tally.hands(), deck.hand_size);
    Ok(tally)
}
