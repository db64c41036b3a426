//! Disjoint per-category probabilities.
//!
//! Each category multiplies its raw pattern count by the ways to fill the
//! rest of the hand, removes the hands already claimed by a better category
//! and divides once by the number of possible hands.

use crate::category::{self, Category, CategoryResult};
use crate::combinatorics::{combination, remaining_pattern};
use crate::deck::DeckParameters;
use crate::pattern;

/// How hands counted by more than one raw pattern are removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Overlap {
    /// Kickers are drawn so that they can't complete a better category,
    /// leaving only the unavoidable overlaps to subtract. Exact for one copy
    /// per card and up to five cards drawn.
    #[default]
    Exclusive,
    /// Subtracts the bare pattern count of every better overlapping
    /// category, without kickers.
    Raw,
}

/// Quantities shared by every category of one deck.
struct Draw {
    size: f64,
    group: f64,
    hand: i64,
}

impl Draw {
    fn new(deck: &DeckParameters) -> Self {
        Self {
            size: deck.deck_size() as f64,
            group: deck.same_rank() as f64,
            hand: deck.hand_size as i64,
        }
    }

    fn hands(&self) -> f64 {
        combination(self.size, self.hand)
    }

    /// Any cards at all complete a five-card shape.
    fn free_rest(&self) -> f64 {
        combination(self.size - 5.0, self.hand - 5)
    }
}

pub fn royal_straight_flush(deck: &DeckParameters, _overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    pattern::royal_straight_flush(deck) * draw.free_rest() / draw.hands()
}

pub fn straight_flush(deck: &DeckParameters, overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    let all = pattern::straight_flush(deck);
    let royal = pattern::royal_straight_flush(deck);
    let count = match overlap {
        Overlap::Exclusive => (all - royal) * draw.free_rest(),
        Overlap::Raw => all * draw.free_rest() - royal,
    };
    count / draw.hands()
}

pub fn four_card(deck: &DeckParameters, _overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    let kickers = remaining_pattern(draw.size, draw.group, draw.hand - 4);
    pattern::four_card(deck) * kickers / draw.hands()
}

pub fn full_house(deck: &DeckParameters, _overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    pattern::full_house(deck) * draw.free_rest() / draw.hands()
}

pub fn flush(deck: &DeckParameters, overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    let all = pattern::flush(deck);
    let runs = pattern::straight_flush(deck);
    let count = match overlap {
        Overlap::Exclusive => (all - runs) * draw.free_rest(),
        Overlap::Raw => all * draw.free_rest() - runs,
    };
    count / draw.hands()
}

pub fn straight(deck: &DeckParameters, overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    let all = pattern::straight(deck);
    let suited = pattern::straight_flush(deck);
    let count = match overlap {
        Overlap::Exclusive => (all - suited) * draw.free_rest(),
        Overlap::Raw => all * draw.free_rest() - suited,
    };
    count / draw.hands()
}

pub fn three_card(deck: &DeckParameters, overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    // Kickers avoid the triple's rank, so only a paired kicker upgrades it.
    let all = pattern::three_card(deck) * combination(draw.size - draw.group, draw.hand - 3);
    let count = match overlap {
        Overlap::Exclusive => all - pattern::full_house(deck) * draw.free_rest(),
        Overlap::Raw => all - pattern::four_card(deck) - pattern::full_house(deck),
    };
    count / draw.hands()
}

pub fn two_pair(deck: &DeckParameters, overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    let count = match overlap {
        Overlap::Exclusive => {
            // First kicker pool already excludes both paired ranks.
            let kickers = remaining_pattern(draw.size - draw.group, draw.group, draw.hand - 4);
            pattern::two_pair(deck) * kickers
        }
        Overlap::Raw => {
            let kickers = remaining_pattern(draw.size, draw.group, draw.hand - 4);
            pattern::two_pair(deck) * kickers - pattern::four_card(deck) - pattern::full_house(deck)
        }
    };
    count / draw.hands()
}

pub fn one_pair(deck: &DeckParameters, overlap: Overlap) -> f64 {
    let draw = Draw::new(deck);
    let kickers = remaining_pattern(draw.size, draw.group, draw.hand - 2);
    let all = pattern::one_pair(deck) * kickers;
    let count = match overlap {
        Overlap::Exclusive => all,
        Overlap::Raw => {
            all - pattern::four_card(deck)
                - pattern::full_house(deck)
                - pattern::three_card(deck)
                - pattern::two_pair(deck)
        }
    };
    count / draw.hands()
}

/// All ten categories, indexed like [`Category::ALL`]. High Card takes
/// whatever the other nine leave.
pub fn probabilities(deck: &DeckParameters, overlap: Overlap) -> [f64; Category::COUNT] {
    let mut values = [0.0; Category::COUNT];
    values[Category::RoyalStraightFlush.idx()] = royal_straight_flush(deck, overlap);
    values[Category::StraightFlush.idx()] = straight_flush(deck, overlap);
    values[Category::FourCard.idx()] = four_card(deck, overlap);
    values[Category::FullHouse.idx()] = full_house(deck, overlap);
    values[Category::Flush.idx()] = flush(deck, overlap);
    values[Category::Straight.idx()] = straight(deck, overlap);
    values[Category::ThreeCard.idx()] = three_card(deck, overlap);
    values[Category::TwoPair.idx()] = two_pair(deck, overlap);
    values[Category::OnePair.idx()] = one_pair(deck, overlap);
    let ranked: f64 = values[..Category::HighCard.idx()].iter().sum();
    values[Category::HighCard.idx()] = 1.0 - ranked;

    for (c, p) in Category::ALL.iter().zip(values) {
        log::debug!("{:?} {:?}: {}", overlap, c, p);
    }
    values
}

pub fn distribution(deck: &DeckParameters, overlap: Overlap) -> Vec<CategoryResult> {
    log::debug!(
        "deck of {} ({} per rank, {} per suit), drawing {}",
        deck.deck_size(),
        deck.same_rank(),
        deck.same_suit(),
        deck.hand_size
    );
    category::ordered(probabilities(deck, overlap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const HANDS_52_5: f64 = 2_598_960.0;

    fn assert_close(expected: f64, actual: f64, tolerance: f64) {
        assert!(
            (expected - actual).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_standard_deck_counts() {
        let p = probabilities(&DeckParameters::STANDARD, Overlap::Exclusive);
        let counts = [
            4.0,
            36.0,
            624.0,
            3744.0,
            5108.0,
            10_200.0,
            54_912.0,
            123_552.0,
            1_098_240.0,
            1_302_540.0,
        ];
        for (c, expected) in Category::ALL.iter().zip(counts) {
            assert_close(expected, p[c.idx()] * HANDS_52_5, 1e-6);
        }
    }

    #[test]
    fn test_standard_deck_published_percentages() {
        let p = probabilities(&DeckParameters::STANDARD, Overlap::Exclusive);
        let published = [
            0.000154, 0.00139, 0.0240, 0.1441, 0.1965, 0.3925, 2.1128, 4.7539, 42.2569, 50.1177,
        ];
        for (c, expected) in Category::ALL.iter().zip(published) {
            // Published figures carry four significant digits at most.
            assert_close(expected, p[c.idx()] * 100.0, 1e-4);
        }
    }

    #[test]
    fn test_sums_to_one() {
        for overlap in [Overlap::Exclusive, Overlap::Raw] {
            let total: f64 = probabilities(&DeckParameters::STANDARD, overlap).iter().sum();
            assert_close(1.0, total, 1e-9);
        }
    }

    #[test]
    fn test_raw_overlap_standard_deck() {
        let deck = DeckParameters::STANDARD;
        assert_close(36.0, straight_flush(&deck, Overlap::Raw) * HANDS_52_5, 1e-6);
        assert_close(5108.0, flush(&deck, Overlap::Raw) * HANDS_52_5, 1e-6);
        assert_close(10_200.0, straight(&deck, Overlap::Raw) * HANDS_52_5, 1e-6);
        assert_close(54_899.0, three_card(&deck, Overlap::Raw) * HANDS_52_5, 1e-6);
        assert_close(131_027.0, two_pair(&deck, Overlap::Raw) * HANDS_52_5, 1e-6);
        assert_close(1_091_623.0, one_pair(&deck, Overlap::Raw) * HANDS_52_5, 1e-5);
    }

    #[test]
    fn test_hand_size_is_honored() {
        let five = probabilities(&DeckParameters::STANDARD, Overlap::Exclusive);
        let seven = probabilities(&DeckParameters::new(13, 4, 1, 7), Overlap::Exclusive);
        let high = Category::HighCard.idx();
        assert!((five[high] - seven[high]).abs() > 1e-3);
        assert!(seven.iter().all(|p| p.is_finite()));
        assert_close(1.0, seven.iter().sum(), 1e-9);
    }

    #[test]
    fn test_short_hands() {
        // Four cards: no five-card shape, quads are exactly C(4,4) * 13.
        let deck = DeckParameters::new(13, 4, 1, 4);
        let p = probabilities(&deck, Overlap::Exclusive);
        for c in [Category::RoyalStraightFlush, Category::StraightFlush, Category::FullHouse, Category::Flush, Category::Straight] {
            assert_eq!(0.0, p[c.idx()], "{c:?}");
        }
        assert_close(13.0 / 270_725.0, p[Category::FourCard.idx()], 1e-15);
        assert_close(2808.0 / 270_725.0, p[Category::TwoPair.idx()], 1e-12);

        let pair = DeckParameters::new(13, 4, 1, 2);
        assert_close(78.0 / 1326.0, one_pair(&pair, Overlap::Exclusive), 1e-12);
    }

    #[test]
    fn test_single_suit_single_copy() {
        let deck = DeckParameters::new(13, 1, 1, 5);
        let p = probabilities(&deck, Overlap::Exclusive);
        assert!(p.iter().all(|v| v.is_finite()));
        assert_eq!(0.0, p[Category::FourCard.idx()]);
        assert_eq!(0.0, p[Category::Straight.idx()]);
        assert_eq!(0.0, p[Category::OnePair.idx()]);
        // Every hand is single-suited.
        assert_close(1.0, p[..Category::Straight.idx()].iter().sum(), 1e-12);
        assert_close(1.0, p.iter().sum(), 1e-9);
    }

    #[test]
    fn test_four_card_grows_with_duplicates() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let rank = rng.gen_range(7..=15);
            let suit = rng.gen_range(1..=6);
            let hand = rng.gen_range(4..=7);
            let mut last = 0.0;
            for duplicate in 1..=5 {
                let p = four_card(&DeckParameters::new(rank, suit, duplicate, hand), Overlap::Exclusive);
                assert!(p >= last, "{rank}x{suit}x{duplicate} draw {hand}: {p} < {last}");
                last = p;
            }
        }
    }

    #[test]
    fn test_random_decks_sum_to_one() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let rank = rng.gen_range(5..=20);
            let suit = rng.gen_range(1..=8);
            let duplicate = rng.gen_range(1..=4);
            let hand = rng.gen_range(1..=9u32.min(rank * suit * duplicate));
            let deck = DeckParameters::new(rank, suit, duplicate, hand);
            for overlap in [Overlap::Exclusive, Overlap::Raw] {
                let p = probabilities(&deck, overlap);
                assert!(p.iter().all(|v| v.is_finite()), "{deck:?}");
                assert_close(1.0, p.iter().sum(), 1e-6);
            }
        }
    }

    #[test]
    fn test_distribution_order() {
        let results = distribution(&DeckParameters::STANDARD, Overlap::Exclusive);
        let names: Vec<_> = results.iter().map(|r| r.name).collect();
        assert_eq!(
            vec![
                "Royal Straight Flush",
                "Straight Flush",
                "Four Card",
                "Full House",
                "Flush",
                "Straight",
                "Three Card",
                "Two Pair",
                "One Pair",
                "High Card",
            ],
            names
        );
    }
}
