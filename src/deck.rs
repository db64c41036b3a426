use serde::Serialize;

use crate::error::DeckError;

/// Shape of a generalized deck and how many cards get drawn from it.
///
/// Every (rank, suit) card exists `duplicate` times, each copy a distinct
/// physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DeckParameters {
    pub rank: u32,
    pub suit: u32,
    pub duplicate: u32,
    pub hand_size: u32,
}

impl Default for DeckParameters {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DeckParameters {
    /// 52 cards, five drawn.
    pub const STANDARD: DeckParameters = DeckParameters {
        rank: 13,
        suit: 4,
        duplicate: 1,
        hand_size: 5,
    };

    pub fn new(rank: u32, suit: u32, duplicate: u32, hand_size: u32) -> Self {
        Self {
            rank,
            suit,
            duplicate,
            hand_size,
        }
    }

    pub fn deck_size(&self) -> u64 {
        self.rank as u64 * self.suit as u64 * self.duplicate as u64
    }

    /// Cards sharing one rank.
    pub fn same_rank(&self) -> u64 {
        self.suit as u64 * self.duplicate as u64
    }

    /// Cards sharing one suit.
    pub fn same_suit(&self) -> u64 {
        self.rank as u64 * self.duplicate as u64
    }

    /// Rejects decks that can't be dealt from. The engine itself never
    /// calls this.
    pub fn validate(&self) -> Result<(), DeckError> {
        for (name, value) in [
            ("rank", self.rank),
            ("suit", self.suit),
            ("duplicate", self.duplicate),
            ("hand size", self.hand_size),
        ] {
            if value == 0 {
                return Err(DeckError::ZeroParameter(name));
            }
        }
        if self.hand_size as u64 > self.deck_size() {
            return Err(DeckError::HandExceedsDeck {
                hand: self.hand_size,
                deck: self.deck_size(),
            });
        }
        if self.rank < 5 {
            log::warn!(
                "only {} ranks, straight counts assume at least 5",
                self.rank
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let standard = DeckParameters::default();
        assert_eq!(52, standard.deck_size());
        assert_eq!(4, standard.same_rank());
        assert_eq!(13, standard.same_suit());

        let doubled = DeckParameters::new(13, 4, 2, 7);
        assert_eq!(104, doubled.deck_size());
        assert_eq!(8, doubled.same_rank());
        assert_eq!(26, doubled.same_suit());
    }

    #[test]
    fn test_validate() {
        assert_eq!(Ok(()), DeckParameters::STANDARD.validate());
        assert_eq!(Ok(()), DeckParameters::new(3, 1, 1, 3).validate());
        assert_eq!(
            Err(DeckError::ZeroParameter("duplicate")),
            DeckParameters::new(13, 4, 0, 5).validate()
        );
        assert_eq!(
            Err(DeckError::ZeroParameter("hand size")),
            DeckParameters::new(13, 4, 1, 0).validate()
        );
        assert_eq!(
            Err(DeckError::HandExceedsDeck { hand: 5, deck: 4 }),
            DeckParameters::new(2, 2, 1, 5).validate()
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&DeckParameters::STANDARD).unwrap();
        assert_eq!(
            r#"{"rank":13,"suit":4,"duplicate":1,"hand_size":5}"#,
            json
        );
    }
}
