use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeckError {
    #[error("{0} must be at least 1")]
    ZeroParameter(&'static str),

    #[error("cannot draw {hand} cards from a deck of {deck}")]
    HandExceedsDeck { hand: u32, deck: u64 },

    #[error("{hands} hands is over the enumeration limit of {limit}")]
    EnumerationTooLarge { hands: f64, limit: f64 },

    #[error("enumeration holds at most {max} cards per hand, got {hand}")]
    HandTooLarge { hand: u32, max: usize },

    #[error("enumeration supports at most {max} ranks, got {rank}")]
    TooManyRanks { rank: u32, max: usize },
}
