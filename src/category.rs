use serde::Serialize;

/// Hand categories, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    RoyalStraightFlush,
    StraightFlush,
    FourCard,
    FullHouse,
    Flush,
    Straight,
    ThreeCard,
    TwoPair,
    OnePair,
    HighCard,
}

impl Category {
    pub const COUNT: usize = 10;

    /// Presentation order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::RoyalStraightFlush,
        Category::StraightFlush,
        Category::FourCard,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeCard,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub const fn idx(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::RoyalStraightFlush => "Royal Straight Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourCard => "Four Card",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeCard => "Three Card",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: Category,
    pub name: &'static str,
    pub probability: f64,
}

impl CategoryResult {
    pub fn new(category: Category, probability: f64) -> Self {
        Self {
            category,
            name: category.label(),
            probability,
        }
    }
}

/// Pairs per-category values (indexed like [`Category::ALL`]) with their
/// categories.
pub fn ordered(values: [f64; Category::COUNT]) -> Vec<CategoryResult> {
    Category::ALL
        .iter()
        .zip(values)
        .map(|(&category, probability)| CategoryResult::new(category, probability))
        .collect()
}
