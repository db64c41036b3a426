//! Counting primitives over `f64`.
//!
//! Everything stays in floating point so intermediate quotients never
//! truncate, and degenerate inputs show up as 0, negative or NaN values
//! instead of panics.

/// Falling factorial `n * (n - 1) * ... * (n - r + 1)`.
pub fn permutation(n: f64, r: u32) -> f64 {
    (0..r).fold(1.0, |acc, i| acc * (n - i as f64))
}

/// Binomial coefficient `P(n, r) / r!`. Choosing a negative number of
/// cards has no ways.
pub fn combination(n: f64, r: i64) -> f64 {
    if r < 0 {
        return 0.0;
    }
    let r = r as u32;
    permutation(n, r) / permutation(r as f64, r)
}

/// Ways to pick `slots` kickers one at a time from distinct unused ranks.
///
/// The `i`-th pick comes from `total - i * group` cards, since every pick
/// retires a further `group` same-rank cards. Dividing by `slots!` drops
/// the pick order.
pub fn remaining_pattern(total: f64, group: f64, slots: i64) -> f64 {
    if slots < 0 {
        return 0.0;
    }
    let slots = slots as u32;
    let ordered = (1..=slots).fold(1.0, |acc, i| {
        acc * combination(total - i as f64 * group, 1)
    });
    ordered / permutation(slots as f64, slots)
}
