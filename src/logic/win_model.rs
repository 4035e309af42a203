//! Win model: rank-based win probability and a cosmetic final score.

use rand::Rng;

/// Scale of the logistic curve (Elo convention).
pub const ELO_BASE: f64 = 400.0;

/// Lowest score a simulated draw can produce.
pub const MIN_SCORE: i32 = 0;
/// Highest score a simulated draw can produce.
pub const MAX_SCORE: i32 = 120;

/// Chance of the weaker team winning, with the default base of 400.
///
/// Lower rank means stronger, so `weaker_rank >= stronger_rank` for a well-formed call.
/// Equal ranks give 0.5; a larger gap gives the weaker side less.
pub fn win_probability(weaker_rank: u32, stronger_rank: u32) -> f64 {
    win_probability_with_base(weaker_rank, stronger_rank, ELO_BASE)
}

/// `1 / (1 + 10^((weaker - stronger) / base))`.
pub fn win_probability_with_base(weaker_rank: u32, stronger_rank: u32, base: f64) -> f64 {
    let difference = f64::from(weaker_rank) - f64::from(stronger_rank);
    1.0 / (1.0 + 10f64.powf(difference / base))
}

/// Draw two scores in `[MIN_SCORE, MAX_SCORE]` and order them as (winner, loser).
pub fn simulate_score<R: Rng + ?Sized>(rng: &mut R) -> (i32, i32) {
    let first = rng.gen_range(MIN_SCORE..=MAX_SCORE);
    let second = rng.gen_range(MIN_SCORE..=MAX_SCORE);
    resolve_score(first, second)
}

/// Order two drawn scores as (winner, loser). A tie takes one point off the loser,
/// so `(0, 0)` becomes `(0, -1)`.
pub fn resolve_score(first: i32, second: i32) -> (i32, i32) {
    if first > second {
        (first, second)
    } else if first == second {
        (second, first - 1)
    } else {
        (second, first)
    }
}
