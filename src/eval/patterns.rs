//! Window scores for Gomoku evaluation
//!
//! A window is 5 consecutive cells on one axis. Each window contributes at
//! most one own-side score and at most one opponent score.

/// Score deltas for a single window
pub struct WindowScore;

impl WindowScore {
    /// 5 own stones
    pub const FIVE: i32 = 100_000;
    /// 4 own stones, 1 empty
    pub const FOUR: i32 = 10_000;
    /// 3 own stones, 2 empty
    pub const THREE: i32 = 1_000;
    /// 2 own stones, 3 empty
    pub const TWO: i32 = 100;

    /// 4 opponent stones, 1 empty
    pub const OPP_FOUR: i32 = -50_000;
    /// 3 opponent stones, 2 empty
    pub const OPP_THREE: i32 = -5_000;
}

/// Score a window from its content counts.
///
/// `own + opp + empty` is the window length. Mixed windows score 0 either
/// way since neither branch can match both counts.
#[inline]
pub fn window_score(own: usize, opp: usize, empty: usize) -> i32 {
    let mut score = match (own, empty) {
        (5, _) => WindowScore::FIVE,
        (4, 1) => WindowScore::FOUR,
        (3, 2) => WindowScore::THREE,
        (2, 3) => WindowScore::TWO,
        _ => 0,
    };

    score += match (opp, empty) {
        (4, 1) => WindowScore::OPP_FOUR,
        (3, 2) => WindowScore::OPP_THREE,
        _ => 0,
    };

    score
}
