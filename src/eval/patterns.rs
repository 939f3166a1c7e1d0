//! Pattern scores for move evaluation
//!
//! A fixed table maps `(run length, open ends)` on one axis to a score.
//! The AI also reads the opponent's score through a threat level that
//! shifts its attack/defense balance.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Completing a claimable five; dominates every other score
    pub const WIN: i32 = 100_000;
    /// Illegal target (occupied, or forbidden for Black)
    pub const ILLEGAL: i32 = i32::MIN;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Closed three
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Closed two
    pub const CLOSED_TWO: i32 = 10;
    /// Lone stone with both sides free
    pub const OPEN_ONE: i32 = 5;
}

/// Score of a single axis given its run length and open ends (0-2).
/// Combinations outside the table score 0.
#[inline]
pub fn line_score(run: usize, open_ends: u8) -> i32 {
    match (run, open_ends) {
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}

/// Classify an opponent score into a threat level 0-5
#[inline]
pub fn threat_level(score: i32) -> u8 {
    match score {
        s if s >= 10_000 => 5,
        s if s >= 1_000 => 4,
        s if s >= 500 => 3,
        s if s >= 100 => 2,
        s if s >= 50 => 1,
        _ => 0,
    }
}

/// `(attack, defense)` weights for a threat level
#[inline]
pub fn weights_for_threat(level: u8) -> (f64, f64) {
    match level {
        l if l >= 3 => (0.8, 3.0),
        2 => (0.9, 2.0),
        1 => (1.0, 1.3),
        _ => (1.0, 1.0),
    }
}

/// Weight a score, keeping illegal targets at negative infinity
#[inline]
pub fn weighted(score: i32, weight: f64) -> f64 {
    if score == PatternScore::ILLEGAL {
        f64::NEG_INFINITY
    } else {
        score as f64 * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::OPEN_FOUR * 4);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::CLOSED_TWO > PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(4, 2), 10_000);
        assert_eq!(line_score(4, 1), 1_000);
        assert_eq!(line_score(3, 2), 500);
        assert_eq!(line_score(3, 1), 100);
        assert_eq!(line_score(2, 2), 50);
        assert_eq!(line_score(2, 1), 10);
        assert_eq!(line_score(1, 2), 5);
        assert_eq!(line_score(1, 1), 0);
        assert_eq!(line_score(4, 0), 0);
        assert_eq!(line_score(3, 0), 0);
    }

    #[test]
    fn test_threat_levels() {
        assert_eq!(threat_level(PatternScore::WIN), 5);
        assert_eq!(threat_level(10_000), 5);
        assert_eq!(threat_level(9_999), 4);
        assert_eq!(threat_level(1_000), 4);
        assert_eq!(threat_level(500), 3);
        assert_eq!(threat_level(100), 2);
        assert_eq!(threat_level(50), 1);
        assert_eq!(threat_level(49), 0);
        assert_eq!(threat_level(PatternScore::ILLEGAL), 0);
    }

    #[test]
    fn test_weights() {
        assert_eq!(weights_for_threat(5), (0.8, 3.0));
        assert_eq!(weights_for_threat(3), (0.8, 3.0));
        assert_eq!(weights_for_threat(2), (0.9, 2.0));
        assert_eq!(weights_for_threat(1), (1.0, 1.3));
        assert_eq!(weights_for_threat(0), (1.0, 1.0));
    }

    #[test]
    fn test_weighted_illegal() {
        assert_eq!(weighted(PatternScore::ILLEGAL, 0.8), f64::NEG_INFINITY);
        assert_eq!(weighted(500, 3.0), 1_500.0);
    }
}
