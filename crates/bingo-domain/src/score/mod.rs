use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points awarded (or taken back) per completed line
pub const POINTS_PER_LINE: i64 = 100;

/// Score and attendance state shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub total_score: i64,
    pub bingo_count: u32,
    pub streak: u32,
    pub last_attendance_date: Option<NaiveDate>,
}

impl ScoreState {
    /// Add `points` (possibly negative) without letting the total drop below zero.
    /// Returns the change actually applied.
    pub fn apply_points(&mut self, points: i64) -> i64 {
        let before = self.total_score;
        self.total_score = before.saturating_add(points).max(0);
        self.total_score - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_points_gain_and_loss() {
        let mut score = ScoreState::default();
        assert_eq!(score.apply_points(300), 300);
        assert_eq!(score.apply_points(-100), -100);
        assert_eq!(score.total_score, 200);
    }

    #[test]
    fn test_apply_points_never_below_zero() {
        let mut score = ScoreState {
            total_score: 50,
            ..Default::default()
        };
        assert_eq!(score.apply_points(-200), -50);
        assert_eq!(score.total_score, 0);
    }
}
