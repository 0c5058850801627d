use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bonus for the n-th consecutive day, flat from day six on
pub fn streak_bonus(streak: u32) -> i64 {
    match streak {
        0 => 0,
        1 => 50,
        2 => 60,
        3 => 70,
        4 => 80,
        5 => 90,
        _ => 100,
    }
}

/// Result of an attendance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceOutcome {
    /// Attendance was already recorded today; nothing changes
    AlreadyRecorded { streak: u32 },
    /// First qualifying event of the day
    Recorded {
        streak: u32,
        bonus: i64,
        date: NaiveDate,
    },
}

impl AttendanceOutcome {
    pub fn streak(&self) -> u32 {
        match self {
            AttendanceOutcome::AlreadyRecorded { streak } => *streak,
            AttendanceOutcome::Recorded { streak, .. } => *streak,
        }
    }

    pub fn bonus(&self) -> i64 {
        match self {
            AttendanceOutcome::AlreadyRecorded { .. } => 0,
            AttendanceOutcome::Recorded { bonus, .. } => *bonus,
        }
    }
}

/// Decide today's attendance from the last recorded date.
///
/// Yesterday extends the streak, today is a no-op, anything else (a gap, no
/// history, or a date from the future) starts over at day one.
pub fn evaluate_attendance(
    last_attendance: Option<NaiveDate>,
    current_streak: u32,
    today: NaiveDate,
) -> AttendanceOutcome {
    if last_attendance == Some(today) {
        return AttendanceOutcome::AlreadyRecorded {
            streak: current_streak,
        };
    }

    let streak = match (last_attendance, today.pred_opt()) {
        (Some(last), Some(yesterday)) if last == yesterday => current_streak.saturating_add(1),
        _ => 1,
    };

    AttendanceOutcome::Recorded {
        streak,
        bonus: streak_bonus(streak),
        date: today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    #[test]
    fn test_streak_bonus_table() {
        let expected = [(1, 50), (2, 60), (3, 70), (4, 80), (5, 90), (6, 100), (7, 100), (365, 100)];
        for (streak, bonus) in expected {
            assert_eq!(streak_bonus(streak), bonus, "streak day {streak}");
        }
    }

    #[test]
    fn test_first_attendance_starts_streak() {
        let outcome = evaluate_attendance(None, 0, day(10));
        assert_eq!(
            outcome,
            AttendanceOutcome::Recorded {
                streak: 1,
                bonus: 50,
                date: day(10)
            }
        );
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let outcome = evaluate_attendance(Some(day(9)), 5, day(10));
        assert_eq!(outcome.streak(), 6);
        assert_eq!(outcome.bonus(), 100);
    }

    #[test]
    fn test_gap_resets_streak() {
        let outcome = evaluate_attendance(Some(day(7)), 4, day(10));
        assert_eq!(outcome.streak(), 1);
        assert_eq!(outcome.bonus(), 50);
    }

    #[test]
    fn test_same_day_is_noop() {
        let outcome = evaluate_attendance(Some(day(10)), 3, day(10));
        assert_eq!(outcome, AttendanceOutcome::AlreadyRecorded { streak: 3 });
        assert_eq!(outcome.bonus(), 0);
    }

    #[test]
    fn test_month_boundary_counts_as_consecutive() {
        let last = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(evaluate_attendance(Some(last), 2, today).streak(), 3);
    }
}
