//! Merge rules between the device cache and the remote user document.
//!
//! Every sync path (launch, foreground, daily reset, background flush) goes
//! through [`ScoreReconciler`] so the rules cannot drift apart:
//!
//! - total score: the larger value wins;
//! - streak and last attendance date travel together; the later date wins,
//!   and on equal dates the longer streak wins; a missing date always loses;
//! - bingo counts are per board on the device and are never merged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fields both sides keep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub total_score: i64,
    pub streak: u32,
    pub last_attendance_date: Option<NaiveDate>,
}

impl ScoreSnapshot {
    fn attendance_key(&self) -> (Option<NaiveDate>, u32) {
        (self.last_attendance_date, self.streak)
    }
}

/// What a merge decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub merged: ScoreSnapshot,
    /// Remote is behind on at least one field
    pub push_remote: bool,
    /// Local cache is behind on at least one field
    pub write_local: bool,
    /// No remote document exists
    pub remote_missing: bool,
}

pub struct ScoreReconciler;

impl ScoreReconciler {
    pub fn merge_total(local: i64, remote: i64) -> i64 {
        local.max(remote)
    }

    /// Merge local and remote snapshots.
    ///
    /// Without a remote document the local snapshot is kept as is and nothing
    /// is pushed; creating the document belongs to registration.
    pub fn reconcile(local: &ScoreSnapshot, remote: Option<&ScoreSnapshot>) -> Reconciliation {
        let Some(remote) = remote else {
            return Reconciliation {
                merged: local.clone(),
                push_remote: false,
                write_local: false,
                remote_missing: true,
            };
        };

        let attendance_source = if local.attendance_key() >= remote.attendance_key() {
            local
        } else {
            remote
        };

        let merged = ScoreSnapshot {
            total_score: Self::merge_total(local.total_score, remote.total_score),
            streak: attendance_source.streak,
            last_attendance_date: attendance_source.last_attendance_date,
        };

        Reconciliation {
            push_remote: merged != *remote,
            write_local: merged != *local,
            merged,
            remote_missing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total: i64, streak: u32, day: Option<u32>) -> ScoreSnapshot {
        ScoreSnapshot {
            total_score: total,
            streak,
            last_attendance_date: day.map(|d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap()),
        }
    }

    #[test]
    fn test_total_is_max_of_both_sides() {
        for (local, remote) in [(0, 0), (500, 120), (120, 500), (300, 300), (0, 990)] {
            let result = ScoreReconciler::reconcile(
                &snapshot(local, 1, Some(1)),
                Some(&snapshot(remote, 1, Some(1))),
            );
            assert_eq!(result.merged.total_score, local.max(remote));
        }
    }

    #[test]
    fn test_local_ahead_pushes_remote() {
        let result =
            ScoreReconciler::reconcile(&snapshot(700, 3, Some(5)), Some(&snapshot(400, 2, Some(4))));
        assert_eq!(result.merged, snapshot(700, 3, Some(5)));
        assert!(result.push_remote);
        assert!(!result.write_local);
    }

    #[test]
    fn test_remote_ahead_updates_local() {
        let result =
            ScoreReconciler::reconcile(&snapshot(100, 1, Some(2)), Some(&snapshot(900, 4, Some(5))));
        assert_eq!(result.merged, snapshot(900, 4, Some(5)));
        assert!(!result.push_remote);
        assert!(result.write_local);
    }

    #[test]
    fn test_mixed_fields_merge_independently() {
        // Local has the higher score, remote saw the later attendance
        let result =
            ScoreReconciler::reconcile(&snapshot(800, 1, Some(3)), Some(&snapshot(600, 2, Some(4))));
        assert_eq!(result.merged, snapshot(800, 2, Some(4)));
        assert!(result.push_remote);
        assert!(result.write_local);
    }

    #[test]
    fn test_same_date_prefers_longer_streak() {
        let result =
            ScoreReconciler::reconcile(&snapshot(0, 2, Some(4)), Some(&snapshot(0, 5, Some(4))));
        assert_eq!(result.merged.streak, 5);
    }

    #[test]
    fn test_missing_date_loses() {
        let result = ScoreReconciler::reconcile(&snapshot(0, 9, None), Some(&snapshot(0, 1, Some(1))));
        assert_eq!(result.merged.streak, 1);
        assert_eq!(result.merged.last_attendance_date, snapshot(0, 1, Some(1)).last_attendance_date);
    }

    #[test]
    fn test_missing_remote_keeps_local() {
        let local = snapshot(350, 2, Some(9));
        let result = ScoreReconciler::reconcile(&local, None);
        assert_eq!(result.merged, local);
        assert!(result.remote_missing);
        assert!(!result.push_remote);
        assert!(!result.write_local);
    }

    #[test]
    fn test_identical_sides_need_no_writes() {
        let side = snapshot(420, 3, Some(7));
        let result = ScoreReconciler::reconcile(&side, Some(&side));
        assert!(!result.push_remote);
        assert!(!result.write_local);
    }
}
