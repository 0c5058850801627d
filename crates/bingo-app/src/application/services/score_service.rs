use bingo_domain::board::{BingoDelta, Board};
use bingo_domain::shared::DomainError;
use std::sync::Arc;
use tracing::info;

use crate::application::cache::LocalCache;
use crate::application::dtos::BingoOutcome;
use crate::application::services::{AttendanceService, ScoreSyncService};

/// Turns line changes on a board into points
pub struct ScoreService {
    cache: Arc<LocalCache>,
    attendance: Arc<AttendanceService>,
    sync: Arc<ScoreSyncService>,
}

impl ScoreService {
    pub fn new(
        cache: Arc<LocalCache>,
        attendance: Arc<AttendanceService>,
        sync: Arc<ScoreSyncService>,
    ) -> Self {
        Self {
            cache,
            attendance,
            sync,
        }
    }

    /// Compare the board's completed lines with the recorded count.
    ///
    /// A gain runs the attendance check first, then adds 100 points per new
    /// line; a loss takes 100 points per lost line, never below zero.
    ///
    /// Any line change first merges the remote document into the cache and
    /// applies on top of the merged total. The result goes out in one write
    /// together with the board's line count.
    pub async fn check_bingo(&self, board: &Board) -> Result<BingoOutcome, DomainError> {
        let size = board.size();
        let current = board.completed_lines();
        let previous = self.cache.last_bingo_count(size).await?;
        let delta = BingoDelta::new(previous, current);

        let remote_ready = if delta.lines() != 0 {
            self.sync.merge_remote().await?
        } else {
            false
        };

        let attendance = if delta.is_gain() {
            Some(self.attendance.record_attendance().await?)
        } else {
            None
        };

        let mut score = self.cache.score_state(size).await?;
        let applied = score.apply_points(delta.score_delta());
        score.bingo_count = current;

        if applied != 0 {
            self.cache.set_cached_total_score(score.total_score).await?;
        }
        self.cache.set_last_bingo_count(size, current).await?;

        if remote_ready {
            self.sync.push_cached(Some(current)).await?;
        }

        if delta.lines() != 0 {
            info!(
                "Lines on {}: {} -> {} ({:+} points, total {})",
                size, previous, current, applied, score.total_score
            );
        }

        Ok(BingoOutcome {
            lines: current,
            delta: delta.lines(),
            score_delta: applied,
            attendance,
            score,
        })
    }
}
