use bingo_domain::attendance::{evaluate_attendance, AttendanceOutcome};
use bingo_domain::board::{BoardSize, CompletionMap};
use bingo_domain::shared::{Clock, DomainError};
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::cache::LocalCache;
use crate::application::services::ScoreSyncService;

/// Daily attendance streak and the midnight reset
pub struct AttendanceService {
    cache: Arc<LocalCache>,
    sync: Arc<ScoreSyncService>,
    clock: Arc<dyn Clock>,
}

impl AttendanceService {
    pub fn new(cache: Arc<LocalCache>, sync: Arc<ScoreSyncService>, clock: Arc<dyn Clock>) -> Self {
        Self { cache, sync, clock }
    }

    /// True until attendance has been recorded today
    pub async fn needs_attendance(&self) -> Result<bool, DomainError> {
        Ok(self.cache.local_last_attendance_date().await? != Some(self.clock.today()))
    }

    /// Record today's attendance once and award the streak bonus.
    ///
    /// The remote document is merged into the cache first, so attendance
    /// already recorded on another device counts and the bonus lands on the
    /// higher total. The remote then receives the new total, streak and date.
    pub async fn check_attendance(&self) -> Result<AttendanceOutcome, DomainError> {
        let remote_ready = self.sync.merge_remote().await?;
        let outcome = self.record_attendance().await?;
        if remote_ready && matches!(outcome, AttendanceOutcome::Recorded { .. }) {
            self.sync.push_cached(None).await?;
        }
        Ok(outcome)
    }

    /// Cache-only part of [`Self::check_attendance`]; the caller has merged
    /// the remote and owns the push
    pub(crate) async fn record_attendance(&self) -> Result<AttendanceOutcome, DomainError> {
        let today = self.clock.today();
        let last = self.cache.local_last_attendance_date().await?;
        let streak = self.cache.local_streak().await?;

        let outcome = evaluate_attendance(last, streak, today);
        let AttendanceOutcome::Recorded { streak, bonus, date } = outcome else {
            debug!("Attendance already recorded for {}", today);
            return Ok(outcome);
        };

        let total = self.cache.cached_total_score().await?.saturating_add(bonus);
        self.cache.set_cached_total_score(total).await?;
        self.cache.set_local_last_attendance_date(Some(date)).await?;
        self.cache.set_local_streak(streak).await?;

        info!(
            "Attendance recorded: day {} of streak, +{} (total {})",
            streak, bonus, total
        );

        Ok(outcome)
    }

    /// Start a new day: clear completions and line counts on every board
    /// size and force a reshuffle. The score is kept. Returns whether a reset
    /// happened.
    pub async fn daily_reset(&self) -> Result<bool, DomainError> {
        let today = self.clock.today();
        if self.cache.last_reset_day().await? == Some(today) {
            return Ok(false);
        }

        for size in BoardSize::ALL {
            self.cache
                .set_completion(size, &CompletionMap::new())
                .await?;
            self.cache.set_last_bingo_count(size, 0).await?;
        }
        self.cache.set_last_reset_day(today).await?;
        self.cache.clear_last_randomize_date().await?;

        let cached_total = self.cache.cached_total_score().await?;
        info!("Daily reset for {} (score kept at {})", today, cached_total);

        if cached_total > 0 {
            self.sync.push_local_score().await?;
        }

        Ok(true)
    }
}
