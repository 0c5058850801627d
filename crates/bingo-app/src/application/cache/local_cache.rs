use bingo_domain::board::{BoardSize, CompletionMap};
use bingo_domain::reconciliation::ScoreSnapshot;
use bingo_domain::score::ScoreState;
use bingo_domain::shared::{format_date, parse_date, DomainError};
use bingo_domain::storage::KeyValueStore;
use bingo_domain::task::Task;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

use super::keys;

/// Typed access to the cached board and score state.
///
/// Store failures propagate. Values that no longer parse are logged and
/// read as absent, so a damaged entry falls back to its default.
pub struct LocalCache {
    store: Arc<dyn KeyValueStore>,
}

impl LocalCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), DomainError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| DomainError::Serialization(format!("{}: {}", key, e)))?;
        self.store.set(key, &raw).await
    }

    async fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        let parsed = raw.trim().parse().ok();
        if parsed.is_none() {
            warn!("Ignoring unreadable cache entry {}: {:?}", key, raw);
        }
        Ok(parsed)
    }

    async fn get_date(&self, key: &str) -> Result<Option<NaiveDate>, DomainError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            warn!("Ignoring unreadable date under {}: {:?}", key, raw);
        }
        Ok(parsed)
    }

    async fn set_date(&self, key: &str, date: NaiveDate) -> Result<(), DomainError> {
        self.store.set(key, &format_date(date)).await
    }

    // Board

    pub async fn tasks(&self, size: BoardSize) -> Result<Option<Vec<Task>>, DomainError> {
        self.get_json(&keys::tasks_key(size)).await
    }

    pub async fn set_tasks(&self, size: BoardSize, tasks: &[Task]) -> Result<(), DomainError> {
        self.set_json(&keys::tasks_key(size), tasks).await
    }

    pub async fn completion(&self, size: BoardSize) -> Result<CompletionMap, DomainError> {
        Ok(self
            .get_json(&keys::completed_tasks_key(size))
            .await?
            .unwrap_or_default())
    }

    pub async fn set_completion(
        &self,
        size: BoardSize,
        completion: &CompletionMap,
    ) -> Result<(), DomainError> {
        self.set_json(&keys::completed_tasks_key(size), completion)
            .await
    }

    pub async fn last_bingo_count(&self, size: BoardSize) -> Result<u32, DomainError> {
        Ok(self
            .get_parsed(&keys::last_bingo_count_key(size))
            .await?
            .unwrap_or(0))
    }

    pub async fn set_last_bingo_count(&self, size: BoardSize, count: u32) -> Result<(), DomainError> {
        self.store
            .set(&keys::last_bingo_count_key(size), &count.to_string())
            .await
    }

    pub async fn last_bingo_size_key(&self) -> Result<Option<String>, DomainError> {
        self.store.get(keys::LAST_BINGO_SIZE_KEY).await
    }

    pub async fn set_last_bingo_size_key(&self, value: &str) -> Result<(), DomainError> {
        self.store.set(keys::LAST_BINGO_SIZE_KEY, value).await
    }

    pub async fn last_randomize_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        self.get_date(keys::LAST_RANDOMIZE_DATE).await
    }

    pub async fn set_last_randomize_date(&self, date: NaiveDate) -> Result<(), DomainError> {
        self.set_date(keys::LAST_RANDOMIZE_DATE, date).await
    }

    pub async fn clear_last_randomize_date(&self) -> Result<(), DomainError> {
        self.store.remove(keys::LAST_RANDOMIZE_DATE).await
    }

    pub async fn last_reset_day(&self) -> Result<Option<NaiveDate>, DomainError> {
        self.get_date(keys::LAST_RESET_DAY).await
    }

    pub async fn set_last_reset_day(&self, date: NaiveDate) -> Result<(), DomainError> {
        self.set_date(keys::LAST_RESET_DAY, date).await
    }

    // Score

    pub async fn cached_total_score(&self) -> Result<i64, DomainError> {
        Ok(self
            .get_parsed(keys::CACHED_TOTAL_SCORE)
            .await?
            .unwrap_or(0))
    }

    pub async fn set_cached_total_score(&self, total: i64) -> Result<(), DomainError> {
        self.store
            .set(keys::CACHED_TOTAL_SCORE, &total.to_string())
            .await
    }

    pub async fn local_streak(&self) -> Result<u32, DomainError> {
        Ok(self.get_parsed(keys::LOCAL_STREAK).await?.unwrap_or(0))
    }

    pub async fn set_local_streak(&self, streak: u32) -> Result<(), DomainError> {
        self.store
            .set(keys::LOCAL_STREAK, &streak.to_string())
            .await
    }

    pub async fn local_last_attendance_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        self.get_date(keys::LOCAL_LAST_ATTENDANCE_DATE).await
    }

    pub async fn set_local_last_attendance_date(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<(), DomainError> {
        match date {
            Some(date) => self.set_date(keys::LOCAL_LAST_ATTENDANCE_DATE, date).await,
            None => self.store.remove(keys::LOCAL_LAST_ATTENDANCE_DATE).await,
        }
    }

    /// Fields shared with the remote document
    pub async fn score_snapshot(&self) -> Result<ScoreSnapshot, DomainError> {
        Ok(ScoreSnapshot {
            total_score: self.cached_total_score().await?,
            streak: self.local_streak().await?,
            last_attendance_date: self.local_last_attendance_date().await?,
        })
    }

    pub async fn write_snapshot(&self, snapshot: &ScoreSnapshot) -> Result<(), DomainError> {
        self.set_cached_total_score(snapshot.total_score).await?;
        self.set_local_streak(snapshot.streak).await?;
        self.set_local_last_attendance_date(snapshot.last_attendance_date)
            .await
    }

    /// Score state as shown for a board of `size`
    pub async fn score_state(&self, size: BoardSize) -> Result<ScoreState, DomainError> {
        let snapshot = self.score_snapshot().await?;
        Ok(ScoreState {
            total_score: snapshot.total_score,
            bingo_count: self.last_bingo_count(size).await?,
            streak: snapshot.streak,
            last_attendance_date: snapshot.last_attendance_date,
        })
    }
}
