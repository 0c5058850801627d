use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::reconciliation::ScoreSnapshot;
use crate::shared::{DomainError, UserId};

/// Per-user document kept by the backend for the leaderboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserScoreDocument {
    pub display_name: String,
    pub total_score: i64,
    pub bingo_count: u32,
    pub streak: u32,
    pub last_attendance_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserScoreDocument {
    /// Fresh document for a newly registered user
    pub fn new_user(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            total_score: self.total_score,
            streak: self.streak,
            last_attendance_date: self.last_attendance_date,
        }
    }
}

/// Partial update: only `Some` fields are written.
/// `last_attendance_date: Some(None)` clears the remote value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreUpdate {
    pub display_name: Option<String>,
    pub total_score: Option<i64>,
    pub bingo_count: Option<u32>,
    pub streak: Option<u32>,
    pub last_attendance_date: Option<Option<NaiveDate>>,
}

impl ScoreUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn total_score(mut self, total: i64) -> Self {
        self.total_score = Some(total);
        self
    }

    pub fn bingo_count(mut self, count: u32) -> Self {
        self.bingo_count = Some(count);
        self
    }

    pub fn streak(mut self, streak: u32) -> Self {
        self.streak = Some(streak);
        self
    }

    pub fn last_attendance_date(mut self, date: Option<NaiveDate>) -> Self {
        self.last_attendance_date = Some(date);
        self
    }

    /// All merged fields of a snapshot
    pub fn from_snapshot(snapshot: &ScoreSnapshot) -> Self {
        Self::new()
            .total_score(snapshot.total_score)
            .streak(snapshot.streak)
            .last_attendance_date(snapshot.last_attendance_date)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply onto a document, as the backend would
    pub fn apply_to(&self, document: &mut UserScoreDocument) {
        if let Some(name) = &self.display_name {
            document.display_name = name.clone();
        }
        if let Some(total) = self.total_score {
            document.total_score = total;
        }
        if let Some(count) = self.bingo_count {
            document.bingo_count = count;
        }
        if let Some(streak) = self.streak {
            document.streak = streak;
        }
        if let Some(date) = self.last_attendance_date {
            document.last_attendance_date = date;
        }
    }
}

/// Remote per-user score document store.
/// Implementations stamp `updated_at` on every write.
#[async_trait]
pub trait RemoteScoreStore: Send + Sync {
    /// `Ok(None)` when the user has no document yet
    async fn fetch_user(&self, user_id: &UserId)
        -> Result<Option<UserScoreDocument>, DomainError>;

    async fn create_user(
        &self,
        user_id: &UserId,
        document: &UserScoreDocument,
    ) -> Result<(), DomainError>;

    /// Fails with `NotFound` when the document does not exist
    async fn update_user(&self, user_id: &UserId, update: &ScoreUpdate) -> Result<(), DomainError>;
}

/// Holder of the signed-in user's backend credential
#[async_trait]
pub trait RemoteCredentials: Send + Sync {
    /// `None` clears the credential
    async fn set_id_token(&self, token: Option<String>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut doc = UserScoreDocument {
            display_name: "mina".to_string(),
            total_score: 300,
            bingo_count: 2,
            streak: 4,
            last_attendance_date: NaiveDate::from_ymd_opt(2025, 1, 2),
            updated_at: None,
        };

        ScoreUpdate::new().total_score(450).apply_to(&mut doc);
        assert_eq!(doc.total_score, 450);
        assert_eq!(doc.streak, 4);
        assert_eq!(doc.display_name, "mina");

        ScoreUpdate::new().last_attendance_date(None).apply_to(&mut doc);
        assert_eq!(doc.last_attendance_date, None);
    }

    #[test]
    fn test_empty_update() {
        assert!(ScoreUpdate::new().is_empty());
        assert!(!ScoreUpdate::new().streak(1).is_empty());
    }

    #[test]
    fn test_from_snapshot_carries_attendance() {
        let snapshot = ScoreSnapshot {
            total_score: 10,
            streak: 2,
            last_attendance_date: None,
        };
        let update = ScoreUpdate::from_snapshot(&snapshot);
        assert_eq!(update.total_score, Some(10));
        assert_eq!(update.streak, Some(2));
        assert_eq!(update.last_attendance_date, Some(None));
        assert_eq!(update.bingo_count, None);
    }
}
