use async_trait::async_trait;
use bingo_domain::ranking::RankingRepository;
use bingo_domain::remote::{RemoteCredentials, RemoteScoreStore, ScoreUpdate, UserScoreDocument};
use bingo_domain::shared::{DomainError, UserId};

/// Stand-in used when no backend project is configured.
/// Every call fails with a recoverable `Remote` error.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRemoteStore;

fn offline() -> DomainError {
    DomainError::Remote("Remote store is not configured".to_string())
}

#[async_trait]
impl RemoteScoreStore for OfflineRemoteStore {
    async fn fetch_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<UserScoreDocument>, DomainError> {
        Err(offline())
    }

    async fn create_user(
        &self,
        _user_id: &UserId,
        _document: &UserScoreDocument,
    ) -> Result<(), DomainError> {
        Err(offline())
    }

    async fn update_user(
        &self,
        _user_id: &UserId,
        _update: &ScoreUpdate,
    ) -> Result<(), DomainError> {
        Err(offline())
    }
}

#[async_trait]
impl RankingRepository for OfflineRemoteStore {
    async fn top_by_score(
        &self,
        _limit: u32,
    ) -> Result<Vec<(UserId, UserScoreDocument)>, DomainError> {
        Err(offline())
    }

    async fn count_with_score_above(&self, _total_score: i64) -> Result<u32, DomainError> {
        Err(offline())
    }
}

#[async_trait]
impl RemoteCredentials for OfflineRemoteStore {
    async fn set_id_token(&self, _token: Option<String>) {}
}
