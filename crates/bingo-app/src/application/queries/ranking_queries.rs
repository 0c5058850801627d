use bingo_domain::ranking::{RankingEntry, RankingRepository, DEFAULT_RANKING_LIMIT};
use bingo_domain::remote::RemoteScoreStore;
use bingo_domain::shared::UserId;
use std::sync::Arc;
use tracing::warn;

/// Leaderboard reads. Failures are logged and read as "no data".
pub struct RankingQueries {
    rankings: Arc<dyn RankingRepository>,
    users: Arc<dyn RemoteScoreStore>,
}

impl RankingQueries {
    pub fn new(rankings: Arc<dyn RankingRepository>, users: Arc<dyn RemoteScoreStore>) -> Self {
        Self { rankings, users }
    }

    /// Highest scores first; `None` uses the default limit of 20
    pub async fn top_rankings(&self, limit: Option<u32>) -> Vec<RankingEntry> {
        let limit = limit.unwrap_or(DEFAULT_RANKING_LIMIT);
        match self.rankings.top_by_score(limit).await {
            Ok(users) => RankingEntry::rank_ordered(users),
            Err(e) => {
                warn!("Failed to load rankings: {}", e);
                Vec::new()
            }
        }
    }

    /// The user's own row; rank is one more than the number of users with a
    /// strictly higher score
    pub async fn my_ranking(&self, user_id: &UserId) -> Option<RankingEntry> {
        let document = match self.users.fetch_user(user_id).await {
            Ok(Some(document)) => document,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to load ranking for {}: {}", user_id, e);
                return None;
            }
        };

        match self
            .rankings
            .count_with_score_above(document.total_score)
            .await
        {
            Ok(higher) => Some(RankingEntry::new(
                user_id.clone(),
                higher.saturating_add(1),
                &document,
            )),
            Err(e) => {
                warn!("Failed to count higher scores for {}: {}", user_id, e);
                None
            }
        }
    }
}
