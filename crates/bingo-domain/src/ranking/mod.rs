use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::remote::UserScoreDocument;
use crate::shared::{DomainError, UserId};

pub const ANONYMOUS_NAME: &str = "Anonymous";
pub const DEFAULT_RANKING_LIMIT: u32 = 20;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub user_id: UserId,
    pub rank: u32,
    pub display_name: String,
    pub total_score: i64,
    pub streak: u32,
}

impl RankingEntry {
    pub fn new(user_id: UserId, rank: u32, document: &UserScoreDocument) -> Self {
        let name = document.display_name.trim();
        Self {
            user_id,
            rank,
            display_name: if name.is_empty() {
                ANONYMOUS_NAME.to_string()
            } else {
                name.to_string()
            },
            total_score: document.total_score,
            streak: document.streak,
        }
    }

    /// Assign 1-based ranks to users already ordered by score
    pub fn rank_ordered(users: Vec<(UserId, UserScoreDocument)>) -> Vec<Self> {
        users
            .into_iter()
            .enumerate()
            .map(|(index, (user_id, document))| Self::new(user_id, index as u32 + 1, &document))
            .collect()
    }
}

/// Leaderboard queries over all user documents
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// Users ordered by total score, highest first
    async fn top_by_score(
        &self,
        limit: u32,
    ) -> Result<Vec<(UserId, UserScoreDocument)>, DomainError>;

    /// Number of users with a strictly higher total score
    async fn count_with_score_above(&self, total_score: i64) -> Result<u32, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordered_assigns_positions_and_names() {
        let users = vec![
            (
                UserId::from_string("a"),
                UserScoreDocument {
                    display_name: "Jun".to_string(),
                    total_score: 900,
                    streak: 6,
                    ..Default::default()
                },
            ),
            (
                UserId::from_string("b"),
                UserScoreDocument {
                    display_name: "  ".to_string(),
                    total_score: 400,
                    streak: 1,
                    ..Default::default()
                },
            ),
        ];

        let entries = RankingEntry::rank_ordered(users);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].display_name, "Jun");
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].display_name, ANONYMOUS_NAME);
        assert_eq!(entries[1].total_score, 400);
    }
}
