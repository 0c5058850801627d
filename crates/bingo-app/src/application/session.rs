use bingo_domain::shared::{DomainError, UserId};
use tokio::sync::RwLock;
use tracing::info;

/// The signed-in user, if any. The credential flow lives with the host.
#[derive(Default)]
pub struct CurrentUser {
    user: RwLock<Option<UserId>>,
}

impl CurrentUser {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, user_id: UserId) {
        info!("User signed in: {}", user_id);
        *self.user.write().await = Some(user_id);
    }

    pub async fn sign_out(&self) {
        if let Some(user_id) = self.user.write().await.take() {
            info!("User signed out: {}", user_id);
        }
    }

    pub async fn get(&self) -> Option<UserId> {
        self.user.read().await.clone()
    }

    pub async fn require(&self) -> Result<UserId, DomainError> {
        self.get()
            .await
            .ok_or_else(|| DomainError::Unauthenticated("No user is signed in".to_string()))
    }
}
