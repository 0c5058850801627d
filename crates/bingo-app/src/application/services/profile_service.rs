use bingo_domain::remote::{RemoteCredentials, RemoteScoreStore, ScoreUpdate, UserScoreDocument};
use bingo_domain::shared::{DomainError, UserId};
use std::sync::Arc;
use tracing::info;

use crate::application::session::CurrentUser;

fn normalize_display_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Display name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Remote user documents and the signed-in user
pub struct ProfileService {
    remote: Arc<dyn RemoteScoreStore>,
    credentials: Arc<dyn RemoteCredentials>,
    session: Arc<CurrentUser>,
}

impl ProfileService {
    pub fn new(
        remote: Arc<dyn RemoteScoreStore>,
        credentials: Arc<dyn RemoteCredentials>,
        session: Arc<CurrentUser>,
    ) -> Self {
        Self {
            remote,
            credentials,
            session,
        }
    }

    /// Create the user's document with zeroed score fields and sign them in.
    /// A blank name is stored as is and shown as anonymous.
    pub async fn register_user(
        &self,
        user_id: UserId,
        display_name: &str,
        id_token: Option<String>,
    ) -> Result<(), DomainError> {
        self.credentials.set_id_token(id_token).await;
        let document = UserScoreDocument::new_user(display_name.trim());
        self.remote.create_user(&user_id, &document).await?;
        info!("Registered user {}", user_id);
        self.session.sign_in(user_id).await;
        Ok(())
    }

    pub async fn update_display_name(&self, user_id: &UserId, name: &str) -> Result<(), DomainError> {
        let name = normalize_display_name(name)?;
        self.remote
            .update_user(user_id, &ScoreUpdate::new().display_name(name))
            .await?;
        info!("Display name updated for {}", user_id);
        Ok(())
    }

    /// Adopt a user signed in by the host, with the ID token for the backend
    pub async fn sign_in(&self, user_id: UserId, id_token: Option<String>) {
        self.credentials.set_id_token(id_token).await;
        self.session.sign_in(user_id).await;
    }

    pub async fn sign_out(&self) {
        self.credentials.set_id_token(None).await;
        self.session.sign_out().await;
    }

    pub async fn current_user(&self) -> Option<UserId> {
        self.session.get().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_rules() {
        assert_eq!(normalize_display_name("  Jun ").unwrap(), "Jun");
        assert!(normalize_display_name("   ").is_err());
    }
}
