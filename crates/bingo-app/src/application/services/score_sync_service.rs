use bingo_domain::board::BoardSize;
use bingo_domain::reconciliation::{Reconciliation, ScoreReconciler};
use bingo_domain::remote::{RemoteScoreStore, ScoreUpdate};
use bingo_domain::score::ScoreState;
use bingo_domain::shared::{DomainError, UserId};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::cache::LocalCache;
use crate::application::session::CurrentUser;

/// Keeps the cached score and the remote user document in step.
///
/// Local store errors propagate; remote errors are logged and leave the
/// cached values in charge.
pub struct ScoreSyncService {
    cache: Arc<LocalCache>,
    remote: Arc<dyn RemoteScoreStore>,
    session: Arc<CurrentUser>,
}

impl ScoreSyncService {
    pub fn new(
        cache: Arc<LocalCache>,
        remote: Arc<dyn RemoteScoreStore>,
        session: Arc<CurrentUser>,
    ) -> Self {
        Self {
            cache,
            remote,
            session,
        }
    }

    /// Merge the remote document into the cache and return the resulting
    /// score state for `size`. Without a signed-in user only the cache is read.
    pub async fn sync_from_remote(&self, size: BoardSize) -> Result<ScoreState, DomainError> {
        if let Some(user_id) = self.session.get().await {
            if let Some((result, _)) = self.reconcile_for(&user_id, true).await? {
                info!(
                    "Score synced for {}: total={} streak={}",
                    user_id, result.merged.total_score, result.merged.streak
                );
            }
        }
        self.cache.score_state(size).await
    }

    /// Raise the remote document to the cached values where it is behind.
    /// Returns whether a remote write happened.
    pub async fn push_local_score(&self) -> Result<bool, DomainError> {
        let Some(user_id) = self.session.get().await else {
            debug!("No signed-in user; skipping score push");
            return Ok(false);
        };

        Ok(self
            .reconcile_for(&user_id, true)
            .await?
            .map(|(_, pushed)| pushed)
            .unwrap_or(false))
    }

    /// Pull the remote document into the cache ahead of a local score
    /// change. Returns whether the remote could be read.
    ///
    /// Callers push their change with [`Self::push_cached`] only after this
    /// returned `true`; otherwise the change stays local and a later
    /// reconciliation raises the remote.
    pub async fn merge_remote(&self) -> Result<bool, DomainError> {
        let Some(user_id) = self.session.get().await else {
            return Ok(false);
        };
        Ok(self.reconcile_for(&user_id, false).await?.is_some())
    }

    /// Write the cached score, streak and attendance date to the current
    /// user's document, with the board's line count when given. Failures are
    /// logged. Returns whether the write went through.
    pub async fn push_cached(&self, bingo_count: Option<u32>) -> Result<bool, DomainError> {
        let Some(user_id) = self.session.get().await else {
            return Ok(false);
        };

        let mut update = ScoreUpdate::from_snapshot(&self.cache.score_snapshot().await?);
        if let Some(count) = bingo_count {
            update = update.bingo_count(count);
        }

        match self.remote.update_user(&user_id, &update).await {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!("Remote score update failed for {}: {}", user_id, e);
                Ok(false)
            }
        }
    }

    /// The merge and whether the remote was written; `Ok(None)` when the
    /// remote could not be read
    async fn reconcile_for(
        &self,
        user_id: &UserId,
        push: bool,
    ) -> Result<Option<(Reconciliation, bool)>, DomainError> {
        let local = self.cache.score_snapshot().await?;

        let remote = match self.remote.fetch_user(user_id).await {
            Ok(document) => document.map(|doc| doc.snapshot()),
            Err(e) => {
                warn!("Could not read remote score for {}: {}", user_id, e);
                return Ok(None);
            }
        };

        let result = ScoreReconciler::reconcile(&local, remote.as_ref());

        if result.remote_missing {
            debug!("No remote document for {}; keeping cached score", user_id);
        }

        let mut pushed = false;
        if push && result.push_remote {
            let update = ScoreUpdate::from_snapshot(&result.merged);
            match self.remote.update_user(user_id, &update).await {
                Ok(()) => {
                    pushed = true;
                    info!(
                        "Remote score raised for {} to {}",
                        user_id, result.merged.total_score
                    );
                }
                Err(e) => warn!("Remote score push failed for {}: {}", user_id, e),
            }
        }

        if result.write_local {
            self.cache.write_snapshot(&result.merged).await?;
        }

        Ok(Some((result, pushed)))
    }
}
