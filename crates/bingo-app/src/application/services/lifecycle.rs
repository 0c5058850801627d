use bingo_domain::shared::DomainError;
use std::sync::Arc;
use tracing::info;

use crate::application::dtos::SessionSnapshot;
use crate::application::services::{
    AttendanceService, BoardService, ConfigService, ScoreSyncService,
};

/// Entry points for app lifecycle transitions
pub struct LifecycleCoordinator {
    config: Arc<ConfigService>,
    attendance: Arc<AttendanceService>,
    sync: Arc<ScoreSyncService>,
    boards: Arc<BoardService>,
}

impl LifecycleCoordinator {
    pub fn new(
        config: Arc<ConfigService>,
        attendance: Arc<AttendanceService>,
        sync: Arc<ScoreSyncService>,
        boards: Arc<BoardService>,
    ) -> Self {
        Self {
            config,
            attendance,
            sync,
            boards,
        }
    }

    pub async fn on_launch(&self) -> Result<SessionSnapshot, DomainError> {
        info!("App launched");
        self.refresh().await
    }

    pub async fn on_foreground(&self) -> Result<SessionSnapshot, DomainError> {
        info!("App returned to foreground");
        self.refresh().await
    }

    /// Flush the cached score upward. Returns whether the remote was raised.
    pub async fn on_background(&self) -> Result<bool, DomainError> {
        info!("App moved to background");
        self.sync.push_local_score().await
    }

    /// Daily reset, then score sync, then board sync
    async fn refresh(&self) -> Result<SessionSnapshot, DomainError> {
        let size = self.config.board_size();

        if self.attendance.daily_reset().await? {
            info!("New day started");
        }
        let score = self.sync.sync_from_remote(size).await?;
        let board = self.boards.sync_board(size, &[]).await?;

        Ok(SessionSnapshot { board, score })
    }
}
