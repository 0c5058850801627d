use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use bingo_domain::ranking::RankingRepository;
use bingo_domain::remote::{RemoteCredentials, RemoteScoreStore};
use bingo_domain::shared::SystemClock;
use bingo_infrastructure::logging::init_logger;
use bingo_infrastructure::persistence::{Database, SqliteKeyValueStore};
use bingo_infrastructure::remote::{FirestoreClient, OfflineRemoteStore};

use crate::application::services::ConfigService;
use crate::presentation::state::{AppState, Runtime};

pub const DB_FILE_NAME: &str = "daily-bingo.db";

/// Platform data directory, e.g. `~/.local/share/daily-bingo`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("daily-bingo"))
}

/// Open everything under `data_dir` and wire the application
pub async fn build_app_state(data_dir: &Path) -> Result<AppState, Box<dyn std::error::Error>> {
    let startup_started_at = Instant::now();

    std::fs::create_dir_all(data_dir)
        .map_err(|e| format!("Failed to create app data directory: {}", e))?;

    let config = Arc::new(ConfigService::new(data_dir)?);
    init_logger(
        data_dir.join("logs"),
        Some(config.get_log_level().as_str()),
    )?;

    let db_path = data_dir.join(DB_FILE_NAME);
    let db_path_str = db_path.to_str().ok_or("Invalid database path")?;
    info!("Database path: {}", db_path_str);

    let started_at = Instant::now();
    let db = Arc::new(Database::new(db_path_str).await?);
    db.run_migrations().await?;
    info!(
        "Database ready ({}ms)",
        started_at.elapsed().as_millis()
    );

    let kv = Arc::new(SqliteKeyValueStore::new(Arc::new(db.pool().clone())));

    let (firestore, remote, rankings, credentials): (
        Option<Arc<FirestoreClient>>,
        Arc<dyn RemoteScoreStore>,
        Arc<dyn RankingRepository>,
        Arc<dyn RemoteCredentials>,
    ) = match config.remote() {
        Some(remote_config) => {
            info!("Remote project: {}", remote_config.project_id);
            let client = Arc::new(FirestoreClient::new(remote_config)?);
            let remote: Arc<dyn RemoteScoreStore> = client.clone();
            let rankings: Arc<dyn RankingRepository> = client.clone();
            let credentials: Arc<dyn RemoteCredentials> = client.clone();
            (Some(client), remote, rankings, credentials)
        }
        None => {
            warn!("No remote project configured; running offline");
            let remote: Arc<dyn RemoteScoreStore> = Arc::new(OfflineRemoteStore);
            let rankings: Arc<dyn RankingRepository> = Arc::new(OfflineRemoteStore);
            let credentials: Arc<dyn RemoteCredentials> = Arc::new(OfflineRemoteStore);
            (None, remote, rankings, credentials)
        }
    };

    let runtime = Runtime {
        db: Some(db),
        firestore,
        clock: Arc::new(SystemClock),
    };
    let state = AppState::assemble(runtime, config, kv, remote, rankings, credentials);

    info!(
        "Application state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );
    Ok(state)
}
