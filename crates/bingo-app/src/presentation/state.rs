use std::sync::Arc;

use bingo_domain::ranking::RankingRepository;
use bingo_domain::remote::{RemoteCredentials, RemoteScoreStore};
use bingo_domain::shared::{Clock, UserId};
use bingo_domain::storage::KeyValueStore;
use bingo_infrastructure::persistence::Database;
use bingo_infrastructure::remote::FirestoreClient;

use crate::application::cache::LocalCache;
use crate::application::queries::RankingQueries;
use crate::application::services::{
    AttendanceService, BoardService, ConfigService, LifecycleCoordinator, ProfileService,
    ScoreService, ScoreSyncService, TaskService,
};
use crate::application::session::CurrentUser;

pub struct Runtime {
    pub db: Option<Arc<Database>>,
    /// Set when a backend project is configured
    pub firestore: Option<Arc<FirestoreClient>>,
    pub clock: Arc<dyn Clock>,
}

pub struct Stores {
    pub kv: Arc<dyn KeyValueStore>,
    pub cache: Arc<LocalCache>,
    pub remote: Arc<dyn RemoteScoreStore>,
    pub rankings: Arc<dyn RankingRepository>,
}

pub struct Services {
    pub config: Arc<ConfigService>,
    pub boards: Arc<BoardService>,
    pub tasks: Arc<TaskService>,
    pub scoring: Arc<ScoreService>,
    pub attendance: Arc<AttendanceService>,
    pub sync: Arc<ScoreSyncService>,
    pub profile: Arc<ProfileService>,
    pub lifecycle: Arc<LifecycleCoordinator>,
}

pub struct Queries {
    pub rankings: Arc<RankingQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub session: Arc<CurrentUser>,
    pub stores: Stores,
    pub services: Services,
    pub queries: Queries,
}

impl AppState {
    /// Wire services over already opened stores
    pub fn assemble(
        runtime: Runtime,
        config: Arc<ConfigService>,
        kv: Arc<dyn KeyValueStore>,
        remote: Arc<dyn RemoteScoreStore>,
        rankings: Arc<dyn RankingRepository>,
        credentials: Arc<dyn RemoteCredentials>,
    ) -> Self {
        let session = Arc::new(CurrentUser::new());
        let cache = Arc::new(LocalCache::new(kv.clone()));
        let clock = runtime.clock.clone();

        let boards = Arc::new(BoardService::new(
            cache.clone(),
            clock.clone(),
            config.praise_title(),
        ));
        let sync = Arc::new(ScoreSyncService::new(
            cache.clone(),
            remote.clone(),
            session.clone(),
        ));
        let attendance = Arc::new(AttendanceService::new(cache.clone(), sync.clone(), clock));
        let scoring = Arc::new(ScoreService::new(
            cache.clone(),
            attendance.clone(),
            sync.clone(),
        ));
        let tasks = Arc::new(TaskService::new(
            cache.clone(),
            boards.clone(),
            scoring.clone(),
            config.clone(),
        ));
        let profile = Arc::new(ProfileService::new(
            remote.clone(),
            credentials,
            session.clone(),
        ));
        let lifecycle = Arc::new(LifecycleCoordinator::new(
            config.clone(),
            attendance.clone(),
            sync.clone(),
            boards.clone(),
        ));
        let ranking_queries = Arc::new(RankingQueries::new(rankings.clone(), remote.clone()));

        Self {
            runtime,
            session,
            stores: Stores {
                kv,
                cache,
                remote,
                rankings,
            },
            services: Services {
                config,
                boards,
                tasks,
                scoring,
                attendance,
                sync,
                profile,
                lifecycle,
            },
            queries: Queries {
                rankings: ranking_queries,
            },
        }
    }

    /// Adopt a user signed in by the host, with the ID token for the backend
    pub async fn sign_in(&self, user_id: UserId, id_token: Option<String>) {
        self.services.profile.sign_in(user_id, id_token).await;
    }

    pub async fn sign_out(&self) {
        self.services.profile.sign_out().await;
    }
}
