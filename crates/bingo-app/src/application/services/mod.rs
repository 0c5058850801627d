mod attendance_service;
mod board_service;
mod config_service;
mod lifecycle;
mod profile_service;
mod score_service;
mod score_sync_service;
mod task_service;


pub use attendance_service::AttendanceService;
pub use board_service::BoardService;
pub use config_service::{AppConfig, ConfigService, LogLevel, CONFIG_FILE_NAME, DEFAULT_PRAISE_TITLE};
pub use lifecycle::LifecycleCoordinator;
pub use profile_service::ProfileService;
pub use score_service::ScoreService;
pub use score_sync_service::ScoreSyncService;
pub use task_service::TaskService;
