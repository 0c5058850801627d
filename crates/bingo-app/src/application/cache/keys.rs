use bingo_domain::board::BoardSize;

pub const LAST_BINGO_SIZE_KEY: &str = "lastBingoSizeKey";
pub const LAST_RANDOMIZE_DATE: &str = "lastRandomizeDate";
pub const LAST_RESET_DAY: &str = "lastResetDay";
pub const CACHED_TOTAL_SCORE: &str = "cachedTotalScore";
pub const LOCAL_STREAK: &str = "localStreak";
pub const LOCAL_LAST_ATTENDANCE_DATE: &str = "localLastAttendanceDate";

/// `tasks_3x3`, `tasks_5x5`
pub fn tasks_key(size: BoardSize) -> String {
    format!("tasks_{}", size)
}

/// `completedTasks_3`
pub fn completed_tasks_key(size: BoardSize) -> String {
    format!("completedTasks_{}", size.dimension())
}

/// `lastBingoCount_3`
pub fn last_bingo_count_key(size: BoardSize) -> String {
    format!("lastBingoCount_{}", size.dimension())
}

/// Value recorded under [`LAST_BINGO_SIZE_KEY`]
pub fn bingo_size_key(size: BoardSize) -> String {
    format!("bingoSize_{}", size.dimension())
}
