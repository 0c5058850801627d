use bingo_domain::attendance::AttendanceOutcome;
use bingo_domain::board::Board;
use bingo_domain::score::ScoreState;
use serde::Serialize;

/// Result of one line check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BingoOutcome {
    /// Completed lines on the board now
    pub lines: u32,
    /// Change against the previously recorded line count
    pub delta: i64,
    /// Points actually applied for the line change, after clamping at zero
    pub score_delta: i64,
    /// Present when a new line triggered the attendance check
    pub attendance: Option<AttendanceOutcome>,
    pub score: ScoreState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    pub board: Board,
    pub bingo: BingoOutcome,
}
