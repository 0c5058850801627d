use bingo_domain::board::Board;
use bingo_domain::score::ScoreState;
use serde::Serialize;

/// What the home screen needs after launch or foregrounding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub score: ScoreState,
}
