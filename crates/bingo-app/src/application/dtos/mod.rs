mod bingo_dto;
mod session_dto;

pub use bingo_dto::{BingoOutcome, ToggleOutcome};
pub use session_dto::SessionSnapshot;
