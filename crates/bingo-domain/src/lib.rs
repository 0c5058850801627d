// Domain layer - Pure business logic
// No dependencies on infrastructure or application layers

pub mod attendance;
pub mod board;
pub mod ranking;
pub mod reconciliation;
pub mod remote;
pub mod score;
pub mod shared;
pub mod storage;
pub mod task;

// Re-exports for convenience
pub use board::{Board, BoardSize, CompletionMap};
pub use shared::{Clock, DomainError, UserId};
pub use task::Task;
