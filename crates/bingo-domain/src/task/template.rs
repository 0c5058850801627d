use super::Task;
use crate::board::BoardSize;

/// Starter tasks for a fresh board: one per non-center cell, titled by number
pub fn default_tasks(size: BoardSize) -> Vec<Task> {
    (1..=size.task_capacity() as i64)
        .map(|id| Task::new(id, id.to_string()))
        .collect()
}
