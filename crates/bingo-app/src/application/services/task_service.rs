use bingo_domain::board::{Board, BoardSize};
use bingo_domain::shared::DomainError;
use bingo_domain::task::{next_task_id, normalize_title, Task, PRAISE_TASK_ID};
use std::sync::Arc;
use tracing::info;

use crate::application::cache::LocalCache;
use crate::application::dtos::ToggleOutcome;
use crate::application::services::{BoardService, ConfigService, ScoreService};
use crate::application::ResultExt;

/// User edits to the task list and the completion state of cells
pub struct TaskService {
    cache: Arc<LocalCache>,
    boards: Arc<BoardService>,
    scoring: Arc<ScoreService>,
    config: Arc<ConfigService>,
}

fn ensure_editable(task_id: i64) -> Result<(), DomainError> {
    if task_id == PRAISE_TASK_ID || task_id < 0 {
        return Err(DomainError::CellNotEditable(format!(
            "Cell {} cannot be edited",
            task_id
        )));
    }
    Ok(())
}

fn task_not_found(task_id: i64) -> DomainError {
    DomainError::TaskNotFound(format!("Task {} does not exist", task_id))
}

impl TaskService {
    pub fn new(
        cache: Arc<LocalCache>,
        boards: Arc<BoardService>,
        scoring: Arc<ScoreService>,
        config: Arc<ConfigService>,
    ) -> Self {
        Self {
            cache,
            boards,
            scoring,
            config,
        }
    }

    pub async fn list_tasks(&self, size: BoardSize) -> Result<Vec<Task>, DomainError> {
        self.boards.load_tasks(size).await
    }

    pub async fn add_task(&self, size: BoardSize, title: &str) -> Result<Board, DomainError> {
        let title = normalize_title(title)?;
        let mut tasks = self.boards.load_tasks(size).await?;

        if tasks.len() >= size.task_capacity() {
            return Err(DomainError::BoardFull(format!(
                "A {} board holds at most {} tasks",
                size,
                size.task_capacity()
            )));
        }

        let id = next_task_id(&tasks);
        tasks.push(Task::new(id, title));
        self.boards.save_tasks(size, &tasks).await?;
        info!("Added task {} to {}", id, size);

        self.boards.render(size, &tasks).await
    }

    pub async fn update_task_title(
        &self,
        size: BoardSize,
        task_id: i64,
        title: &str,
    ) -> Result<Board, DomainError> {
        ensure_editable(task_id)?;
        let title = normalize_title(title)?;
        let mut tasks = self.boards.load_tasks(size).await?;

        let task = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| task_not_found(task_id))?;
        task.title = title;

        self.boards.save_tasks(size, &tasks).await?;
        self.boards.render(size, &tasks).await
    }

    /// Remove a task and its completion entry. The recorded line count is
    /// left alone; the next line check settles any difference.
    pub async fn delete_task(&self, size: BoardSize, task_id: i64) -> Result<Board, DomainError> {
        ensure_editable(task_id)?;
        let mut tasks = self.boards.load_tasks(size).await?;

        let before = tasks.len();
        tasks.retain(|task| task.id != task_id);
        if tasks.len() == before {
            return Err(task_not_found(task_id));
        }
        self.boards.save_tasks(size, &tasks).await?;

        let mut completion = self.cache.completion(size).await?;
        completion.remove(task_id);
        self.cache.set_completion(size, &completion).await?;
        info!("Deleted task {} from {}", task_id, size);

        self.boards.render(size, &tasks).await
    }

    /// Flip a cell and score the resulting board. The praise cell can be
    /// toggled; placeholders cannot.
    pub async fn toggle_completion(
        &self,
        size: BoardSize,
        task_id: i64,
    ) -> Result<ToggleOutcome, DomainError> {
        if task_id < 0 {
            return Err(DomainError::CellNotEditable(format!(
                "Empty cell {} cannot be completed",
                task_id
            )));
        }

        let tasks = self.boards.load_tasks(size).await?;
        if task_id != PRAISE_TASK_ID && !tasks.iter().any(|task| task.id == task_id) {
            return Err(task_not_found(task_id));
        }

        let mut completion = self.cache.completion(size).await?;
        completion.toggle(task_id);
        self.cache.set_completion(size, &completion).await?;

        let board = self.boards.render(size, &tasks).await?;
        let bingo = self.scoring.check_bingo(&board).await?;

        Ok(ToggleOutcome { board, bingo })
    }

    /// Remember the preferred size and return its synchronized board
    pub async fn change_board_size(&self, dimension: u32) -> Result<Board, DomainError> {
        let size = BoardSize::new(dimension)?;
        self.config.set_board_size(size).to_infra_err()?;
        self.boards.sync_board(size, &[]).await
    }
}
