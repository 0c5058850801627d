use bingo_domain::board::{randomize_tasks, Board, BoardSize};
use bingo_domain::shared::{Clock, DomainError};
use bingo_domain::task::{all_blank, default_tasks, Task};
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::cache::{keys, LocalCache};

/// Rebuilds the visible board from cached tasks, handling size switches
/// and the once-a-day shuffle.
pub struct BoardService {
    cache: Arc<LocalCache>,
    clock: Arc<dyn Clock>,
    praise_title: String,
}

impl BoardService {
    pub fn new(cache: Arc<LocalCache>, clock: Arc<dyn Clock>, praise_title: impl Into<String>) -> Self {
        Self {
            cache,
            clock,
            praise_title: praise_title.into(),
        }
    }

    /// Cached tasks for `size`, or its default template (persisted on first use)
    pub async fn load_tasks(&self, size: BoardSize) -> Result<Vec<Task>, DomainError> {
        if let Some(tasks) = self.cache.tasks(size).await? {
            return Ok(tasks);
        }

        let tasks = default_tasks(size);
        self.cache.set_tasks(size, &tasks).await?;
        debug!("Seeded default tasks for {}", size);
        Ok(tasks)
    }

    pub async fn save_tasks(&self, size: BoardSize, tasks: &[Task]) -> Result<(), DomainError> {
        self.cache.set_tasks(size, tasks).await
    }

    /// Synchronize `current` (possibly empty) with the cache and build the board.
    ///
    /// Concurrent calls are not coordinated; the last write to the task cache wins.
    pub async fn sync_board(&self, size: BoardSize, current: &[Task]) -> Result<Board, DomainError> {
        let today = self.clock.today();

        let mut tasks = if current.is_empty() || all_blank(current) {
            self.load_tasks(size).await?
        } else {
            current.to_vec()
        };

        let size_key = keys::bingo_size_key(size);
        if self.cache.last_bingo_size_key().await?.as_deref() != Some(size_key.as_str()) {
            info!("Board size switched to {}", size);
            tasks = self.load_tasks(size).await?;
            self.cache.set_last_bingo_size_key(&size_key).await?;
        }

        if self.cache.last_randomize_date().await? != Some(today) {
            let mut head: Vec<Task> = tasks.into_iter().take(size.task_capacity()).collect();
            if all_blank(&head) {
                head = default_tasks(size);
            }

            tasks = randomize_tasks(&head, &mut rand::thread_rng());
            self.cache.set_tasks(size, &tasks).await?;
            self.cache.set_last_randomize_date(today).await?;
            info!("Shuffled {} tasks for {}", tasks.len(), today);
        }

        self.render(size, &tasks).await
    }

    /// Build the board for `tasks` with the cached completion state
    pub async fn render(&self, size: BoardSize, tasks: &[Task]) -> Result<Board, DomainError> {
        let completion = self.cache.completion(size).await?;
        Ok(Board::build(size, tasks, &completion, &self.praise_title))
    }
}
