mod completion;
mod lines;
mod shuffle;
mod size;

#[cfg(test)]
mod board_test;

use serde::{Deserialize, Serialize};

use crate::task::Task;

pub use completion::CompletionMap;
pub use lines::{count_completed_lines, fold_grid, BingoDelta};
pub use shuffle::randomize_tasks;
pub use size::BoardSize;

/// The visible size x size grid.
///
/// Derived on demand from the task list and the completion map, never
/// persisted. The center cell always holds the praise task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Task>,
}

impl Board {
    /// Interleave `tasks` around the praise cell.
    ///
    /// Cells before the center take tasks in order, cells after it take the
    /// task one slot earlier. Missing tasks become placeholders. Completion
    /// flags come from `completion`, never from the tasks themselves.
    pub fn build(
        size: BoardSize,
        tasks: &[Task],
        completion: &CompletionMap,
        praise_title: &str,
    ) -> Self {
        let center = size.center_index();
        let cells = (0..size.cell_count())
            .map(|index| {
                if index == center {
                    let mut praise = Task::praise(praise_title);
                    praise.completed = completion.is_completed(praise.id);
                    return praise;
                }

                let task_index = if index > center { index - 1 } else { index };
                match tasks.get(task_index) {
                    Some(task) => Task {
                        id: task.id,
                        title: task.title.clone(),
                        completed: completion.is_completed(task.id),
                    },
                    None => Task::placeholder(index),
                }
            })
            .collect();

        Self { size, cells }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn cells(&self) -> &[Task] {
        &self.cells
    }

    pub fn center(&self) -> &Task {
        &self.cells[self.size.center_index()]
    }

    pub fn find(&self, task_id: i64) -> Option<&Task> {
        self.cells.iter().find(|cell| cell.id == task_id)
    }

    /// Row-major completion grid
    pub fn completion_grid(&self) -> Vec<Vec<bool>> {
        let flags: Vec<bool> = self.cells.iter().map(|cell| cell.completed).collect();
        fold_grid(&flags, self.size.dimension())
    }

    /// Completed rows + columns + diagonals
    pub fn completed_lines(&self) -> u32 {
        count_completed_lines(&self.completion_grid())
    }
}
