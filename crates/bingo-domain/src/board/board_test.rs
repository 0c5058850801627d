#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::task::{default_tasks, PRAISE_TASK_ID};

    const PRAISE: &str = "Well done";

    #[test]
    fn test_board_length_and_center_for_every_size() {
        for size in BoardSize::ALL {
            for task_count in [0, 1, size.task_capacity() - 1, size.task_capacity(), 40] {
                let tasks: Vec<Task> = (1..=task_count as i64)
                    .map(|i| Task::new(i, i.to_string()))
                    .collect();
                let board = Board::build(size, &tasks, &CompletionMap::new(), PRAISE);

                assert_eq!(board.cells().len(), size.cell_count());
                assert_eq!(board.center().id, PRAISE_TASK_ID);
                assert_eq!(board.center().title, PRAISE);
            }
        }
    }

    #[test]
    fn test_tasks_interleave_around_center() {
        let tasks = default_tasks(BoardSize::THREE);
        let board = Board::build(BoardSize::THREE, &tasks, &CompletionMap::new(), PRAISE);
        let ids: Vec<i64> = board.cells().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, PRAISE_TASK_ID, 5, 6, 7, 8]);
    }

    #[test]
    fn test_missing_tasks_become_placeholders() {
        let tasks = vec![Task::new(10, "walk"), Task::new(11, "read")];
        let board = Board::build(BoardSize::THREE, &tasks, &CompletionMap::new(), PRAISE);

        assert_eq!(board.cells()[0].id, 10);
        assert_eq!(board.cells()[1].id, 11);
        assert_eq!(board.cells()[2], Task::placeholder(2));
        assert_eq!(board.cells()[2].id, -3);
        assert_eq!(board.cells()[8].id, -9);
    }

    #[test]
    fn test_completion_comes_from_map_not_tasks() {
        let mut stale = Task::new(1, "stale flag");
        stale.completed = true;
        let tasks = vec![stale, Task::new(2, "done")];

        let mut completion = CompletionMap::new();
        completion.set(2, true);
        completion.set(PRAISE_TASK_ID, true);

        let board = Board::build(BoardSize::THREE, &tasks, &completion, PRAISE);
        assert!(!board.find(1).unwrap().completed);
        assert!(board.find(2).unwrap().completed);
        assert!(board.center().completed);
    }

    #[test]
    fn test_completed_lines_through_board() {
        let tasks = default_tasks(BoardSize::THREE);
        let mut completion = CompletionMap::new();
        // Top row: cells 0,1,2 -> ids 1,2,3
        for id in [1, 2, 3] {
            completion.set(id, true);
        }
        let board = Board::build(BoardSize::THREE, &tasks, &completion, PRAISE);
        assert_eq!(board.completed_lines(), 1);

        // Middle column: ids 2, praise, 7
        completion.set(PRAISE_TASK_ID, true);
        completion.set(7, true);
        let board = Board::build(BoardSize::THREE, &tasks, &completion, PRAISE);
        assert_eq!(board.completed_lines(), 2);
    }

    #[test]
    fn test_all_done_board_scores_every_line() {
        for size in BoardSize::ALL {
            let tasks = default_tasks(size);
            let mut completion = CompletionMap::new();
            for task in &tasks {
                completion.set(task.id, true);
            }
            completion.set(PRAISE_TASK_ID, true);

            let board = Board::build(size, &tasks, &completion, PRAISE);
            assert_eq!(board.completed_lines(), size.max_lines());
        }
    }
}
