mod template;

use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

pub use template::default_tasks;

/// Id reserved for the fixed center cell
pub const PRAISE_TASK_ID: i64 = 9999;

/// One cell of the bingo board.
///
/// Ids are unique within a board. Placeholder cells carry `-(cell index + 1)`
/// and the praise cell carries [`PRAISE_TASK_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Empty filler for a cell with no task behind it
    pub fn placeholder(cell_index: usize) -> Self {
        Self {
            id: -(cell_index as i64 + 1),
            title: String::new(),
            completed: false,
        }
    }

    pub fn praise(title: impl Into<String>) -> Self {
        Self::new(PRAISE_TASK_ID, title)
    }

    pub fn is_praise(&self) -> bool {
        self.id == PRAISE_TASK_ID
    }

    pub fn is_placeholder(&self) -> bool {
        self.id < 0
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Only real, user-owned tasks may be renamed or deleted
    pub fn is_editable(&self) -> bool {
        !self.is_praise() && !self.is_placeholder()
    }
}

/// True when nothing in the list has a usable title
pub fn all_blank(tasks: &[Task]) -> bool {
    tasks.iter().all(|task| !task.has_title())
}

/// Trim and validate a user-entered title
pub fn normalize_title(title: &str) -> Result<String, DomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Task title cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Next free id for a user task; skips the praise id
pub fn next_task_id(tasks: &[Task]) -> i64 {
    let next = tasks
        .iter()
        .filter(|task| task.is_editable())
        .map(|task| task.id)
        .max()
        .unwrap_or(0)
        + 1;

    if next == PRAISE_TASK_ID {
        PRAISE_TASK_ID + 1
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_ids_are_negative_and_one_based() {
        let first = Task::placeholder(0);
        let fifth = Task::placeholder(4);
        assert_eq!(first.id, -1);
        assert_eq!(fifth.id, -5);
        assert!(first.is_placeholder());
        assert!(!first.has_title());
        assert!(!first.is_editable());
    }

    #[test]
    fn test_praise_cell_is_not_editable() {
        let praise = Task::praise("Well done");
        assert!(praise.is_praise());
        assert!(!praise.is_editable());
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  read 10 pages ").unwrap(), "read 10 pages");
        assert!(matches!(
            normalize_title("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_next_task_id() {
        assert_eq!(next_task_id(&[]), 1);

        let tasks = vec![Task::new(3, "a"), Task::new(7, "b"), Task::placeholder(2)];
        assert_eq!(next_task_id(&tasks), 8);

        let near_praise = vec![Task::new(PRAISE_TASK_ID - 1, "a")];
        assert_eq!(next_task_id(&near_praise), PRAISE_TASK_ID + 1);
    }

    #[test]
    fn test_all_blank() {
        assert!(all_blank(&[]));
        assert!(all_blank(&[Task::new(1, " "), Task::placeholder(1)]));
        assert!(!all_blank(&[Task::new(1, " "), Task::new(2, "walk")]));
    }

    #[test]
    fn test_task_json_defaults_completed() {
        let task: Task = serde_json::from_str(r#"{"id":4,"title":"stretch"}"#).unwrap();
        assert_eq!(task, Task::new(4, "stretch"));
    }
}
