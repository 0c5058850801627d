use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which task ids are done, persisted per board size.
///
/// Keyed by id rather than cell position so that re-shuffling the board keeps
/// what the user already finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(BTreeMap<i64, bool>);

impl CompletionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, task_id: i64) -> bool {
        self.0.get(&task_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, task_id: i64, completed: bool) {
        self.0.insert(task_id, completed);
    }

    /// Flip and return the new state
    pub fn toggle(&mut self, task_id: i64) -> bool {
        let completed = !self.is_completed(task_id);
        self.set(task_id, completed);
        completed
    }

    pub fn remove(&mut self, task_id: i64) {
        self.0.remove(&task_id);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_remove() {
        let mut map = CompletionMap::new();
        assert!(!map.is_completed(3));
        assert!(map.toggle(3));
        assert!(map.is_completed(3));
        assert!(!map.toggle(3));
        assert!(!map.is_completed(3));

        map.set(9999, true);
        map.remove(9999);
        assert!(map.is_empty());
    }

    #[test]
    fn test_json_uses_string_keys() {
        let mut map = CompletionMap::new();
        map.set(2, true);
        map.set(9999, false);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2":true,"9999":false}"#);

        let parsed: CompletionMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);

        let empty: CompletionMap = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
