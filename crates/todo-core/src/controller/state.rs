//! Todo List State
//!
//! The in-memory mirror of the remote table plus view flags.
//! Reconciliation helpers only ever apply outcomes the server has confirmed.

use crate::domain::{Todo, TodoId};

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListState {
    /// Rows, newest first (new inserts at head)
    pub items: Vec<Todo>,
    /// True only around `load`
    pub is_loading: bool,
    /// Input buffer for the next task
    pub draft: String,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            draft: String::new(),
        }
    }
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of incomplete todos
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|todo| !todo.is_complete).count()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub(crate) fn replace_all(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    pub(crate) fn prepend(&mut self, todo: Todo) {
        self.items.insert(0, todo);
    }

    /// Set completion of the entry matching `id`
    pub(crate) fn set_complete(&mut self, id: TodoId, is_complete: bool) {
        if let Some(todo) = self.items.iter_mut().find(|todo| todo.id == id) {
            todo.is_complete = is_complete;
        }
    }

    pub(crate) fn remove(&mut self, id: TodoId) {
        self.items.retain(|todo| todo.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo(id: TodoId, task: &str, is_complete: bool) -> Todo {
        Todo {
            id,
            task: task.to_string(),
            is_complete,
            created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        }
    }

    #[test]
    fn test_starts_loading_and_empty() {
        let state = TodoListState::new();
        assert!(state.is_loading);
        assert!(state.is_empty());
        assert!(state.draft.is_empty());
    }

    #[test]
    fn test_prepend_puts_new_row_at_head() {
        let mut state = TodoListState::new();
        state.replace_all(vec![todo(2, "b", false), todo(1, "a", false)]);
        state.prepend(todo(3, "c", false));
        let ids: Vec<TodoId> = state.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_set_complete_keeps_order() {
        let mut state = TodoListState::new();
        state.replace_all(vec![todo(2, "b", false), todo(1, "a", false)]);
        state.set_complete(1, true);
        assert_eq!(state.items[1].id, 1);
        assert!(state.items[1].is_complete);
        assert!(!state.items[0].is_complete);
        assert_eq!(state.remaining(), 1);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state = TodoListState::new();
        state.replace_all(vec![todo(1, "a", false)]);
        let before = state.clone();
        state.set_complete(99, true);
        state.remove(99);
        assert_eq!(state, before);
    }

    #[test]
    fn test_remaining_counts_incomplete() {
        let mut state = TodoListState::new();
        assert_eq!(state.remaining(), 0);
        state.replace_all(vec![todo(3, "c", false), todo(2, "b", true), todo(1, "a", false)]);
        assert_eq!(state.remaining(), 2);
        state.remove(1);
        assert_eq!(state.remaining(), 1);
    }

    #[test]
    fn test_remove() {
        let mut state = TodoListState::new();
        state.replace_all(vec![todo(2, "b", true), todo(1, "a", false)]);
        state.remove(2);
        assert_eq!(state.items.len(), 1);
        assert!(state.get(2).is_none());
        assert!(state.get(1).is_some());
    }
}
