//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The controller owns the list; this store is the copy the view reads.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Todo, TodoListState};

/// View state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Todos, newest first
    pub todos: Vec<Todo>,
    /// Shown as "Loading todos..." until the first load settles
    pub is_loading: bool,
    /// Text in the new-todo input
    pub draft: String,
    /// Incomplete count, copied from the controller state
    pub remaining: usize,
}

impl AppState {
    pub fn new() -> Self {
        let initial = TodoListState::new();
        let remaining = initial.remaining();
        Self {
            todos: initial.items,
            is_loading: initial.is_loading,
            remaining,
            draft: initial.draft,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the controller's list, loading flag and remaining count into the store.
///
/// The draft is left alone: the input owns it between submissions.
pub fn store_sync(store: &AppStore, state: &TodoListState) {
    *store.todos().write() = state.items.clone();
    *store.is_loading().write() = state.is_loading;
    *store.remaining().write() = state.remaining();
}
