//! Todo List Controller
//!
//! Owns the in-memory list and mirrors it against the remote table through
//! four operations: load, add, toggle, remove.
//!
//! Every operation is a single remote call. On success the local state is
//! reconciled to the outcome the server confirmed; on failure the user is
//! notified and the list is left untouched.

mod state;
mod notifier;


pub use state::TodoListState;
pub use notifier::Notifier;

use crate::domain::{is_valid_task, NewTodo, RemoteOperationFailure, TodoId};
use crate::remote::RemoteTableClient;

/// The remote-backed operations, used to label notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Load,
    Add,
    Toggle,
    Remove,
}

impl Operation {
    fn failure_prefix(&self) -> &'static str {
        match self {
            Operation::Load => "Error loading todos",
            Operation::Add => "Error adding todo",
            Operation::Toggle => "Error updating todo",
            Operation::Remove => "Error deleting todo",
        }
    }
}

/// Result of a controller operation, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Remote call succeeded and local state was reconciled
    Applied,
    /// Rejected before any remote call (blank task)
    Skipped,
    /// Remote call failed; the user was notified
    Failed,
}

pub struct TodoListController<C, N> {
    client: C,
    notifier: N,
    state: TodoListState,
}

impl<C, N> TodoListController<C, N>
where
    C: RemoteTableClient,
    N: Notifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: TodoListState::new(),
        }
    }

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Update the input buffer
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    /// Fetch all rows, newest first, replacing the local list
    pub async fn load(&mut self) -> Outcome {
        self.state.is_loading = true;
        let result = self.client.list().await;
        self.state.is_loading = false;

        match result {
            Ok(items) => {
                log::debug!("[controller] loaded {} todos", items.len());
                self.state.replace_all(items);
                Outcome::Applied
            }
            Err(err) => self.fail(Operation::Load, err),
        }
    }

    /// Insert `text` as a new incomplete todo and prepend the stored row
    pub async fn add(&mut self, text: &str) -> Outcome {
        if !is_valid_task(text) {
            return Outcome::Skipped;
        }

        match self.client.insert(&NewTodo::new(text)).await {
            Ok(todo) => {
                log::debug!("[controller] added todo {}", todo.id);
                self.state.prepend(todo);
                self.state.draft.clear();
                Outcome::Applied
            }
            Err(err) => self.fail(Operation::Add, err),
        }
    }

    /// `add` with the current input buffer
    pub async fn submit(&mut self) -> Outcome {
        let text = self.state.draft.clone();
        self.add(&text).await
    }

    /// Flip completion of `id`, given its current value
    pub async fn toggle(&mut self, id: TodoId, is_complete: bool) -> Outcome {
        let target = !is_complete;
        match self.client.update(id, target).await {
            Ok(()) => {
                log::debug!("[controller] todo {} is_complete={}", id, target);
                self.state.set_complete(id, target);
                Outcome::Applied
            }
            Err(err) => self.fail(Operation::Toggle, err),
        }
    }

    /// Delete `id` remotely, then locally
    pub async fn remove(&mut self, id: TodoId) -> Outcome {
        match self.client.delete(id).await {
            Ok(()) => {
                log::debug!("[controller] removed todo {}", id);
                self.state.remove(id);
                Outcome::Applied
            }
            Err(err) => self.fail(Operation::Remove, err),
        }
    }

    fn fail(&self, operation: Operation, err: RemoteOperationFailure) -> Outcome {
        let message = format!("{}: {}", operation.failure_prefix(), err);
        log::warn!("[controller] {}", message);
        self.notifier.notify(&message);
        Outcome::Failed
    }
}
