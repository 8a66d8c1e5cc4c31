//! Remote Table Client Trait
//!
//! The managed backend as seen by the controller: row CRUD with
//! server-assigned identifiers and timestamps, for a single table.

use async_trait::async_trait;

use crate::domain::{NewTodo, RemoteResult, Todo, TodoId};

/// Row-level access to the remote todo table.
///
/// Futures are not required to be `Send`: the browser build drives them on a
/// single-threaded executor.
#[async_trait(?Send)]
pub trait RemoteTableClient {
    /// All rows, newest `created_at` first
    async fn list(&self) -> RemoteResult<Vec<Todo>>;

    /// Insert a row and return it as stored (with id and timestamp)
    async fn insert(&self, todo: &NewTodo) -> RemoteResult<Todo>;

    /// Set `is_complete` on the row matching `id`
    async fn update(&self, id: TodoId, is_complete: bool) -> RemoteResult<()>;

    /// Delete the row matching `id`
    async fn delete(&self, id: TodoId) -> RemoteResult<()>;
}
