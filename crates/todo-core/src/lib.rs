//! Todo Core
//!
//! Layered architecture:
//! - domain: Todo entity and error types
//! - remote: Hosted table client abstraction and its PostgREST implementation
//! - controller: In-memory list state reconciled against the remote table

pub mod domain;
pub mod remote;
pub mod controller;

pub use domain::{ConfigError, NewTodo, RemoteOperationFailure, RemoteResult, Todo, TodoId};
pub use remote::{PostgrestClient, RemoteTableClient, SupabaseConfig};
pub use controller::{Notifier, Outcome, TodoListController, TodoListState};
