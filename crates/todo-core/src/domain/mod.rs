//! Domain Layer
//!
//! Contains the todo entity and the errors raised around it.
//! This layer has no I/O (serde and chrono only).

mod todo;
mod error;

pub use todo::{is_valid_task, NewTodo, Todo, TodoId};
pub use error::{ConfigError, RemoteOperationFailure, RemoteResult};
