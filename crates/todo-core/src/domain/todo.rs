//! Todo Entity
//!
//! A single task row of the hosted `todos` table.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned row identifier (`bigint` identity column)
pub type TodoId = i64;

/// A todo row as returned by the remote table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the server
    pub id: TodoId,
    /// Task text as typed by the user
    pub task: String,
    /// Completion status
    #[serde(default)]
    pub is_complete: bool,
    /// Creation timestamp, assigned by the server.
    /// `timestamp` columns come back without an offset and are read as UTC.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` taken as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Insert payload. Never carries `id` or `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub is_complete: bool,
}

impl NewTodo {
    /// A fresh, incomplete task
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            is_complete: false,
        }
    }
}

/// Whether `text` is acceptable as a task (non-empty after trim)
pub fn is_valid_task(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_row_ignores_extra_columns() {
        let json = r#"{
            "id": 7,
            "task": "Buy milk",
            "is_complete": false,
            "created_at": "2024-05-01T10:15:30.123456+00:00",
            "user_id": null
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.task, "Buy milk");
        assert!(!todo.is_complete);
    }

    #[test]
    fn test_decode_naive_timestamp_as_utc() {
        let json = r#"[{"id":1,"task":"Buy milk","is_complete":false,"created_at":"2024-05-01T10:15:30.123456"}]"#;
        let rows: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].created_at.to_rfc3339(), "2024-05-01T10:15:30.123456+00:00");
    }

    #[test]
    fn test_decode_offset_timestamp_converts_to_utc() {
        let parsed = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T10:00:00+00:00");
        assert_eq!(parse_timestamp("2024-05-01 10:15:30").unwrap().to_rfc3339(), "2024-05-01T10:15:30+00:00");
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_new_todo_serializes_without_server_fields() {
        let value = serde_json::to_value(NewTodo::new("Walk dog")).unwrap();
        assert_eq!(value, serde_json::json!({ "task": "Walk dog", "is_complete": false }));
    }

    #[test]
    fn test_task_validation() {
        assert!(is_valid_task("Buy milk"));
        assert!(is_valid_task("  padded  "));
        assert!(!is_valid_task(""));
        assert!(!is_valid_task("   \t\n"));
    }
}
