use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` is unique within the collection and never changes after creation.
/// `datetime` tracks the last create/update and is stored as RFC 3339 text
/// in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub datetime: DateTime<Local>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new task, timestamped now and not yet completed.
    pub fn new(id: i64, title: String, description: String) -> Self {
        Task {
            id,
            title,
            description,
            datetime: Local::now(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new(1, "Buy milk".into(), "2%".into());
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert!(!task.completed);
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let task = Task::new(42, "Write report".into(), "quarterly".into());
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn datetime_serializes_as_text() {
        let task = Task::new(7, "t".into(), String::new());
        let value: serde_json::Value = serde_json::to_value(&task).unwrap();
        assert!(value["datetime"].is_string());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id":3,"title":"bare","datetime":"2025-06-01T10:00:00+00:00"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }
}
