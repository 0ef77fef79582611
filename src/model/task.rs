use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry.
///
/// The list it lives in is ordered most-recently-added first; `created_at`
/// is record-keeping only and never drives display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,
    /// Task title text (trimmed, non-empty)
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (edit or toggle); absent if never touched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task: fresh id, not completed, created now.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Stamp the modification time.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert!(task.updated_at.is_none());
        assert!(!task.id.is_empty());
    }

    #[test]
    fn new_tasks_get_distinct_ids() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn touch_sets_updated_at() {
        let mut task = Task::new("a");
        task.touch();
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn serializes_timestamps_as_strings() {
        let task = Task::new("Buy milk");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json["id"].is_string());
        assert!(json["created_at"].is_string());
        // RFC 3339: date, 'T', time
        let created = json["created_at"].as_str().unwrap();
        assert!(created.contains('T'));
        // Never-touched tasks omit updated_at entirely
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn deserializes_without_updated_at() {
        let json = r#"{
            "id": "abc-123",
            "title": "Walk dog",
            "completed": true,
            "created_at": "2026-08-01T09:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "abc-123");
        assert_eq!(task.title, "Walk dog");
        assert!(task.completed);
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let mut task = Task::new("Water plants");
        task.touch();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
