/*
[INPUT]:  Todoist REST v2 schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - task type definitions
[UPDATE]: When the Todoist task schema changes or new fields are needed
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single Todoist task. Unknown wire fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
}

/// Due-date information attached to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Due {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    /// Human-readable due string as entered by the user ("tomorrow", "every friday")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
}

impl Task {
    /// Due date of the task, if any
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due.as_ref().map(|due| due.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_wire_shape() {
        let json = r#"{
            "id": "7421100341",
            "content": "Submit report",
            "is_completed": false,
            "due": { "date": "2024-06-14", "is_recurring": false, "string": "Jun 14" },
            "priority": 4,
            "project_id": "2203306141"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "7421100341");
        assert_eq!(task.content, "Submit report");
        assert!(!task.is_completed);
        assert_eq!(
            task.due_date(),
            NaiveDate::from_ymd_opt(2024, 6, 14)
        );
    }

    #[test]
    fn test_task_without_due() {
        let json = r#"{ "id": "1", "content": "Someday", "is_completed": false }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.due.is_none());
        assert_eq!(task.due_date(), None);
    }
}
