//! Wire types served by the mock API.
//!
//! Defined independently from `todoist-core` so the integration tests catch
//! schema drift between client and server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub comment_count: u32,
    pub order: i32,
    pub color: String,
    pub is_shared: bool,
    pub is_favorite: bool,
    pub is_inbox_project: bool,
    pub is_team_inbox: bool,
    pub view_style: String,
    pub url: String,
    pub parent_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub parent_id: Option<String>,
    pub color: Option<String>,
    pub is_favorite: Option<bool>,
    pub view_style: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub project_id: String,
    pub order: i32,
    pub name: String,
}

#[derive(Deserialize, Default)]
pub struct SectionInput {
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub order: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Due {
    pub date: String,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    pub string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Duration {
    pub amount: u32,
    pub unit: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub section_id: Option<String>,
    pub parent_id: Option<String>,
    pub content: String,
    pub description: String,
    pub is_completed: bool,
    pub labels: Vec<String>,
    pub order: i32,
    pub priority: u8,
    pub assignee_id: Option<String>,
    pub assigner_id: Option<String>,
    pub comment_count: u32,
    pub due: Option<Due>,
    pub duration: Option<Duration>,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Default)]
pub struct TaskInput {
    pub content: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub parent_id: Option<String>,
    pub priority: Option<u8>,
    pub labels: Option<Vec<String>>,
    pub due_string: Option<String>,
    pub due_date: Option<String>,
    pub due_datetime: Option<String>,
    pub due_lang: Option<String>,
    pub assignee_id: Option<String>,
    pub duration: Option<u32>,
    pub duration_unit: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub content: String,
    pub posted_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
}

#[derive(Deserialize, Default)]
pub struct CommentInput {
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub content: Option<String>,
    pub attachment: Option<Attachment>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: String,
    pub order: i32,
    pub is_favorite: bool,
}

#[derive(Deserialize, Default)]
pub struct LabelInput {
    pub name: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub is_favorite: Option<bool>,
}

#[derive(Deserialize)]
pub struct RenameShared {
    pub name: String,
    pub new_name: String,
}

#[derive(Deserialize)]
pub struct RemoveShared {
    pub name: String,
}

#[derive(Deserialize, Default)]
pub struct TaskQuery {
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub label: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SectionQuery {
    pub project_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct CommentQuery {
    pub task_id: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SharedLabelQuery {
    #[serde(default)]
    pub omit_personal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_input_all_fields_optional() {
        let input: TaskInput = serde_json::from_str("{}").unwrap();
        assert!(input.content.is_none());
        assert!(input.labels.is_none());
    }

    #[test]
    fn task_serializes_null_section() {
        let task = Task {
            id: "1".to_string(),
            project_id: "2".to_string(),
            section_id: None,
            parent_id: None,
            content: "Test".to_string(),
            description: String::new(),
            is_completed: false,
            labels: Vec::new(),
            order: 1,
            priority: 1,
            assignee_id: None,
            assigner_id: None,
            comment_count: 0,
            due: None,
            duration: None,
            url: String::new(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json["section_id"].is_null());
        assert_eq!(json["content"], "Test");
    }

    #[test]
    fn shared_label_query_defaults_to_false() {
        let query: SharedLabelQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.omit_personal);
    }

    #[test]
    fn rename_requires_both_names() {
        let result: Result<RenameShared, _> = serde_json::from_str(r#"{"name":"a"}"#);
        assert!(result.is_err());
    }
}
