//! Task operations, including the open/closed state transitions.

use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::resources::{item_path, NO_BODY};
use crate::transport::Transport;
use crate::types::{Task, TaskFilter, TaskParams};

impl<T: Transport> TodoistClient<T> {
    /// Active tasks, narrowed by at most one filter (project, else section,
    /// else label).
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let query: Vec<(&str, &str)> = filter.query().into_iter().collect();
        self.fetch_json(HttpMethod::Get, "/tasks", &query, NO_BODY)
    }

    pub fn create_task(&self, params: &TaskParams) -> Result<Task> {
        self.fetch_json(HttpMethod::Post, "/tasks", &[], Some(params))
    }

    pub fn get_task(&self, id: &str) -> Result<Task> {
        self.fetch_json(HttpMethod::Get, &item_path("tasks", id), &[], NO_BODY)
    }

    pub fn update_task(&self, id: &str, params: &TaskParams) -> Result<Task> {
        self.fetch_json(HttpMethod::Post, &item_path("tasks", id), &[], Some(params))
    }

    /// Mark a task completed.
    pub fn close_task(&self, id: &str) -> Result<bool> {
        let path = format!("{}/close", item_path("tasks", id));
        self.fetch_no_content(HttpMethod::Post, &path, NO_BODY)
    }

    /// Bring a completed task back to the active list.
    pub fn reopen_task(&self, id: &str) -> Result<bool> {
        let path = format!("{}/reopen", item_path("tasks", id));
        self.fetch_no_content(HttpMethod::Post, &path, NO_BODY)
    }

    pub fn delete_task(&self, id: &str) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Delete, &item_path("tasks", id), NO_BODY)
    }
}
