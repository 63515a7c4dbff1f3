use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::resources::{item_path, NO_BODY};
use crate::transport::Transport;
use crate::types::{Comment, CommentFilter, CommentParams};

impl<T: Transport> TodoistClient<T> {
    /// Comments of a task, else of a project.
    pub fn list_comments(&self, filter: &CommentFilter) -> Result<Vec<Comment>> {
        let query: Vec<(&str, &str)> = filter.query().into_iter().collect();
        self.fetch_json(HttpMethod::Get, "/comments", &query, NO_BODY)
    }

    pub fn create_comment(&self, params: &CommentParams) -> Result<Comment> {
        self.fetch_json(HttpMethod::Post, "/comments", &[], Some(params))
    }

    pub fn get_comment(&self, id: &str) -> Result<Comment> {
        self.fetch_json(HttpMethod::Get, &item_path("comments", id), &[], NO_BODY)
    }

    pub fn update_comment(&self, id: &str, params: &CommentParams) -> Result<Comment> {
        self.fetch_json(HttpMethod::Post, &item_path("comments", id), &[], Some(params))
    }

    pub fn delete_comment(&self, id: &str) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Delete, &item_path("comments", id), NO_BODY)
    }
}
