use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::resources::{item_path, NO_BODY};
use crate::transport::Transport;
use crate::types::{Project, ProjectParams};

impl<T: Transport> TodoistClient<T> {
    /// All projects of the user.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.fetch_json(HttpMethod::Get, "/projects", &[], NO_BODY)
    }

    pub fn create_project(&self, params: &ProjectParams) -> Result<Project> {
        self.fetch_json(HttpMethod::Post, "/projects", &[], Some(params))
    }

    pub fn get_project(&self, id: &str) -> Result<Project> {
        self.fetch_json(HttpMethod::Get, &item_path("projects", id), &[], NO_BODY)
    }

    /// Update a project. The API takes updates as POST, not PUT/PATCH.
    pub fn update_project(&self, id: &str, params: &ProjectParams) -> Result<Project> {
        self.fetch_json(HttpMethod::Post, &item_path("projects", id), &[], Some(params))
    }

    /// Delete a project along with its sections and tasks.
    pub fn delete_project(&self, id: &str) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Delete, &item_path("projects", id), NO_BODY)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::error::ApiError;
    use crate::http::HttpMethod;
    use crate::types::{ProjectParams, ViewStyle};

    const PROJECT: &str = r#"{
        "id": "2203306141",
        "name": "Shopping List",
        "comment_count": 0,
        "order": 1,
        "color": "charcoal",
        "is_shared": false,
        "is_favorite": true,
        "is_inbox_project": false,
        "is_team_inbox": false,
        "view_style": "board",
        "url": "https://todoist.com/showProject?id=2203306141",
        "parent_id": null
    }"#;

    #[test]
    fn create_project_posts_params() {
        let client = client(200, PROJECT);
        let params = ProjectParams {
            is_favorite: Some(true),
            view_style: Some(ViewStyle::Board),
            ..ProjectParams::named("Shopping List")
        };
        let project = client.create_project(&params).unwrap();
        assert_eq!(project.id, "2203306141");
        assert_eq!(project.view_style, ViewStyle::Board);

        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/projects");
        assert_eq!(
            sent_body(&client),
            serde_json::json!({"name": "Shopping List", "is_favorite": true, "view_style": "board"})
        );
    }

    #[test]
    fn list_projects_decodes_sequence() {
        let client = client(200, &format!("[{PROJECT}]"));
        let projects = client.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(sent(&client).url, "http://localhost:3000/projects");
    }

    #[test]
    fn get_project_uses_item_path() {
        let client = client(200, PROJECT);
        let project = client.get_project("2203306141").unwrap();
        assert_eq!(project.name, "Shopping List");
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/projects/2203306141");
        assert!(req.body.is_none());
    }

    #[test]
    fn update_project_posts_to_item_path() {
        let client = client(200, PROJECT);
        let params = ProjectParams {
            color: Some("charcoal".to_string()),
            ..ProjectParams::default()
        };
        client.update_project("2203306141", &params).unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/projects/2203306141");
        assert_eq!(req.body.as_deref(), Some(r#"{"color":"charcoal"}"#));
    }

    #[test]
    fn delete_project_returns_true_on_204() {
        let client = client(204, "");
        assert!(client.delete_project("999").unwrap());
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/projects/999");
    }

    #[test]
    fn delete_project_reports_404() {
        let client = client(404, "Project not found");
        let err = client.delete_project("999").unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 404, .. }));
        assert!(err.to_string().contains("404"));
    }
}
