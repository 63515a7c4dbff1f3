use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::resources::{item_path, NO_BODY};
use crate::transport::Transport;
use crate::types::{Section, SectionParams};

impl<T: Transport> TodoistClient<T> {
    /// All sections, or only those of `project_id` when given.
    pub fn list_sections(&self, project_id: Option<&str>) -> Result<Vec<Section>> {
        let query: Vec<(&str, &str)> = project_id
            .filter(|id| !id.is_empty())
            .map(|id| ("project_id", id))
            .into_iter()
            .collect();
        self.fetch_json(HttpMethod::Get, "/sections", &query, NO_BODY)
    }

    pub fn create_section(&self, params: &SectionParams) -> Result<Section> {
        self.fetch_json(HttpMethod::Post, "/sections", &[], Some(params))
    }

    pub fn get_section(&self, id: &str) -> Result<Section> {
        self.fetch_json(HttpMethod::Get, &item_path("sections", id), &[], NO_BODY)
    }

    pub fn update_section(&self, id: &str, params: &SectionParams) -> Result<Section> {
        self.fetch_json(HttpMethod::Post, &item_path("sections", id), &[], Some(params))
    }

    pub fn delete_section(&self, id: &str) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Delete, &item_path("sections", id), NO_BODY)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::*;
    use crate::error::ApiError;
    use crate::http::HttpMethod;
    use crate::types::SectionParams;

    const SECTION: &str = r#"{"id":"7025","project_id":"2203306141","order":1,"name":"Groceries"}"#;

    #[test]
    fn list_sections_without_project_is_unfiltered() {
        let client = client(200, &format!("[{SECTION}]"));
        let sections = client.list_sections(None).unwrap();
        assert_eq!(sections[0].name, "Groceries");
        assert_eq!(sent(&client).url, "http://localhost:3000/sections");
    }

    #[test]
    fn list_sections_filters_by_project() {
        let client = client(200, "[]");
        let sections = client.list_sections(Some("2203306141")).unwrap();
        assert!(sections.is_empty());
        assert_eq!(
            sent(&client).url,
            "http://localhost:3000/sections?project_id=2203306141"
        );
    }

    #[test]
    fn empty_project_filter_is_ignored() {
        let client = client(200, "[]");
        client.list_sections(Some("")).unwrap();
        assert_eq!(sent(&client).url, "http://localhost:3000/sections");
    }

    #[test]
    fn create_section_sends_project_and_name() {
        let client = client(200, SECTION);
        let params = SectionParams {
            project_id: Some("2203306141".to_string()),
            name: Some("Groceries".to_string()),
            order: None,
        };
        let section = client.create_section(&params).unwrap();
        assert_eq!(section.project_id, "2203306141");
        assert_eq!(
            sent_body(&client),
            serde_json::json!({"project_id": "2203306141", "name": "Groceries"})
        );
    }

    #[test]
    fn update_section_posts_to_item_path() {
        let client = client(200, SECTION);
        let params = SectionParams {
            name: Some("Groceries".to_string()),
            ..SectionParams::default()
        };
        client.update_section("7025", &params).unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/sections/7025");
    }

    #[test]
    fn get_section_reports_status() {
        let client = client(500, "boom");
        let err = client.get_section("7025").unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    }

    #[test]
    fn delete_section_expects_204() {
        let client = client(204, "");
        assert!(client.delete_section("7025").unwrap());
        assert_eq!(sent(&client).method, HttpMethod::Delete);
    }
}
