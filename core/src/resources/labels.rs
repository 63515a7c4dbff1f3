//! Personal labels (server-owned, with ids) and shared labels (bare names).

use crate::client::TodoistClient;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::resources::{item_path, NO_BODY};
use crate::transport::Transport;
use crate::types::{Label, LabelParams, RemoveSharedLabel, RenameSharedLabel};

impl<T: Transport> TodoistClient<T> {
    pub fn list_labels(&self) -> Result<Vec<Label>> {
        self.fetch_json(HttpMethod::Get, "/labels", &[], NO_BODY)
    }

    pub fn create_label(&self, params: &LabelParams) -> Result<Label> {
        self.fetch_json(HttpMethod::Post, "/labels", &[], Some(params))
    }

    pub fn get_label(&self, id: &str) -> Result<Label> {
        self.fetch_json(HttpMethod::Get, &item_path("labels", id), &[], NO_BODY)
    }

    pub fn update_label(&self, id: &str, params: &LabelParams) -> Result<Label> {
        self.fetch_json(HttpMethod::Post, &item_path("labels", id), &[], Some(params))
    }

    pub fn delete_label(&self, id: &str) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Delete, &item_path("labels", id), NO_BODY)
    }

    /// Names of labels shared on tasks. With `omit_personal`, names that
    /// match one of the user's personal labels are left out.
    pub fn list_shared_labels(&self, omit_personal: bool) -> Result<Vec<String>> {
        let query: &[(&str, &str)] = if omit_personal {
            &[("omit_personal", "true")]
        } else {
            &[]
        };
        self.fetch_json(HttpMethod::Get, "/labels/shared", query, NO_BODY)
    }

    pub fn rename_shared_label(&self, params: &RenameSharedLabel) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Post, "/labels/shared/rename", Some(params))
    }

    pub fn remove_shared_label(&self, params: &RemoveSharedLabel) -> Result<bool> {
        self.fetch_no_content(HttpMethod::Post, "/labels/shared/remove", Some(params))
    }
}
