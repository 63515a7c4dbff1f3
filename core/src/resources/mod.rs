//! Per-resource operations on `TodoistClient`.
//!
//! Each submodule adds one `impl` block. Operations only choose the method,
//! path, query and body; the pipeline itself lives in `crate::client`.

mod comments;
mod labels;
mod projects;
mod sections;
mod tasks;

use crate::http::encode_component;

/// Stand-in body for requests that carry none.
pub(crate) const NO_BODY: Option<&()> = None;

/// `/{collection}/{id}` with `id` encoded as one path segment.
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!("/{collection}/{}", encode_component(id))
}
