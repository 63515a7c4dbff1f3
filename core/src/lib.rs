//! Blocking client for the Todoist REST API.
//!
//! # Overview
//! Typed operations for projects, sections, tasks, comments, labels and
//! shared labels. Each operation is one HTTP round trip: build the request,
//! send it with the bearer token, decode the JSON response (or accept a 204).
//!
//! # Design
//! - `TodoistClient` holds only an immutable `Config` and a `Transport`.
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`),
//!   so request building and decoding are testable without a network.
//! - No retries, pagination or caching. Every failure is returned as an
//!   `ApiError` and the caller decides what to do with it.
//!
//! ```no_run
//! use todoist_core::{TaskParams, TodoistClient};
//!
//! let client = TodoistClient::new("0123456789abcdef")?;
//! let task = client.create_task(&TaskParams::with_content("Buy milk"))?;
//! client.close_task(&task.id)?;
//! # Ok::<(), todoist_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
mod resources;
pub mod transport;
pub mod types;

pub use client::TodoistClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Attachment, Comment, CommentFilter, CommentParams, Due, Duration, DurationUnit, Label,
    LabelParams, Project, ProjectParams, RemoveSharedLabel, RenameSharedLabel, Section,
    SectionParams, Task, TaskFilter, TaskParams, ViewStyle,
};
