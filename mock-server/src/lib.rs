//! In-memory stand-in for the Todoist REST API.
//!
//! Serves the same paths, methods and status codes as the real service:
//! reads and writes answer 200 with JSON, deletes and state transitions
//! answer 204 with no body, and every route requires
//! `Authorization: Bearer <token>`.

pub mod model;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use log::debug;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub use model::*;

/// Token accepted by the standalone binary.
pub const DEFAULT_TOKEN: &str = "test-token";

#[derive(Default)]
pub struct Store {
    pub projects: HashMap<String, Project>,
    pub sections: HashMap<String, Section>,
    pub tasks: HashMap<String, Task>,
    pub comments: HashMap<String, Comment>,
    pub labels: HashMap<String, Label>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    token: Arc<str>,
    db: Db,
}

type ApiResult<T> = Result<T, StatusCode>;

pub fn app(token: &str) -> Router {
    let state = AppState {
        token: Arc::from(token),
        db: Arc::new(RwLock::new(Store::default())),
    };
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).post(update_project).delete(delete_project),
        )
        .route("/sections", get(list_sections).post(create_section))
        .route(
            "/sections/{id}",
            get(get_section).post(update_section).delete(delete_section),
        )
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).post(update_task).delete(delete_task),
        )
        .route("/tasks/{id}/close", post(close_task))
        .route("/tasks/{id}/reopen", post(reopen_task))
        .route("/comments", get(list_comments).post(create_comment))
        .route(
            "/comments/{id}",
            get(get_comment).post(update_comment).delete(delete_comment),
        )
        .route("/labels", get(list_labels).post(create_label))
        .route("/labels/shared", get(list_shared_labels))
        .route("/labels/shared/rename", post(rename_shared_label))
        .route("/labels/shared/remove", post(remove_shared_label))
        .route(
            "/labels/{id}",
            get(get_label).post(update_label).delete(delete_label),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let expected = format!("Bearer {}", state.token);
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        debug!("rejecting {} {}: bad or missing token", request.method(), request.uri());
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn required(value: Option<String>) -> ApiResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(StatusCode::BAD_REQUEST)
}

fn next_order<'a>(orders: impl Iterator<Item = &'a i32>) -> i32 {
    orders.max().copied().unwrap_or(0) + 1
}

// --- projects ---

async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    let store = state.db.read().await;
    let mut projects: Vec<Project> = store.projects.values().cloned().collect();
    projects.sort_by_key(|p| p.order);
    Json(projects)
}

async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> ApiResult<Json<Project>> {
    let name = required(input.name)?;
    let mut store = state.db.write().await;
    if let Some(parent) = &input.parent_id {
        if !store.projects.contains_key(parent) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    let id = new_id();
    let project = Project {
        url: format!("https://todoist.com/showProject?id={id}"),
        id: id.clone(),
        name,
        comment_count: 0,
        order: next_order(store.projects.values().map(|p| &p.order)),
        color: input.color.unwrap_or_else(|| "charcoal".to_string()),
        is_shared: false,
        is_favorite: input.is_favorite.unwrap_or(false),
        is_inbox_project: false,
        is_team_inbox: false,
        view_style: input.view_style.unwrap_or_else(|| "list".to_string()),
        parent_id: input.parent_id,
    };
    store.projects.insert(id, project.clone());
    Ok(Json(project))
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    let store = state.db.read().await;
    store.projects.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProjectInput>,
) -> ApiResult<Json<Project>> {
    let mut store = state.db.write().await;
    let project = store.projects.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        project.name = name;
    }
    if let Some(color) = input.color {
        project.color = color;
    }
    if let Some(is_favorite) = input.is_favorite {
        project.is_favorite = is_favorite;
    }
    if let Some(view_style) = input.view_style {
        project.view_style = view_style;
    }
    Ok(Json(project.clone()))
}

async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store.projects.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store.sections.retain(|_, s| s.project_id != id);
    store.tasks.retain(|_, t| t.project_id != id);
    store
        .comments
        .retain(|_, c| c.project_id.as_deref() != Some(id.as_str()));
    Ok(StatusCode::NO_CONTENT)
}

// --- sections ---

async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> Json<Vec<Section>> {
    let store = state.db.read().await;
    let mut sections: Vec<Section> = store
        .sections
        .values()
        .filter(|s| query.project_id.as_ref().is_none_or(|p| &s.project_id == p))
        .cloned()
        .collect();
    sections.sort_by_key(|s| s.order);
    Json(sections)
}

async fn create_section(
    State(state): State<AppState>,
    Json(input): Json<SectionInput>,
) -> ApiResult<Json<Section>> {
    let project_id = required(input.project_id)?;
    let name = required(input.name)?;
    let mut store = state.db.write().await;
    if !store.projects.contains_key(&project_id) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let order = input.order.unwrap_or_else(|| {
        next_order(
            store
                .sections
                .values()
                .filter(|s| s.project_id == project_id)
                .map(|s| &s.order),
        )
    });
    let section = Section {
        id: new_id(),
        project_id,
        order,
        name,
    };
    store.sections.insert(section.id.clone(), section.clone());
    Ok(Json(section))
}

async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Section>> {
    let store = state.db.read().await;
    store.sections.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<SectionInput>,
) -> ApiResult<Json<Section>> {
    let mut store = state.db.write().await;
    let section = store.sections.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        section.name = name;
    }
    if let Some(order) = input.order {
        section.order = order;
    }
    Ok(Json(section.clone()))
}

async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store.sections.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store
        .tasks
        .retain(|_, t| t.section_id.as_deref() != Some(id.as_str()));
    Ok(StatusCode::NO_CONTENT)
}

// --- tasks ---

/// Active tasks only; closed tasks stay reachable by id.
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Json<Vec<Task>> {
    let store = state.db.read().await;
    let mut tasks: Vec<Task> = store
        .tasks
        .values()
        .filter(|t| !t.is_completed)
        .filter(|t| query.project_id.as_ref().is_none_or(|p| &t.project_id == p))
        .filter(|t| {
            query
                .section_id
                .as_ref()
                .is_none_or(|s| t.section_id.as_ref() == Some(s))
        })
        .filter(|t| query.label.as_ref().is_none_or(|l| t.labels.contains(l)))
        .cloned()
        .collect();
    tasks.sort_by_key(|t| t.order);
    Json(tasks)
}

fn due_from(input: &TaskInput) -> Option<Due> {
    if let Some(datetime) = &input.due_datetime {
        return Some(Due {
            date: datetime.chars().take(10).collect(),
            is_recurring: false,
            datetime: Some(datetime.clone()),
            string: datetime.clone(),
            timezone: None,
        });
    }
    if let Some(date) = &input.due_date {
        return Some(Due {
            date: date.clone(),
            is_recurring: false,
            datetime: None,
            string: date.clone(),
            timezone: None,
        });
    }
    input.due_string.as_ref().map(|string| Due {
        date: Utc::now().date_naive().to_string(),
        is_recurring: string.starts_with("every"),
        datetime: None,
        string: string.clone(),
        timezone: None,
    })
}

fn duration_from(input: &TaskInput) -> ApiResult<Option<Duration>> {
    match (input.duration, &input.duration_unit) {
        (None, None) => Ok(None),
        (Some(amount), Some(unit)) if amount > 0 && (unit == "minute" || unit == "day") => {
            Ok(Some(Duration {
                amount,
                unit: unit.clone(),
            }))
        }
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<TaskInput>,
) -> ApiResult<Json<Task>> {
    let due = due_from(&input);
    let duration = duration_from(&input)?;
    let content = required(input.content)?;
    let priority = input.priority.unwrap_or(1);
    if !(1..=4).contains(&priority) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = state.db.write().await;
    let project_id = match (&input.section_id, input.project_id) {
        (Some(section_id), _) => store
            .sections
            .get(section_id)
            .map(|s| s.project_id.clone())
            .ok_or(StatusCode::BAD_REQUEST)?,
        (None, Some(project_id)) if store.projects.contains_key(&project_id) => project_id,
        (None, Some(_)) => return Err(StatusCode::BAD_REQUEST),
        (None, None) => "inbox".to_string(),
    };
    let id = new_id();
    let task = Task {
        url: format!("https://todoist.com/showTask?id={id}"),
        id: id.clone(),
        order: next_order(store.tasks.values().map(|t| &t.order)),
        project_id,
        section_id: input.section_id,
        parent_id: input.parent_id,
        content,
        description: input.description.unwrap_or_default(),
        is_completed: false,
        labels: input.labels.unwrap_or_default(),
        priority,
        assignee_id: input.assignee_id,
        assigner_id: None,
        comment_count: 0,
        due,
        duration,
        created_at: Utc::now(),
    };
    store.tasks.insert(id, task.clone());
    Ok(Json(task))
}

async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Task>> {
    let store = state.db.read().await;
    store.tasks.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> ApiResult<Json<Task>> {
    let due = due_from(&input);
    let duration = duration_from(&input)?;
    let mut store = state.db.write().await;
    let task = store.tasks.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(content) = input.content {
        task.content = content;
    }
    if let Some(description) = input.description {
        task.description = description;
    }
    if let Some(labels) = input.labels {
        task.labels = labels;
    }
    if let Some(priority) = input.priority {
        if !(1..=4).contains(&priority) {
            return Err(StatusCode::BAD_REQUEST);
        }
        task.priority = priority;
    }
    if let Some(assignee_id) = input.assignee_id {
        task.assignee_id = Some(assignee_id);
    }
    if due.is_some() {
        task.due = due;
    }
    if duration.is_some() {
        task.duration = duration;
    }
    Ok(Json(task.clone()))
}

async fn set_completed(state: &AppState, id: &str, completed: bool) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    let task = store.tasks.get_mut(id).ok_or(StatusCode::NOT_FOUND)?;
    task.is_completed = completed;
    Ok(StatusCode::NO_CONTENT)
}

async fn close_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    set_completed(&state, &id, true).await
}

async fn reopen_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    set_completed(&state, &id, false).await
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store.tasks.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store
        .comments
        .retain(|_, c| c.task_id.as_deref() != Some(id.as_str()));
    Ok(StatusCode::NO_CONTENT)
}

// --- comments ---

async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentQuery>,
) -> ApiResult<Json<Vec<Comment>>> {
    if query.task_id.is_none() && query.project_id.is_none() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let store = state.db.read().await;
    let mut comments: Vec<Comment> = store
        .comments
        .values()
        .filter(|c| match (&query.task_id, &query.project_id) {
            (Some(task_id), _) => c.task_id.as_ref() == Some(task_id),
            (None, Some(project_id)) => c.project_id.as_ref() == Some(project_id),
            (None, None) => false,
        })
        .cloned()
        .collect();
    comments.sort_by_key(|c| c.posted_at);
    Ok(Json(comments))
}

async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CommentInput>,
) -> ApiResult<Json<Comment>> {
    let content = required(input.content)?;
    let mut store = state.db.write().await;
    match (&input.task_id, &input.project_id) {
        (Some(task_id), None) => {
            let task = store.tasks.get_mut(task_id).ok_or(StatusCode::BAD_REQUEST)?;
            task.comment_count += 1;
        }
        (None, Some(project_id)) => {
            let project = store
                .projects
                .get_mut(project_id)
                .ok_or(StatusCode::BAD_REQUEST)?;
            project.comment_count += 1;
        }
        _ => return Err(StatusCode::BAD_REQUEST),
    }
    let comment = Comment {
        id: new_id(),
        task_id: input.task_id,
        project_id: input.project_id,
        content,
        posted_at: Utc::now(),
        attachment: input.attachment,
    };
    store.comments.insert(comment.id.clone(), comment.clone());
    Ok(Json(comment))
}

async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Comment>> {
    let store = state.db.read().await;
    store.comments.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CommentInput>,
) -> ApiResult<Json<Comment>> {
    let mut store = state.db.write().await;
    let comment = store.comments.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(content) = input.content {
        comment.content = content;
    }
    Ok(Json(comment.clone()))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store
        .comments
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- labels ---

async fn list_labels(State(state): State<AppState>) -> Json<Vec<Label>> {
    let store = state.db.read().await;
    let mut labels: Vec<Label> = store.labels.values().cloned().collect();
    labels.sort_by_key(|l| l.order);
    Json(labels)
}

async fn create_label(
    State(state): State<AppState>,
    Json(input): Json<LabelInput>,
) -> ApiResult<Json<Label>> {
    let name = required(input.name)?;
    let mut store = state.db.write().await;
    if store.labels.values().any(|l| l.name == name) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let label = Label {
        id: new_id(),
        name,
        color: input.color.unwrap_or_else(|| "charcoal".to_string()),
        order: input
            .order
            .unwrap_or_else(|| next_order(store.labels.values().map(|l| &l.order))),
        is_favorite: input.is_favorite.unwrap_or(false),
    };
    store.labels.insert(label.id.clone(), label.clone());
    Ok(Json(label))
}

async fn get_label(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Label>> {
    let store = state.db.read().await;
    store.labels.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_label(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<LabelInput>,
) -> ApiResult<Json<Label>> {
    let mut store = state.db.write().await;
    let label = store.labels.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        label.name = name;
    }
    if let Some(color) = input.color {
        label.color = color;
    }
    if let Some(order) = input.order {
        label.order = order;
    }
    if let Some(is_favorite) = input.is_favorite {
        label.is_favorite = is_favorite;
    }
    Ok(Json(label.clone()))
}

async fn delete_label(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store
        .labels
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- shared labels ---

/// Distinct label names used on tasks, sorted.
async fn list_shared_labels(
    State(state): State<AppState>,
    Query(query): Query<SharedLabelQuery>,
) -> Json<Vec<String>> {
    let store = state.db.read().await;
    let mut names: Vec<String> = store
        .tasks
        .values()
        .flat_map(|t| t.labels.iter())
        .filter(|name| !query.omit_personal || !store.labels.values().any(|l| &l.name == *name))
        .cloned()
        .collect();
    names.sort();
    names.dedup();
    Json(names)
}

async fn rename_shared_label(
    State(state): State<AppState>,
    Json(input): Json<RenameShared>,
) -> ApiResult<StatusCode> {
    if input.new_name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = state.db.write().await;
    for task in store.tasks.values_mut() {
        for label in task.labels.iter_mut().filter(|l| **l == input.name) {
            *label = input.new_name.clone();
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_shared_label(
    State(state): State<AppState>,
    Json(input): Json<RemoveShared>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    for task in store.tasks.values_mut() {
        task.labels.retain(|l| *l != input.name);
    }
    Ok(StatusCode::NO_CONTENT)
}
