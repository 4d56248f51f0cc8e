use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    /// Free-form subtask objects, stored and returned verbatim.
    #[serde(default)]
    pub subtasks: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtasks: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub subtasks: Option<Vec<serde_json::Value>>,
}

/// Ids are sequential and never reused; todos keep insertion order so
/// list responses are stable.
#[derive(Default)]
pub struct Store {
    next_id: u64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/{id}/", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: input.title,
        description: input.description,
        // completed is server-assigned at creation, whatever the payload says
        completed: false,
        priority: input.priority,
        category: input.category.unwrap_or_else(|| "General".to_string()),
        due_date: input.due_date,
        subtasks: input.subtasks,
    };
    store.todos.push(todo.clone());
    log::debug!("created todo {}", todo.id);
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store
        .todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(description) = input.description {
        todo.description = description;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    if let Some(priority) = input.priority {
        todo.priority = priority;
    }
    if let Some(category) = input.category {
        todo.category = category;
    }
    if let Some(due_date) = input.due_date {
        todo.due_date = Some(due_date);
    }
    if let Some(subtasks) = input.subtasks {
        todo.subtasks = subtasks;
    }
    log::debug!("updated todo {id}");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != id);
    if store.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    log::debug!("deleted todo {id}");
    Ok(StatusCode::NO_CONTENT)
}
