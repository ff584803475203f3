//! Reference REST server for the todo list.
//!
//! Serves `/api/v1/todos` from an in-memory list. Todos keep insertion order;
//! deletes do not reorder the remaining items. Every failure, including
//! unknown routes and unsupported methods, is answered with a JSON
//! `{"message": ...}` body so clients can show it verbatim.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub content: String,
    pub done: bool,
    pub created_at: i64,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub content: String,
    pub done: bool,
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("todo {0} not found")]
    NotFound(String),

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("no route for {0}")]
    NoRoute(String),

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound(_) | AppError::NoRoute(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };
        let body = serde_json::json!({ "message": self.to_string() });
        (status, Json(body)).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    let todos = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo));
    Router::new()
        .nest("/api/v1", todos)
        .fallback(no_route)
        .layer(middleware::from_fn(method_not_allowed_as_json))
        .layer(middleware::from_fn(allow_all_origins))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn no_route(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NoRoute(uri.path().to_string())
}

/// Give the router's bodiless 405 the same `{message}` shape as handler
/// errors. The `Allow` header is carried over.
async fn method_not_allowed_as_json(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}

/// Permissive CORS so a browser front end on another origin can call the API.
async fn allow_all_origins(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    response
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn create_todo(
    State(db): State<Db>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(input) = input?;
    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        content: input.content,
        done: false,
        created_at: chrono::Utc::now().timestamp(),
    };
    db.write().await.push(todo.clone());
    info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, AppError> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(input) = input?;
    let mut todos = db.write().await;
    let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
        return Err(AppError::NotFound(id));
    };
    todo.content = input.content;
    todo.done = input.done;
    info!(id = %todo.id, done = todo.done, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, AppError> {
    let mut todos = db.write().await;
    let Some(idx) = todos.iter().position(|t| t.id == id) else {
        return Err(AppError::NotFound(id));
    };
    todos.remove(idx);
    info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
