//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the `todo-server` crate. Integration tests catch schema drift between
//! the two. Ids are opaque strings: the server assigns them and the client
//! never interprets their shape.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub content: String,
    pub done: bool,
    /// Unix seconds, assigned by the server. Older servers omit it.
    #[serde(default)]
    pub created_at: i64,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

/// Request payload for updating an existing todo. The server replaces both
/// fields, so callers always send the full current content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub content: String,
    pub done: bool,
}

/// Body the server attaches to failed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
