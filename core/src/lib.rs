//! Client core for the todo-list service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `ApiClient` pairs it
//! with a `Transport` and the configured base path, and `TodoList` keeps a
//! keyed local mirror of the server's todos on top of that.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the base path.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and testable with scripted responses.
//! - `ApiClient` is an ordinary value constructed once and passed by
//!   reference; there is no global instance.
//! - Failures are structured `ApiError` values. Presentation is the job of
//!   the `Notifier` a front end hands to `TodoList`.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use api::ApiClient;
pub use client::TodoClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::TodoStore;
pub use types::{CreateTodo, ErrorBody, Todo, UpdateTodo};
pub use view::{Notifier, SilentNotifier, TodoList};
