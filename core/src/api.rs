//! The configured API client that front ends hold for their lifetime.
//!
//! `ApiClient` pairs a `TodoClient` with a `Transport`. It is built once at
//! start-up and passed by reference to whatever needs it; construction is the
//! only initialization step, so there is no "called before init" state.
//! Failures are logged and returned, never displayed.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{CreateTodo, Todo, UpdateTodo};

pub struct ApiClient<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            client: TodoClient::new(&config.base_path()),
            transport,
        }
    }

    /// The resolved API root, `<origin>/api/v1`.
    pub fn base_path(&self) -> &str {
        self.client.base_path()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_todos();
        self.round_trip(req, |c, resp| c.parse_list_todos(resp))
    }

    pub fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
        let req = self.client.build_get_todo(id);
        self.round_trip(req, |c, resp| c.parse_get_todo(resp))
    }

    pub fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let req = self.client.build_create_todo(input)?;
        self.round_trip(req, |c, resp| c.parse_create_todo(resp))
    }

    pub fn update_todo(&self, id: &str, input: &UpdateTodo) -> Result<Option<Todo>, ApiError> {
        let req = self.client.build_update_todo(id, input)?;
        self.round_trip(req, |c, resp| c.parse_update_todo(resp))
    }

    pub fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let req = self.client.build_delete_todo(id);
        self.round_trip(req, |c, resp| c.parse_delete_todo(resp))
    }

    fn round_trip<R>(
        &self,
        req: HttpRequest,
        parse: impl FnOnce(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let method = req.method.as_str();
        let path = req.path.clone();
        debug!(method, %path, "sending request");
        let result = self
            .transport
            .execute(req)
            .and_then(|resp| {
                debug!(method, %path, status = resp.status, "received response");
                parse(&self.client, resp)
            });
        if let Err(err) = &result {
            warn!(method, %path, error = %err, "request failed");
        }
        result
    }
}
