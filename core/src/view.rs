//! View model behind the todo list front end.
//!
//! # Design
//! `TodoList` borrows the application's `ApiClient` and owns the local
//! `TodoStore`. Every operation is one call through the client followed by a
//! merge into the store. A failed call leaves the store untouched, is handed
//! to the `Notifier` exactly once, and is returned to the caller, which must
//! not report it again.
//!
//! Operations take `&mut self`, so two requests against the same view can
//! never be in flight at once and results are applied in submission order.

use tracing::{debug, info};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::store::TodoStore;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Presents failures to the user.
pub trait Notifier {
    fn notify(&self, error: &ApiError);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, error: &ApiError) {
        (**self).notify(error)
    }
}

/// Discards every failure. For callers that present errors themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _error: &ApiError) {}
}

pub struct TodoList<'a, T, N> {
    api: &'a ApiClient<T>,
    notifier: N,
    store: TodoStore,
}

impl<'a, T: Transport, N: Notifier> TodoList<'a, T, N> {
    /// An empty view; call [`TodoList::load`] to populate it.
    pub fn new(api: &'a ApiClient<T>, notifier: N) -> Self {
        Self {
            api,
            notifier,
            store: TodoStore::new(),
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Current todos in display order.
    pub fn todos(&self) -> Vec<&Todo> {
        self.store.sorted()
    }

    /// Fetch every todo and replace local state wholesale. Returns the number
    /// of todos now held.
    pub fn load(&mut self) -> Result<usize, ApiError> {
        let todos = self.report(self.api.list_todos())?;
        self.store.replace_all(todos);
        debug!(count = self.store.len(), "loaded todos");
        Ok(self.store.len())
    }

    /// Create a todo from trimmed `content`. Blank input sends nothing and
    /// yields `Ok(None)`.
    pub fn add(&mut self, content: &str) -> Result<Option<Todo>, ApiError> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }
        let input = CreateTodo {
            content: content.to_string(),
        };
        let todo = self.report(self.api.create_todo(&input))?;
        info!(id = %todo.id, "created todo");
        self.store.upsert(todo.clone());
        Ok(Some(todo))
    }

    /// Set the done flag of a locally known todo, sending its full current
    /// content along. Returns the entry as stored afterwards.
    pub fn toggle(&mut self, id: &str, done: bool) -> Result<Todo, ApiError> {
        let Some(current) = self.store.get(id) else {
            return self.report(Err(ApiError::NotFound {
                message: Some(format!("todo {id} is not in the list")),
            }));
        };
        let input = UpdateTodo {
            content: current.content.clone(),
            done,
        };
        let echoed = self.report(self.api.update_todo(id, &input))?;
        let (content, done) = match &echoed {
            Some(todo) => (todo.content.as_str(), todo.done),
            None => (input.content.as_str(), input.done),
        };
        self.store.merge(id, content, done);
        info!(id, done, "updated todo");
        self.store
            .get(id)
            .cloned()
            .ok_or(ApiError::NotFound { message: None })
    }

    /// Delete a todo and drop exactly that id from local state.
    pub fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.report(self.api.delete_todo(id))?;
        self.store.remove(id);
        info!(id, "deleted todo");
        Ok(())
    }

    fn report<R>(&self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if let Err(err) = &result {
            self.notifier.notify(err);
        }
        result
    }
}
