//! Local, keyed mirror of the server's todos.
//!
//! The store makes no attempt at reconciliation: entries are replaced,
//! merged, or removed by id, and nothing else.

use std::collections::HashMap;

use crate::types::Todo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: HashMap<String, Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key a list by id. When the list repeats an id the later entry wins.
    pub fn from_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            todos: todos.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// Drop everything and mirror `todos` instead.
    pub fn replace_all(&mut self, todos: impl IntoIterator<Item = Todo>) {
        *self = Self::from_todos(todos);
    }

    /// Insert or replace the entry for `todo.id`.
    pub fn upsert(&mut self, todo: Todo) {
        self.todos.insert(todo.id.clone(), todo);
    }

    /// Overwrite content and done flag of an existing entry. Returns false
    /// when the id is not present.
    pub fn merge(&mut self, id: &str, content: &str, done: bool) -> bool {
        match self.todos.get_mut(id) {
            Some(todo) => {
                todo.content = content.to_string();
                todo.done = done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Todo> {
        self.todos.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.todos.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Current values in display order: oldest first, ties broken by id.
    pub fn sorted(&self) -> Vec<&Todo> {
        let mut todos: Vec<&Todo> = self.todos.values().collect();
        todos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        todos
    }
}
