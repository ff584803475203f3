use std::io::{self, Write};

use todo_core::{ApiError, Notifier, Todo};

/// Prints each failure once to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, error: &ApiError) {
        eprintln!("error: {}", error.user_message());
    }
}

pub fn render(todos: &[&Todo], out: &mut impl Write) -> io::Result<()> {
    if todos.is_empty() {
        return writeln!(out, "no todos");
    }
    for todo in todos {
        let mark = if todo.done { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {}  ({})", todo.content, todo.id)?;
    }
    Ok(())
}
