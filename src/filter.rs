//! Filter Utilities
//!
//! Pure projection of the full collection onto the active filter.

use crate::models::{Todo, TodoFilter};

/// Todos visible under `filter`, in fetch order
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}
