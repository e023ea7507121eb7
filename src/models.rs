//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

/// Todo record (matches `/todos` payloads)
///
/// Extra fields sent by the service (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Human label for the completion flag
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Open" }
    }

    /// Glyph shown next to the title in list rows
    pub fn glyph(&self) -> &'static str {
        if self.completed { "✅" } else { "⬜" }
    }
}

/// Active filter of the list view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TodoFilter {
    #[default]
    All,
    Open,
    Completed,
}

impl TodoFilter {
    /// Filter options in display order
    pub const OPTIONS: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Open, TodoFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Open => "Open",
            TodoFilter::Completed => "Completed",
        }
    }

    /// Whether a todo belongs to this filter's subset
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Open => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}
