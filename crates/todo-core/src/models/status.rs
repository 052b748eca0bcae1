//! Completion status of a todo item.

use std::str::FromStr;

/// Marker rendered for a completed todo.
pub const DONE_MARKER: char = 'X';

/// Marker rendered for a todo that is not yet done.
pub const UNDONE_MARKER: char = ' ';

/// Type-safe view of a todo's done flag.
///
/// There are exactly two states; an item is either done or it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TodoStatus {
    /// Todo is pending completion
    #[default]
    Todo,

    /// Todo has been completed
    Done,
}

impl From<bool> for TodoStatus {
    fn from(done: bool) -> Self {
        if done {
            TodoStatus::Done
        } else {
            TodoStatus::Todo
        }
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" | "undone" => Ok(TodoStatus::Todo),
            "done" => Ok(TodoStatus::Done),
            _ => Err(format!("Invalid todo status: {s}")),
        }
    }
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::Done => "done",
        }
    }

    /// Single-character marker used in rendered output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::models::TodoStatus;
    ///
    /// assert_eq!(TodoStatus::Done.marker(), 'X');
    /// assert_eq!(TodoStatus::Todo.marker(), ' ');
    /// ```
    pub fn marker(&self) -> char {
        match self {
            TodoStatus::Done => DONE_MARKER,
            TodoStatus::Todo => UNDONE_MARKER,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TodoStatus::Done)
    }
}
