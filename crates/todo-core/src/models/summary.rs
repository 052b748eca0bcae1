//! Summary counts for a todo list.

/// Completion counts for a list, without the todos themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    /// Title of the summarized list
    pub title: String,

    /// Number of todos in the list
    pub total: usize,

    /// Number of completed todos
    pub done: usize,

    /// Number of todos still pending
    pub pending: usize,
}

impl ListSummary {
    /// True when no todo is pending, including the empty list.
    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }
}
