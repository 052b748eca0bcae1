//! Filter types for selecting todos by completion status.

use std::str::FromStr;

use super::Todo;

/// Completion status filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every todo regardless of status
    #[default]
    All,

    /// Only completed todos
    Done,

    /// Only todos still pending
    NotDone,
}

impl StatusFilter {
    /// Returns true when `todo` passes this filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Done => todo.is_done(),
            StatusFilter::NotDone => !todo.is_done(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "done" => Ok(StatusFilter::Done),
            "not-done" | "not_done" | "notdone" | "undone" => Ok(StatusFilter::NotDone),
            _ => Err(format!("Invalid status filter: {s}")),
        }
    }
}
