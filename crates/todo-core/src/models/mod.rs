//! Data models for todos and todo lists.
//!
//! [`Todo`] is a single task record; [`TodoList`] is the ordered collection
//! that owns them. Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use todo_core::models::{Todo, TodoList};
//!
//! # fn main() -> todo_core::Result<()> {
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk")?)
//!     .add(Todo::new("Clean room")?)
//!     .add(Todo::new("Go to gym")?);
//!
//! list.mark_done("Buy milk");
//!
//! assert_eq!(
//!     list.to_string(),
//!     "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room\n[ ] Go to gym"
//! );
//! # Ok(())
//! # }
//! ```

pub mod filters;
pub mod list;
pub mod status;
pub mod summary;
pub mod todo;

#[cfg(test)]
mod tests;

pub use filters::StatusFilter;
pub use list::TodoList;
pub use status::{TodoStatus, DONE_MARKER, UNDONE_MARKER};
pub use summary::ListSummary;
pub use todo::Todo;
