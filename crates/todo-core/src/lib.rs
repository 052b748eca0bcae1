//! Core library for the todo list manager.
//!
//! This crate provides the in-memory data model: [`Todo`] items, the ordered
//! [`TodoList`] that owns them, completion filters, and the error type shared
//! by every fallible operation.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data with query and mutation
//!   methods
//! - **Display** ([`display`]): [`std::fmt::Display`] implementations that
//!   produce the textual list rendering
//!
//! # Quick Start
//!
//! ```rust
//! use todo_core::{Todo, TodoList};
//!
//! # fn main() -> todo_core::Result<()> {
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk")?);
//! list.add(Todo::new("Clean room")?.with_description("Vacuum too"));
//!
//! list.mark_done_at(0)?;
//! assert!(!list.all_done());
//!
//! let pending = list.all_not_done_items();
//! assert_eq!(pending.len(), 1);
//! println!("{list}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{Result, TodoError};
pub use models::{
    ListSummary, StatusFilter, Todo, TodoList, TodoStatus, DONE_MARKER, UNDONE_MARKER,
};
