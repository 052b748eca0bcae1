//! Display implementations for the domain models.
//!
//! Rendering is plain text with a fixed layout:
//!
//! ```text
//! ---- Today's Todos ----
//! [X] Buy milk
//! [ ] Clean room
//! ```
//!
//! - [`models`]: `Display` for [`Todo`](crate::Todo),
//!   [`TodoList`](crate::TodoList), [`TodoStatus`](crate::TodoStatus) and
//!   [`ListSummary`](crate::ListSummary)

pub mod models;
