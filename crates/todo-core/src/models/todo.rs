//! Todo model definition and related functionality.

use super::TodoStatus;
use crate::error::{Result, TodoError};

/// A single task record.
///
/// Two todos are equal when their title, description, and done flag all
/// match. The title is never empty; both the constructor and
/// [`Todo::set_title`] reject blank titles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Todo {
    title: String,
    description: String,
    done: bool,
}

impl Todo {
    /// Creates a pending todo with an empty description.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if `title` is empty or only
    /// whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::Todo;
    ///
    /// let todo = Todo::new("Buy milk").unwrap();
    /// assert_eq!(todo.title(), "Buy milk");
    /// assert_eq!(todo.description(), "");
    /// assert!(!todo.is_done());
    ///
    /// assert!(Todo::new("   ").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            title,
            description: String::new(),
            done: false,
        })
    }

    /// Sets the description, consuming and returning the todo.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if `title` is blank; the existing
    /// title is kept in that case.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn status(&self) -> TodoStatus {
        TodoStatus::from(self.done)
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodoError::invalid_input("title").with_reason("must not be empty"));
    }
    Ok(())
}
