//! Display implementations for domain models.
//!
//! These are kept apart from the model definitions so the models carry no
//! presentation logic. The layout is fixed: a marker column one character
//! wide, a dashed header for lists, and no trailing newline after the last
//! item.

use std::fmt;

use crate::models::{ListSummary, Todo, TodoList, TodoStatus};

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status().marker(), self.title())
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title())?;

        for (position, todo) in self.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "{todo}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{} done", self.title, self.done, self.total)
    }
}
