//! Todo list model: an ordered, titled collection of todos.

use std::ops::Index;

use super::{ListSummary, StatusFilter, Todo};
use crate::error::{Result, TodoError};

/// An ordered collection of [`Todo`] items with a title.
///
/// Insertion order is preserved and items are never deduplicated. The list
/// owns its items: [`TodoList::add`] moves a todo in, and stored items are
/// only mutated through the list itself.
///
/// Only `Todo` values can be added; anything else is rejected at compile
/// time:
///
/// ```compile_fail
/// use todo_core::TodoList;
///
/// let mut list = TodoList::new("Today's Todos");
/// list.add(1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Removes and returns the first todo.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::EmptyList` if the list has no items.
    pub fn remove_first(&mut self) -> Result<Todo> {
        if self.todos.is_empty() {
            return Err(TodoError::EmptyList {
                operation: "remove first item",
            });
        }
        Ok(self.todos.remove(0))
    }

    /// Removes and returns the last todo.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::EmptyList` if the list has no items.
    pub fn remove_last(&mut self) -> Result<Todo> {
        self.todos.pop().ok_or(TodoError::EmptyList {
            operation: "remove last item",
        })
    }

    /// Returns true when every todo is done. An empty list is all done.
    pub fn all_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Appends a todo to the end of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::{Todo, TodoList};
    ///
    /// # fn main() -> todo_core::Result<()> {
    /// let mut list = TodoList::new("Today's Todos");
    /// list.add(Todo::new("Buy milk")?).add(Todo::new("Clean room")?);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.last().map(|todo| todo.title()), Some("Clean room"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn add(&mut self, todo: Todo) -> &mut Self {
        self.todos.push(todo);
        self
    }

    /// Returns the todo at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::IndexOutOfRange` if `index >= len()`.
    pub fn item_at(&self, index: usize) -> Result<&Todo> {
        let len = self.todos.len();
        self.todos
            .get(index)
            .ok_or_else(|| TodoError::index_out_of_range(index, len))
    }

    /// Mutable counterpart of [`TodoList::item_at`].
    ///
    /// # Errors
    ///
    /// Returns `TodoError::IndexOutOfRange` if `index >= len()`.
    pub fn item_at_mut(&mut self, index: usize) -> Result<&mut Todo> {
        let len = self.todos.len();
        self.todos
            .get_mut(index)
            .ok_or_else(|| TodoError::index_out_of_range(index, len))
    }

    /// # Errors
    ///
    /// Returns `TodoError::IndexOutOfRange` if `index >= len()`.
    pub fn mark_done_at(&mut self, index: usize) -> Result<()> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `TodoError::IndexOutOfRange` if `index >= len()`.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<()> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    pub fn mark_all_undone(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_undone);
    }

    /// Removes and returns the todo physically at `index`.
    ///
    /// Equal todos elsewhere in the list are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo> {
        let len = self.todos.len();
        if index >= len {
            return Err(TodoError::index_out_of_range(index, len));
        }
        Ok(self.todos.remove(index))
    }

    /// Returns an independent copy of the todos in order.
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Calls `visitor` once per todo in order and returns the list for
    /// chaining.
    pub fn for_each<F>(&self, visitor: F) -> &Self
    where
        F: FnMut(&Todo),
    {
        self.todos.iter().for_each(visitor);
        self
    }

    /// Returns a new list with the same title holding copies of the todos
    /// for which `predicate` returns true, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::{Todo, TodoList};
    ///
    /// # fn main() -> todo_core::Result<()> {
    /// let mut list = TodoList::new("Errands");
    /// list.add(Todo::new("Buy milk")?).add(Todo::new("Post letter")?);
    ///
    /// let milk = list.filter(|todo| todo.title().contains("milk"));
    /// assert_eq!(milk.title(), "Errands");
    /// assert_eq!(milk.len(), 1);
    /// assert_eq!(list.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        TodoList {
            title: self.title.clone(),
            todos: self
                .todos
                .iter()
                .filter(|todo| predicate(*todo))
                .cloned()
                .collect(),
        }
    }

    pub fn filter_status(&self, filter: StatusFilter) -> TodoList {
        self.filter(|todo| filter.matches(todo))
    }

    pub fn all_done_items(&self) -> TodoList {
        self.filter_status(StatusFilter::Done)
    }

    pub fn all_not_done_items(&self) -> TodoList {
        self.filter_status(StatusFilter::NotDone)
    }

    /// Returns the first todo whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    /// Marks the first todo whose title or description equals `text` as
    /// done and returns it. Returns `None` and changes nothing when no todo
    /// matches.
    pub fn mark_done(&mut self, text: &str) -> Option<&Todo> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.title() == text || todo.description() == text)?;
        todo.mark_done();
        Some(&*todo)
    }

    pub fn summary(&self) -> ListSummary {
        let done = self.todos.iter().filter(|todo| todo.is_done()).count();
        ListSummary {
            title: self.title.clone(),
            total: self.todos.len(),
            done,
            pending: self.todos.len() - done,
        }
    }
}

impl Index<usize> for TodoList {
    type Output = Todo;

    fn index(&self, index: usize) -> &Self::Output {
        &self.todos[index]
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, iter: I) {
        self.todos.extend(iter);
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
