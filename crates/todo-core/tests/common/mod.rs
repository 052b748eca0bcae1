use todo_core::{Todo, TodoList};

/// Helper function to create the three-item "Today's Todos" list, all undone
pub fn create_todays_todos() -> TodoList {
    let mut list = TodoList::new("Today's Todos");
    for title in ["Buy milk", "Clean room", "Go to gym"] {
        list.add(Todo::new(title).expect("Failed to create todo"));
    }
    list
}
