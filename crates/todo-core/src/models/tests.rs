#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use crate::{
        error::TodoError,
        models::{StatusFilter, Todo, TodoList, TodoStatus, DONE_MARKER, UNDONE_MARKER},
    };

    fn create_test_todo(title: &str) -> Todo {
        Todo::new(title).expect("Failed to create todo")
    }

    fn create_test_list() -> TodoList {
        let mut list = TodoList::new("Test List");
        list.add(create_test_todo("First").with_description("alpha"))
            .add(create_test_todo("Second").with_description("beta"))
            .add(create_test_todo("Third").with_description("gamma"));
        list
    }

    fn titles(list: &TodoList) -> Vec<&str> {
        list.iter().map(Todo::title).collect()
    }

    // Todo

    #[test]
    fn test_todo_new_defaults() {
        let todo = create_test_todo("Buy milk");
        assert_eq!(todo.title(), "Buy milk");
        assert_eq!(todo.description(), "");
        assert!(!todo.is_done());
        assert_eq!(todo.status(), TodoStatus::Todo);
    }

    #[test]
    fn test_todo_rejects_blank_title() {
        assert!(matches!(
            Todo::new(""),
            Err(TodoError::InvalidInput { ref field, .. }) if field == "title"
        ));
        assert!(Todo::new(" \t\n").is_err());
    }

    #[test]
    fn test_todo_set_title_keeps_old_title_on_error() {
        let mut todo = create_test_todo("Original");
        assert!(todo.set_title("  ").is_err());
        assert_eq!(todo.title(), "Original");

        todo.set_title("Renamed").expect("valid title");
        assert_eq!(todo.title(), "Renamed");
    }

    #[test]
    fn test_todo_set_description() {
        let mut todo = create_test_todo("Task");
        todo.set_description("details");
        assert_eq!(todo.description(), "details");
    }

    #[test]
    fn test_todo_mark_done_is_idempotent() {
        let mut todo = create_test_todo("Task");
        todo.mark_done();
        todo.mark_done();
        assert!(todo.is_done());
        assert_eq!(todo.status(), TodoStatus::Done);

        todo.mark_undone();
        todo.mark_undone();
        assert!(!todo.is_done());
    }

    #[test]
    fn test_todo_equality_is_structural() {
        let a = create_test_todo("Same").with_description("desc");
        let mut b = create_test_todo("Same").with_description("desc");
        assert_eq!(a, b);

        b.mark_done();
        assert_ne!(a, b);

        let c = create_test_todo("Same").with_description("other");
        assert_ne!(a, c);

        let d = create_test_todo("Different").with_description("desc");
        assert_ne!(a, d);
    }

    // TodoStatus

    #[test]
    fn test_status_markers() {
        assert_eq!(TodoStatus::Done.marker(), DONE_MARKER);
        assert_eq!(TodoStatus::Todo.marker(), UNDONE_MARKER);
        assert_eq!(TodoStatus::from(true), TodoStatus::Done);
        assert_eq!(TodoStatus::from(false), TodoStatus::Todo);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(TodoStatus::from_str("DONE"), Ok(TodoStatus::Done));
        assert_eq!(TodoStatus::from_str("todo"), Ok(TodoStatus::Todo));
        assert_eq!(TodoStatus::from_str("undone"), Ok(TodoStatus::Todo));
        assert!(TodoStatus::from_str("in_progress").is_err());
    }

    #[test]
    fn test_status_is_done() {
        assert!(TodoStatus::Done.is_done());
        assert!(!TodoStatus::Todo.is_done());
        assert!(!create_test_todo("Task").status().is_done());
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("all".parse(), Ok(StatusFilter::All));
        assert_eq!("Done".parse(), Ok(StatusFilter::Done));
        assert_eq!("not-done".parse(), Ok(StatusFilter::NotDone));
        assert!("maybe".parse::<StatusFilter>().is_err());
    }

    // TodoList: size and ends

    #[test]
    fn test_empty_list() {
        let list = TodoList::new("Empty");
        assert_eq!(list.title(), "Empty");
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.all_done());
    }

    #[test]
    fn test_set_list_title() {
        let mut list = create_test_list();
        list.set_title("Renamed");
        assert_eq!(list.title(), "Renamed");
        assert_eq!(list.filter(|_| true).title(), "Renamed");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_first_and_last() {
        let list = create_test_list();
        assert_eq!(list.first().map(Todo::title), Some("First"));
        assert_eq!(list.last().map(Todo::title), Some("Third"));
    }

    #[test]
    fn test_add_appends_and_chains() {
        let mut list = TodoList::new("Chain");
        let todo = create_test_todo("One");
        list.add(todo.clone()).add(create_test_todo("Two"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.item_at(0), Ok(&todo));
        assert_eq!(titles(&list), vec!["One", "Two"]);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut list = TodoList::new("Dupes");
        list.add(create_test_todo("Same")).add(create_test_todo("Same"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut list = create_test_list();
        list.extend(["Fourth", "Fifth"].into_iter().map(create_test_todo));
        assert_eq!(
            titles(&list),
            vec!["First", "Second", "Third", "Fourth", "Fifth"]
        );
    }

    #[test]
    fn test_remove_first_and_last() {
        let mut list = create_test_list();

        let first = list.remove_first().expect("list not empty");
        assert_eq!(first.title(), "First");

        let last = list.remove_last().expect("list not empty");
        assert_eq!(last.title(), "Third");

        assert_eq!(titles(&list), vec!["Second"]);
    }

    #[test]
    fn test_remove_from_empty_list_errors() {
        let mut list = TodoList::new("Empty");
        assert!(matches!(list.remove_first(), Err(TodoError::EmptyList { .. })));
        assert!(matches!(list.remove_last(), Err(TodoError::EmptyList { .. })));
        assert!(list.is_empty());
    }

    // TodoList: index access

    #[test]
    fn test_item_at() {
        let list = create_test_list();
        assert_eq!(list.item_at(1).map(Todo::title), Ok("Second"));
        assert_eq!(list[2].title(), "Third");
    }

    #[test]
    fn test_item_at_out_of_range() {
        let list = create_test_list();
        assert_eq!(
            list.item_at(3),
            Err(TodoError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_item_at_mut_edits_in_place() {
        let mut list = create_test_list();
        list.item_at_mut(0)
            .expect("index in range")
            .set_description("edited");
        assert_eq!(list[0].description(), "edited");
    }

    #[test]
    fn test_mark_done_at_and_undone_at() {
        let mut list = create_test_list();

        list.mark_done_at(1).expect("index in range");
        assert!(list[1].is_done());
        assert!(!list[0].is_done());

        list.mark_undone_at(1).expect("index in range");
        assert!(!list[1].is_done());
    }

    #[test]
    fn test_mark_at_out_of_range_changes_nothing() {
        let mut list = create_test_list();
        let before = list.clone();

        assert!(matches!(
            list.mark_done_at(10),
            Err(TodoError::IndexOutOfRange { index: 10, len: 3 })
        ));
        assert!(list.mark_undone_at(10).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_mark_all_done_and_undone() {
        let mut list = create_test_list();
        assert!(!list.all_done());

        list.mark_all_done();
        assert!(list.all_done());
        assert!(list.iter().all(Todo::is_done));

        list.mark_all_undone();
        assert!(list.iter().all(|todo| !todo.is_done()));
    }

    #[test]
    fn test_all_done_requires_every_item() {
        let mut list = create_test_list();
        list.mark_done_at(0).expect("index in range");
        list.mark_done_at(1).expect("index in range");
        assert!(!list.all_done());

        list.mark_done_at(2).expect("index in range");
        assert!(list.all_done());
    }

    // TodoList: removal by position

    #[test]
    fn test_remove_at() {
        let mut list = create_test_list();
        let removed = list.remove_at(1).expect("index in range");

        assert_eq!(removed.title(), "Second");
        assert_eq!(titles(&list), vec!["First", "Third"]);
    }

    #[test]
    fn test_remove_at_targets_position_not_value() {
        let mut list = TodoList::new("Dupes");
        list.add(create_test_todo("Same").with_description("twin"))
            .add(create_test_todo("Other"))
            .add(create_test_todo("Same").with_description("twin"));
        assert_eq!(list[0], list[2]);

        let removed = list.remove_at(2).expect("index in range");
        assert_eq!(removed.title(), "Same");
        assert_eq!(titles(&list), vec!["Same", "Other"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = create_test_list();
        assert_eq!(
            list.remove_at(3),
            Err(TodoError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.len(), 3);
    }

    // TodoList: copies and iteration

    #[test]
    fn test_to_vec_is_independent() {
        let list = create_test_list();
        let mut copy = list.to_vec();
        copy[0].mark_done();
        copy.pop();

        assert_eq!(list.len(), 3);
        assert!(!list[0].is_done());
    }

    #[test]
    fn test_for_each_visits_in_order_and_chains() {
        let list = create_test_list();
        let mut seen = Vec::new();

        let returned = list.for_each(|todo| seen.push(todo.title().to_string()));

        assert_eq!(seen, vec!["First", "Second", "Third"]);
        assert!(std::ptr::eq(returned, &list));
    }

    #[test]
    fn test_into_iterator() {
        let list = create_test_list();
        let borrowed: Vec<&str> = (&list).into_iter().map(Todo::title).collect();
        assert_eq!(borrowed, vec!["First", "Second", "Third"]);

        let owned: Vec<Todo> = list.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }

    // TodoList: filtering and lookup

    #[test]
    fn test_filter_returns_new_list_in_order() {
        let list = create_test_list();
        let filtered = list.filter(|todo| todo.title() != "Second");

        assert_eq!(filtered.title(), "Test List");
        assert_eq!(titles(&filtered), vec!["First", "Third"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_filter_does_not_alias_source() {
        let list = create_test_list();
        let mut filtered = list.filter(|_| true);
        filtered.mark_all_done();

        assert!(filtered.all_done());
        assert!(!list.all_done());
    }

    #[test]
    fn test_filter_status() {
        let mut list = create_test_list();
        list.mark_done_at(0).expect("index in range");
        list.mark_done_at(2).expect("index in range");

        assert_eq!(titles(&list.all_done_items()), vec!["First", "Third"]);
        assert_eq!(titles(&list.all_not_done_items()), vec!["Second"]);
        assert_eq!(list.filter_status(StatusFilter::All).len(), 3);
    }

    #[test]
    fn test_find_by_title() {
        let mut list = create_test_list();
        list.add(create_test_todo("Second").with_description("duplicate"));

        let found = list.find_by_title("Second").expect("todo exists");
        assert_eq!(found.description(), "beta");

        assert!(list.find_by_title("second").is_none());
        assert!(list.find_by_title("alpha").is_none());
    }

    #[test]
    fn test_mark_done_by_title_or_description() {
        let mut list = create_test_list();

        let marked = list.mark_done("Second").map(Todo::title);
        assert_eq!(marked, Some("Second"));
        assert!(list[1].is_done());

        let marked = list.mark_done("gamma").map(Todo::title);
        assert_eq!(marked, Some("Third"));
        assert!(list[2].is_done());

        assert!(!list[0].is_done());
    }

    #[test]
    fn test_mark_done_affects_only_first_match() {
        let mut list = TodoList::new("Dupes");
        list.add(create_test_todo("Same")).add(create_test_todo("Same"));

        list.mark_done("Same");
        assert!(list[0].is_done());
        assert!(!list[1].is_done());
    }

    #[test]
    fn test_mark_done_without_match_is_noop() {
        let mut list = create_test_list();
        let before = list.clone();

        assert!(list.mark_done("Nonexistent").is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_summary_counts() {
        let mut list = create_test_list();
        list.mark_done_at(1).expect("index in range");

        let summary = list.summary();
        assert_eq!(summary.title, "Test List");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.pending, 2);
        assert!(!summary.is_complete());

        assert!(TodoList::new("Empty").summary().is_complete());
    }
}
