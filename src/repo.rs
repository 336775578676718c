use time::OffsetDateTime;

use crate::models::{Todo, UpdateTodo};
use crate::store::TodoStore;

// Each operation loads the whole collection, mutates it in memory and writes
// it back. Storage failures degrade per the store's `*_or_*` helpers.

pub fn list_todos(store: &TodoStore) -> Vec<Todo> {
    store.load_or_empty()
}

pub fn find_todo<'a>(todos: &'a mut [Todo], id: &str) -> Option<&'a mut Todo> {
    todos.iter_mut().find(|todo| todo.id == id)
}

/// Appends a new, incomplete todo. `name` is stored as given; callers trim
/// and validate it first.
pub fn create_todo(store: &TodoStore, name: &str) -> Todo {
    let mut todos = store.load_or_empty();

    let now = OffsetDateTime::now_utc();
    let todo = Todo {
        id: next_id(&todos, now),
        name: name.to_string(),
        is_complete: false,
        // whole milliseconds, matching what gets persisted
        create_date: now
            .replace_nanosecond(u32::from(now.millisecond()) * 1_000_000)
            .unwrap_or(now),
    };

    todos.push(todo.clone());
    store.save_or_log(&todos);
    todo
}

/// Applies the fields present in `changes`. Returns `None` without touching
/// the file when no todo has that id.
pub fn update_todo(store: &TodoStore, id: &str, changes: &UpdateTodo) -> Option<Todo> {
    let mut todos = store.load_or_empty();
    let todo = find_todo(&mut todos, id)?;

    if let Some(is_complete) = changes.is_complete {
        todo.is_complete = is_complete;
    }
    if let Some(ref name) = changes.name {
        todo.name = name.clone();
    }

    let updated = todo.clone();
    store.save_or_log(&todos);
    Some(updated)
}

/// Removes the first todo with `id` and returns it.
pub fn delete_todo(store: &TodoStore, id: &str) -> Option<Todo> {
    let mut todos = store.load_or_empty();
    let index = todos.iter().position(|todo| todo.id == id)?;

    let removed = todos.remove(index);
    store.save_or_log(&todos);
    Some(removed)
}

/// Ids are the creation time in Unix milliseconds. When the clock has not
/// moved past the newest numeric id in `todos`, that id plus one is used so
/// back-to-back creates stay distinct.
pub fn next_id(todos: &[Todo], now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let newest = todos
        .iter()
        .filter_map(|todo| todo.id.parse::<i128>().ok())
        .max();

    match newest.filter(|&newest| newest >= millis) {
        Some(newest) => newest.checked_add(1).unwrap_or(millis).to_string(),
        None => millis.to_string(),
    }
}
