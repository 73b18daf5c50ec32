//! To-do Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoId;
use crate::todo::TodoList;

/// State owned by one mounted to-do page
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in display order
    pub todos: TodoList,
    /// In-progress input for the next item
    pub draft: String,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the to-do store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the draft text
pub fn store_set_draft(store: &TodoStore, text: String) {
    *store.draft().write() = text;
}

/// Turn the current draft into an item and clear the draft.
/// A blank draft leaves both the list and the draft untouched.
pub fn store_submit_draft(store: &TodoStore) -> Option<TodoId> {
    let draft = store.draft().get_untracked();
    let id = store.todos().write().add(&draft)?;
    store.draft().write().clear();
    Some(id)
}

/// Flip completion of an item by ID
pub fn store_toggle_todo(store: &TodoStore, id: TodoId) {
    store.todos().write().toggle(id);
}

/// Remove an item from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: TodoId) {
    store.todos().write().remove(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_is_kept() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(TodoState::default());

        store_set_draft(&store, "   ".to_string());
        assert_eq!(store_submit_draft(&store), None);
        assert_eq!(store.draft().get_untracked(), "   ");
        assert!(store.todos().get_untracked().is_empty());
    }

    #[test]
    fn test_submit_clears_draft() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(TodoState::default());

        store_set_draft(&store, " milk ".to_string());
        let id = store_submit_draft(&store).expect("added");

        assert_eq!(store.draft().get_untracked(), "");
        let todos = store.todos().get_untracked();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos.items()[0].id, id);
        assert_eq!(todos.items()[0].text, " milk ");
        assert!(!todos.items()[0].completed);
    }
}
