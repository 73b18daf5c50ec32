//! New Todo Form Component
//!
//! Draft input plus submit button for adding items.

use leptos::prelude::*;

use crate::store::{store_set_draft, store_submit_draft, use_todo_store, TodoStateStoreFields};

/// Form for adding a to-do item from the current draft
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(id) = store_submit_draft(&store) {
            web_sys::console::log_1(&format!("[TODO] Added item {}", id).into());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                class="new-todo-input"
                placeholder="Add a new todo..."
                prop:value=move || store.draft().get()
                on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
            />
            <button type="submit" class="btn primary">"Add Todo"</button>
        </form>
    }
}
