//! Todo Row Component
//!
//! Individual item in the to-do list.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{store_remove_todo, store_toggle_todo, use_todo_store};

/// A single item row. Completed items stay clickable and deletable.
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_todo_store();

    let id = item.id;
    let completed = item.completed;

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <span
                class="todo-text"
                title="Click to toggle"
                on:click=move |_| store_toggle_todo(&store, id)
            >
                {item.text}
            </span>
            <button class="btn danger small" on:click=move |_| store_remove_todo(&store, id)>
                "Delete"
            </button>
        </li>
    }
}
