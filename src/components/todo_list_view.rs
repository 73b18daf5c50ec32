//! Todo List Page
//!
//! Owns the to-do store for as long as the page is mounted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoRow};
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    // Dropped with the page; nothing survives navigation.
    let store = Store::new(TodoState::default());
    provide_context(store);

    let items = move || store.todos().read().items().to_vec();
    let is_empty = move || store.todos().read().is_empty();
    let summary = move || {
        let todos = store.todos().read();
        format!("{} todos, {} completed", todos.len(), todos.completed_count())
    };

    view! {
        <div class="page">
            <main class="page-main">
                <header class="page-header">
                    <h1>"My Todo App"</h1>
                </header>

                <section class="panel">
                    <NewTodoForm />
                </section>

                <section class="panel">
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! { <p class="placeholder">"No todos yet! Add some above."</p> }
                    >
                        <ul class="todo-list">
                            // Keyed on completion too, so a toggled row re-renders
                            <For
                                each=items
                                key=|item| (item.id, item.completed)
                                children=|item| view! { <TodoRow item=item /> }
                            />
                        </ul>
                    </Show>
                    <p class="item-count">{summary}</p>
                </section>

                <nav class="page-nav">
                    <a href="/env">"View Environment Variables"</a>
                </nav>

                <footer class="page-footer">
                    <p>"Simple Todo App built with Leptos"</p>
                </footer>
            </main>
        </div>
    }
}
