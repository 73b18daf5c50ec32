use leptos::prelude::*;

#[component]
pub fn NotFoundView(path: String) -> impl IntoView {
    view! {
        <div class="page">
            <main class="page-main">
                <h1>"Page not found"</h1>
                <p class="placeholder">{format!("Nothing lives at {}", path)}</p>
                <a href="/">"Go to the Todo App"</a>
            </main>
        </div>
    }
}
