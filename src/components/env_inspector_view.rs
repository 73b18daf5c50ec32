//! Environment Inspector Page
//!
//! Shows seeded client-visible variables, then whatever the server reports.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::env::{apply_if_live, seed_entries, CancelToken, EnvState};

#[component]
pub fn EnvInspectorView() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(EnvState::seeded(seed_entries(ctx.public_env_iter())));

    // Invalidated on unmount; a response arriving later is dropped.
    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    // Load once on mount
    Effect::new(move |_| {
        let token = token.clone();
        let endpoint = ctx.env_endpoint.clone();
        let timeout_ms = ctx.fetch_timeout_ms;
        spawn_local(async move {
            let result = commands::fetch_env(&endpoint, timeout_ms).await;
            match &result {
                Ok(vars) => web_sys::console::log_1(&format!("[ENV] Loaded {} variables", vars.len()).into()),
                Err(e) => web_sys::console::warn_1(&format!("[ENV] Fetch failed: {}", e).into()),
            }
            let applied = state
                .try_update(|s| apply_if_live(s, &token, result))
                .unwrap_or(false);
            if !applied {
                web_sys::console::log_1(&"[ENV] View gone, response discarded".into());
            }
        });
    });

    let entries = move || state.with(|s| s.sorted_entries());
    let is_empty = move || state.with(|s| s.vars.is_empty());
    let empty_message = move || state.with(|s| s.empty_message());

    view! {
        <div class="page">
            <main class="page-main wide">
                <header class="page-header">
                    <h1>"Environment Variables"</h1>
                    <a href="/">"← Back to Todo App"</a>
                </header>

                <section class="panel">
                    <h2>"Detected Environment Variables"</h2>
                    <Show
                        when=move || !is_empty()
                        fallback=move || view! { <p class="placeholder">{empty_message}</p> }
                    >
                        <ul class="env-list">
                            <For
                                each=entries
                                key=|entry| entry.clone()
                                children=|(key, value)| view! {
                                    <li class="env-row">
                                        <code class="env-key">{key}</code>
                                        <code class="env-value">{value}</code>
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </section>

                <footer class="page-footer">
                    <p>"Environment variable inspector"</p>
                </footer>
            </main>
        </div>
    }
}
