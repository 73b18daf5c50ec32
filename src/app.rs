//! Todo-Env Frontend App
//!
//! Root component: injects configuration and picks the page for the current path.

use leptos::prelude::*;

use crate::components::{EnvInspectorView, NotFoundView, TodoListView};
use crate::context::AppContext;

/// Pages reachable by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Todos,
    Env,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/index.html" => Route::Todos,
            "/env" => Route::Env,
            _ => Route::NotFound(path.to_string()),
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::from_build());

    let path = current_path();
    let route = Route::from_path(&path);
    web_sys::console::log_1(&format!("[APP] Rendering {:?} for {}", route, path).into());

    match route {
        Route::Todos => view! { <TodoListView /> }.into_any(),
        Route::Env => view! { <EnvInspectorView /> }.into_any(),
        Route::NotFound(path) => view! { <NotFoundView path=path /> }.into_any(),
    }
}
