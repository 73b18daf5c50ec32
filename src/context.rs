//! Application Context
//!
//! Configuration injected once at startup and provided via the Leptos
//! Context API, so views never read ambient process state.

use leptos::prelude::*;

use crate::env::PUBLIC_PREFIX;

include!(concat!(env!("OUT_DIR"), "/public_env.rs"));

/// Path of the server-side environment endpoint
pub const ENV_ENDPOINT: &str = "/api/env";

/// Upper bound on the environment request
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;

/// App-wide configuration provided via context
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    /// Whitelisted client-visible variables
    pub public_env: Vec<(String, String)>,
    pub env_endpoint: String,
    pub fetch_timeout_ms: u32,
}

impl AppContext {
    pub fn new<'a, I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            public_env: vars
                .into_iter()
                .filter(|(key, _)| key.starts_with(PUBLIC_PREFIX))
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            env_endpoint: ENV_ENDPOINT.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }

    /// Context built from the variables captured by the build script
    pub fn from_build() -> Self {
        Self::new(BUILD_PUBLIC_ENV.iter().copied())
    }

    pub fn public_env_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.public_env
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Get the app context, falling back to the build-time one
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(AppContext::from_build)
}
