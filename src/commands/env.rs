//! Environment Commands
//!
//! GET of the server-side environment endpoint, bounded by a timeout.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, Response};

use super::js_message;
use crate::env::{classify_rejection, classify_status, parse_env_payload, EnvFetchError};
use crate::models::EnvironmentMap;

/// Fetch the server-side variables.
///
/// The request is aborted once `timeout_ms` elapses; an aborted request
/// reports [`EnvFetchError::Timeout`].
pub async fn fetch_env(endpoint: &str, timeout_ms: u32) -> Result<EnvironmentMap, EnvFetchError> {
    let window = web_sys::window().ok_or_else(|| EnvFetchError::Network("no window".to_string()))?;
    let controller = AbortController::new().map_err(|e| EnvFetchError::Network(js_message(&e)))?;
    let signal = controller.signal();
    // Dropping the handle clears the timer, so it only fires while we wait.
    let _timeout = Timeout::new(timeout_ms, move || controller.abort());

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(&signal));

    let response = match JsFuture::from(window.fetch_with_str_and_init(endpoint, &init)).await {
        Ok(value) => value,
        Err(e) => {
            return Err(classify_rejection(
                signal.aborted(),
                EnvFetchError::Network(js_message(&e)),
            ))
        }
    };
    let response: Response = response
        .dyn_into()
        .map_err(|_| EnvFetchError::Malformed("fetch did not yield a Response".to_string()))?;

    classify_status(response.ok(), response.status())?;

    let body = response.json().map_err(|e| EnvFetchError::Malformed(js_message(&e)))?;
    let body = match JsFuture::from(body).await {
        Ok(value) => value,
        Err(e) => {
            return Err(classify_rejection(
                signal.aborted(),
                EnvFetchError::Malformed(js_message(&e)),
            ))
        }
    };

    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(body).map_err(|e| EnvFetchError::Malformed(e.to_string()))?;
    parse_env_payload(value)
}
