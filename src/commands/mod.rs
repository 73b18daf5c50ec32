//! Server Bindings
//!
//! Frontend wrappers around the HTTP endpoints the pages consume.

mod env;

use wasm_bindgen::JsValue;

pub use env::*;

/// Best-effort text of a JS error value
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
