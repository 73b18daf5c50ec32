//! Environment Inspector State
//!
//! Seeding, response validation and the fetch lifecycle of the
//! environment page, independent of the DOM.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::models::{EnvStatus, EnvironmentMap};

/// Names with this prefix are visible to the client build
pub const PUBLIC_PREFIX: &str = "TODO_PUBLIC_";

/// Entries shown before the server answers
pub const PLACEHOLDER_ENTRIES: &[(&str, &str)] = &[
    ("MY_VAR_FROM_YAML", "yaml_value (client-side placeholder)"),
    ("NEW_VAR_FROM_BACKEND", "backend_value (client-side placeholder)"),
];

pub const ERROR_KEY: &str = "Error";
pub const ERROR_MESSAGE: &str = "Could not fetch server-side environment variables.";

/// Why loading server-side variables failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFetchError {
    Network(String),
    Timeout,
    Status(u16),
    Malformed(String),
}

impl fmt::Display for EnvFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvFetchError::Network(msg) => write!(f, "Network error: {}", msg),
            EnvFetchError::Timeout => write!(f, "Request timed out"),
            EnvFetchError::Status(code) => write!(f, "Unexpected status: {}", code),
            EnvFetchError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for EnvFetchError {}

/// Non-2xx responses are failures
pub fn classify_status(ok: bool, status: u16) -> Result<(), EnvFetchError> {
    if ok {
        Ok(())
    } else {
        Err(EnvFetchError::Status(status))
    }
}

/// A rejected promise after our own abort is a timeout, anything else is `otherwise`
pub fn classify_rejection(aborted: bool, otherwise: EnvFetchError) -> EnvFetchError {
    if aborted {
        EnvFetchError::Timeout
    } else {
        otherwise
    }
}

/// Build the initial map: the already whitelisted client variables plus the placeholders
pub fn seed_entries<'a, I>(public_env: I) -> EnvironmentMap
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut vars: EnvironmentMap = public_env
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    for (key, value) in PLACEHOLDER_ENTRIES {
        vars.insert(key.to_string(), value.to_string());
    }
    vars
}

/// Accept only a JSON object whose values are all strings
pub fn parse_env_payload(value: Value) -> Result<EnvironmentMap, EnvFetchError> {
    let Value::Object(object) = value else {
        return Err(EnvFetchError::Malformed(format!(
            "expected an object, got {}",
            json_kind(&value)
        )));
    };
    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(EnvFetchError::Malformed(format!(
                "value of {} is {}, not a string",
                key,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Map plus explicit load status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvState {
    pub vars: EnvironmentMap,
    pub status: EnvStatus,
}

impl EnvState {
    /// State right after mount, before the fetch resolves
    pub fn seeded(vars: EnvironmentMap) -> Self {
        Self {
            vars,
            status: EnvStatus::Loading,
        }
    }

    /// Apply a fetch outcome. Both outcomes replace the whole map.
    pub fn apply(&mut self, result: Result<EnvironmentMap, EnvFetchError>) {
        match result {
            Ok(vars) => {
                self.vars = vars;
                self.status = EnvStatus::Loaded;
            }
            Err(_) => {
                let mut vars = EnvironmentMap::new();
                vars.insert(ERROR_KEY.to_string(), ERROR_MESSAGE.to_string());
                self.vars = vars;
                self.status = EnvStatus::Failed;
            }
        }
    }

    /// Rows in display order (lexicographic by key)
    pub fn sorted_entries(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Message shown instead of rows when the map is empty
    pub fn empty_message(&self) -> &'static str {
        match self.status {
            EnvStatus::Loading => "Loading environment variables...",
            EnvStatus::Loaded => "The server returned no environment variables.",
            EnvStatus::Failed => ERROR_MESSAGE,
        }
    }
}

/// Invalidated when the owning view is torn down
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Apply `result` unless the token was cancelled meanwhile.
/// Returns whether the state changed.
pub fn apply_if_live(
    state: &mut EnvState,
    token: &CancelToken,
    result: Result<EnvironmentMap, EnvFetchError>,
) -> bool {
    if token.is_cancelled() {
        return false;
    }
    state.apply(result);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> EnvState {
        EnvState::seeded(seed_entries([("TODO_PUBLIC_API", "https://example.test")]))
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(classify_status(true, 200), Ok(()));
        assert_eq!(classify_status(false, 404), Err(EnvFetchError::Status(404)));
        assert_eq!(classify_status(false, 500), Err(EnvFetchError::Status(500)));
    }

    #[test]
    fn test_rejection_classification() {
        let network = EnvFetchError::Network("offline".into());
        let malformed = EnvFetchError::Malformed("bad json".into());

        assert_eq!(classify_rejection(true, network.clone()), EnvFetchError::Timeout);
        assert_eq!(classify_rejection(false, network.clone()), network);
        assert_eq!(classify_rejection(true, malformed.clone()), EnvFetchError::Timeout);
        assert_eq!(classify_rejection(false, malformed.clone()), malformed);
    }

    #[test]
    fn test_seed_adds_placeholders() {
        let state = seeded();
        let keys: Vec<&str> = state.vars.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["MY_VAR_FROM_YAML", "NEW_VAR_FROM_BACKEND", "TODO_PUBLIC_API"]
        );
        assert_eq!(state.status, EnvStatus::Loading);
    }

    #[test]
    fn test_success_replaces_seed_and_sorts() {
        let mut state = seeded();
        let payload = parse_env_payload(json!({"B": "2", "A": "1"})).unwrap();
        state.apply(Ok(payload));

        assert_eq!(
            state.sorted_entries(),
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(state.status, EnvStatus::Loaded);
    }

    #[test]
    fn test_failure_leaves_single_diagnostic() {
        let mut state = seeded();
        state.apply(Err(EnvFetchError::Network("offline".into())));

        assert_eq!(state.vars.len(), 1);
        assert_eq!(state.vars.get(ERROR_KEY).map(String::as_str), Some(ERROR_MESSAGE));
        assert_eq!(state.status, EnvStatus::Failed);
    }

    #[test]
    fn test_malformed_payloads_rejected() {
        assert!(matches!(
            parse_env_payload(json!(["A", "B"])),
            Err(EnvFetchError::Malformed(_))
        ));
        assert!(matches!(
            parse_env_payload(json!("text")),
            Err(EnvFetchError::Malformed(_))
        ));
        assert!(matches!(
            parse_env_payload(json!({"A": "1", "B": 2})),
            Err(EnvFetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_success_is_not_loading() {
        let mut state = seeded();
        state.apply(parse_env_payload(json!({})));

        assert!(state.vars.is_empty());
        assert_eq!(state.status, EnvStatus::Loaded);
        assert_ne!(state.empty_message(), EnvState::default().empty_message());
    }

    #[test]
    fn test_cancelled_token_discards_result() {
        let mut state = seeded();
        let before = state.clone();
        let token = CancelToken::new();
        let view_side = token.clone();
        view_side.cancel();

        assert!(!apply_if_live(&mut state, &token, Ok(EnvironmentMap::new())));
        assert_eq!(state, before);
    }

    #[test]
    fn test_live_token_applies_result() {
        let mut state = seeded();
        let token = CancelToken::new();

        assert!(apply_if_live(&mut state, &token, Err(EnvFetchError::Timeout)));
        assert_eq!(state.status, EnvStatus::Failed);
    }
}
