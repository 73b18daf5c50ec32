//! Environment Snapshot
//!
//! Variables served by `/api/env`, captured once at startup.

use std::collections::BTreeMap;

use crate::config::Settings;

/// Keep the variables the settings expose, sorted by name
pub fn exposed_vars<I>(vars: I, settings: &Settings) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter(|(name, _)| settings.exposes(name))
        .collect()
}

/// Process environment, skipping entries that are not valid UTF-8
pub fn process_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
}
