//! Frontend Models
//!
//! Data structures shared by the two pages.

use std::collections::BTreeMap;

/// Identifier of a to-do item, unique for the lifetime of its list
pub type TodoId = u64;

/// A user-entered task with completion status
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: TodoId,
    /// Stored as typed; only emptiness is checked on the trimmed form
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Variable name -> value, iterated in key order
pub type EnvironmentMap = BTreeMap<String, String>;

/// Load status of the environment inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvStatus {
    /// Seeded locally, server response not arrived yet
    #[default]
    Loading,
    /// Server response applied
    Loaded,
    /// Fetch failed, map holds the diagnostic entry
    Failed,
}
