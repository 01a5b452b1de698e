use std::collections::BTreeMap;

use crate::error::RuntimeError;

/// Maps variable names to the value they were last assigned.
///
/// A store lives as long as its session. Entries are only ever created or
/// overwritten by a successful assignment and are never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableStore {
    values: BTreeMap<String, i64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if `name` was never assigned.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// assert!(store.get("x").is_err());
    ///
    /// store.set("x", 5);
    /// store.set("x", 6);
    /// assert_eq!(store.get("x").unwrap(), 6);
    /// ```
    pub fn get(&self, name: &str) -> Result<i64, RuntimeError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Assigns `value` to `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), value);
    }

    /// Number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
