use std::collections::HashMap;

use super::schema::{
    FieldKey,
    FIELD_SCHEMA,
};

/// Raw text of every intake field, keyed by schema key.
///
/// Values are stored exactly as typed; coercion happens only when a feature
/// vector is built on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<FieldKey, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self { values: FieldKey::ALL.into_iter().map(|key| (key, String::new())).collect() }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, key: FieldKey, raw_value: impl Into<String>) {
        self.values.insert(key, raw_value.into());
    }

    /// Fields in schema order, paired with their raw text.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        FIELD_SCHEMA.iter().map(move |spec| (spec.key, self.get(spec.key)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<(FieldKey, S)> for FormState {
    fn from_iter<I: IntoIterator<Item = (FieldKey, S)>>(iter: I) -> Self {
        let mut state = FormState::new();
        for (key, value) in iter {
            state.set(key, value);
        }
        state
    }
}
