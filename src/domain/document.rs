use crate::error::{Result, SiteDataError};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Key looked up when the caller does not name one.
pub const DEFAULT_KEY: &str = "token1";

/// A fully loaded site-data document.
///
/// The document is a flat mapping from string keys to JSON values. It is
/// loaded once per process and handed explicitly to whoever needs it, either
/// the lookup tool or the payment router's key-store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: Map<String, Value>,
}

impl Document {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Returns the value bound to `key`.
    ///
    /// A missing key is an expected outcome and is reported as
    /// [`SiteDataError::NotFound`].
    pub fn lookup(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| SiteDataError::NotFound(key.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Renders a value the way the lookup tool prints it.
///
/// Strings are printed raw, everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
