use serde_json::Value;

use crate::domain::response::lookup;

/// Where a text column or record line takes its value from
#[derive(Clone, Copy)]
pub enum FieldSource {
    /// Dotted key path into the payload
    Key(&'static str),
    /// Value computed from the whole payload
    Derived(fn(&Value) -> String),
}

impl std::fmt::Debug for FieldSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSource::Key(key) => f.debug_tuple("Key").field(key).finish(),
            FieldSource::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// A labelled projection of a payload
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub label: &'static str,
    pub source: FieldSource,
}

impl Field {
    pub const fn key(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            source: FieldSource::Key(key),
        }
    }

    pub const fn derived(label: &'static str, derive: fn(&Value) -> String) -> Self {
        Self {
            label,
            source: FieldSource::Derived(derive),
        }
    }

    /// Display value for `doc`; missing keys yield an empty string
    pub fn render(&self, doc: &Value) -> String {
        match self.source {
            FieldSource::Key(key) => lookup(doc, key).map(render_value).unwrap_or_default(),
            FieldSource::Derived(derive) => derive(doc),
        }
    }
}

/// Text rendering of a single JSON value
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
