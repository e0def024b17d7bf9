use serde::Serialize;
use serde_json::Value;

/// Payload of a single Globus API call.
///
/// Key order follows the server document. List responses expose their
/// elements through [`GlobusResponse::items`], which walks the `DATA` array
/// Transfer wraps collections in, or a bare top-level array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GlobusResponse {
    data: Value,
}

impl GlobusResponse {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Raw payload
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// Look up a dotted path such as `stop_after.date`
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.data, path)
    }

    /// String field, `None` when absent, null or not a string
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// True when the key exists and is not null
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some_and(|v| !v.is_null())
    }

    /// Elements of a list response
    pub fn items(&self) -> impl Iterator<Item = &Value> {
        let elements = match &self.data {
            Value::Array(items) => items.as_slice(),
            Value::Object(map) => match map.get("DATA") {
                Some(Value::Array(items)) => items.as_slice(),
                _ => &[],
            },
            _ => &[],
        };
        elements.iter()
    }
}

impl From<Value> for GlobusResponse {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

/// Dotted-path lookup into a JSON document
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
