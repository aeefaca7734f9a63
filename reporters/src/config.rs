use serde_json::{Map, Value};

/// Loosely-typed configuration mapping handed to reporters by the host.
///
/// Keys are strings; values are whatever the host's config layer produced.
/// Getters coerce instead of failing: a number read as a string is
/// stringified, a numeric string read as a number is parsed, and a missing
/// or mistyped key is `None`.
#[derive(Debug, Clone, Default)]
pub struct ConfigMap(Map<String, Value>);

impl ConfigMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// String value for `key`. Numbers and booleans are stringified; `null`
    /// and missing keys are `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Unsigned integer value for `key`, accepting numeric strings.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Nested mapping under `key`.
    pub fn get_map(&self, key: &str) -> Option<ConfigMap> {
        match self.0.get(key)? {
            Value::Object(map) => Some(ConfigMap(map.clone())),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }
}

impl From<Map<String, Value>> for ConfigMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
