//! Serialize-to-form encoder

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Ordered list of encoded key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Create an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `application/x-www-form-urlencoded` text back into pairs
    pub fn parse(input: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(input.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// Append a pair
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append all pairs from another set
    pub fn extend(&mut self, other: FormValues) {
        self.pairs.extend(other.pairs);
    }

    /// First value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for a key, in order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether a key is present at all
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The raw pairs
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Render as `application/x-www-form-urlencoded` text
    ///
    /// Brackets in keys are left unescaped so that nested keys stay
    /// readable in logs and query strings.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", escape_key(k), escape(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl std::fmt::Display for FormValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl IntoIterator for FormValues {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Encode a parameter set into form values
///
/// The value must serialize to a map at the top level.
pub fn encode<T: Serialize + ?Sized>(params: &T) -> Result<FormValues> {
    let value = serde_json::to_value(params).map_err(|e| Error::form(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(Error::form(format!(
            "parameters must serialize to a map, got {}",
            kind(&value)
        )));
    };

    let mut out = FormValues::new();
    for (key, value) in sorted(map) {
        append(&mut out, key, value);
    }
    Ok(out)
}

fn append(out: &mut FormValues, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(key, if b { "true" } else { "false" }),
        Value::Number(n) => out.push(key, format_number(&n)),
        Value::String(s) => out.push(key, s),
        Value::Array(items) => {
            if items.is_empty() {
                out.push(key, "");
                return;
            }
            for (i, item) in items.into_iter().enumerate() {
                append(out, format!("{key}[{i}]"), item);
            }
        }
        Value::Object(map) => {
            for (k, v) in sorted(map) {
                append(out, format!("{key}[{k}]"), v);
            }
        }
    }
}

fn sorted(map: Map<String, Value>) -> Vec<(String, Value)> {
    let mut entries: Vec<_> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // Display on f64 gives the shortest form: 1.0 -> "1", 0.25 -> "0.25"
    n.as_f64().map(|f| f.to_string()).unwrap_or_default()
}

fn escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

fn escape_key(key: &str) -> String {
    escape(key).replace("%5B", "[").replace("%5D", "]")
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}
