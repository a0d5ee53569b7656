// Request builder: turns a tool call into a backend GET URL

use crate::error::{NorthwindError, NorthwindResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar argument value accepted by a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl ParamValue {
    /// Convert a JSON value. `Ok(None)` for null, error for arrays and objects.
    pub fn from_json(name: &str, value: serde_json::Value) -> NorthwindResult<Option<Self>> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Self::Boolean(b))),
            Value::String(s) => Ok(Some(Self::String(s))),
            Value::Number(n) => {
                // Integers outside i64 keep their own text
                match n.as_i64() {
                    Some(i) => Ok(Some(Self::Integer(i))),
                    None if n.is_f64() => Ok(n.as_f64().map(Self::Float)),
                    None => Ok(Some(Self::String(n.to_string()))),
                }
            }
            Value::Array(_) => Err(NorthwindError::invalid_argument(
                name,
                "list values are not supported",
            )),
            Value::Object(_) => Err(NorthwindError::invalid_argument(
                name,
                "nested objects are not supported",
            )),
        }
    }
}

/// Arguments of a single tool call, keyed by parameter name.
///
/// Names are not checked against the tool's declared parameters; anything the
/// caller sends is forwarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArguments(BTreeMap<String, ParamValue>);

impl ToolArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value. `null` means no arguments; anything other than
    /// an object is rejected. Null members are dropped.
    pub fn from_json(value: serde_json::Value) -> NorthwindResult<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::new()),
            serde_json::Value::Object(map) => {
                let mut args = Self::new();
                for (name, value) in map {
                    if let Some(value) = ParamValue::from_json(&name, value)? {
                        args.0.insert(name, value);
                    }
                }
                Ok(args)
            }
            other => Err(NorthwindError::invalid_argument(
                "arguments",
                format!("expected an object, got {}", json_kind(&other)),
            )),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Build the full request URL for a tool call.
///
/// `base_url` and `endpoint` are concatenated as-is, so the base must not end
/// with `/` and the endpoint must start with one. Keys and values are
/// form-urlencoded (a space becomes `+`).
pub fn build_url(base_url: &str, endpoint: &str, args: &ToolArguments) -> String {
    let mut url = format!("{}{}", base_url, endpoint);
    if args.is_empty() {
        return url;
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in args.iter() {
        query.append_pair(name, &value.to_string());
    }

    url.push('?');
    url.push_str(&query.finish());
    url
}
