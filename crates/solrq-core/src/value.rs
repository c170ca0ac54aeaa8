//! Scalar and list values carried by request parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single parameter value as it appears on the wire.
///
/// `Null`, the empty string and lists made only of those are "empty": they
/// never reach the encoded output. A list expands into one `key=value` pair
/// per non-empty element, in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    pub fn is_empty(&self) -> bool {
        match self {
            ParamValue::Null => true,
            ParamValue::Str(s) => s.is_empty(),
            ParamValue::List(items) => items.iter().all(ParamValue::is_empty),
            _ => false,
        }
    }

    /// Wire form of a scalar, or `None` when it is empty or a list.
    pub fn render(&self) -> Option<String> {
        match self {
            ParamValue::Null | ParamValue::List(_) => None,
            ParamValue::Str(s) if s.is_empty() => None,
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::UInt(n) => Some(n.to_string()),
            ParamValue::Float(f) => Some(f.to_string()),
        }
    }

    /// Expands the value into the strings to emit, one per pair.
    ///
    /// Empty elements are dropped; a list nested in a list is rejected.
    pub fn flatten(&self) -> Result<Vec<String>> {
        match self {
            ParamValue::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    if let ParamValue::List(_) = item {
                        return Err(Error::UnsupportedInput(
                            "nested lists cannot be expanded into parameters".to_string(),
                        ));
                    }
                    out.extend(item.render());
                }
                Ok(out)
            }
            scalar => Ok(scalar.render().into_iter().collect()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            ParamValue::Null => Value::Null,
            ParamValue::Bool(b) => Value::Bool(*b),
            ParamValue::Int(n) => Value::from(*n),
            ParamValue::UInt(n) => Value::from(*n),
            ParamValue::Float(f) => Value::from(*f),
            ParamValue::Str(s) => Value::String(s.clone()),
            ParamValue::List(items) => Value::Array(items.iter().map(ParamValue::to_json).collect()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self { ParamValue::Str(s.to_string()) }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self { ParamValue::Str(s) }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self { ParamValue::Str(s.clone()) }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self { ParamValue::Bool(b) }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self { ParamValue::Int(i64::from(n)) }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self { ParamValue::Int(n) }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self { ParamValue::UInt(u64::from(n)) }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self { ParamValue::UInt(n) }
}

impl From<usize> for ParamValue {
    fn from(n: usize) -> Self { ParamValue::UInt(n as u64) }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self { ParamValue::Float(f) }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self { v.map_or(ParamValue::Null, Into::into) }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self { ParamValue::List(items.into_iter().map(Into::into).collect()) }
}
