#![forbid(unsafe_code)]

use crate::Function;

/// A dynamically typed argument or return value.
#[derive(Clone, Debug)]
pub enum Value {
    Data(serde_json::Value),
    Function(Function),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Function(_) => "function",
            Value::Data(data) => match data {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "boolean",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::String(_) => "string",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
            },
        }
    }

    pub fn render(&self) -> String {
        match self {
            Value::Function(function) => format!("[Function: {}]", function.name()),
            Value::Data(data) => data.to_string(),
        }
    }

    /// Rendering followed by the kind, e.g. `"abc" (string)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.render(), self.kind())
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(function) => Some(function),
            Value::Data(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Data(data) => Some(data),
            Value::Function(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_data().and_then(serde_json::Value::as_i64)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Data(a), Value::Data(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Data(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Data(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Data(value.into())
    }
}

/// Error raised by a native function. Carried through `call` and `resume`
/// exactly as the function produced it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("uncaught {}", .0.describe())]
pub struct Thrown(pub Value);
