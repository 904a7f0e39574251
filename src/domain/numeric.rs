//! Numeric values accepted by the aggregation endpoint.
//!
//! JSON integers stay integral through summation; any float in the input
//! turns the running total into a float.

use std::ops::Add;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{PlatformError, PlatformResult};

/// A JSON number, either integral or floating-point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Integer value. Wide enough to hold any sum of 64-bit JSON integers.
    Int(i128),
    /// Floating-point value.
    Float(f64),
}

impl Numeric {
    /// The additive identity, also used as the average of an empty list.
    pub const ZERO: Numeric = Numeric::Int(0);

    /// Convert the element at `index` of the `numbers` array.
    pub fn from_json(index: usize, value: &Value) -> PlatformResult<Self> {
        let not_numeric = || {
            PlatformError::MalformedInput(format!(
                "numbers[{}] is not numeric (found {})",
                index,
                json_kind(value)
            ))
        };

        let Value::Number(n) = value else {
            return Err(not_numeric());
        };

        if let Some(i) = n.as_i64() {
            Ok(Numeric::Int(i128::from(i)))
        } else if let Some(u) = n.as_u64() {
            Ok(Numeric::Int(i128::from(u)))
        } else {
            n.as_f64().map(Numeric::Float).ok_or_else(not_numeric)
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Numeric::Int(_) => true,
            Numeric::Float(f) => f.is_finite(),
        }
    }
}

impl Add for Numeric {
    type Output = Numeric;

    fn add(self, rhs: Numeric) -> Numeric {
        match (self, rhs) {
            (Numeric::Int(a), Numeric::Int(b)) => a
                .checked_add(b)
                .map(Numeric::Int)
                .unwrap_or_else(|| Numeric::Float(a as f64 + b as f64)),
            (a, b) => Numeric::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Numeric::Int(i) => write!(f, "{}", i),
            Numeric::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Numeric::Int(i) => serializer.serialize_i128(i),
            Numeric::Float(f) => serializer.serialize_f64(f),
        }
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
