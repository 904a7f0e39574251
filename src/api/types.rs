//! API request and response types.

use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::json_kind;
use crate::error::{PlatformError, PlatformResult};

/// Request to aggregate a list of numbers.
#[derive(Debug, ToSchema)]
pub struct AnalyzeRequest {
    /// Numbers to aggregate. Missing or `null` means an empty list.
    #[schema(value_type = Option<Vec<f64>>)]
    pub numbers: Vec<Value>,
}

impl TryFrom<Value> for AnalyzeRequest {
    type Error = PlatformError;

    /// Check the payload shape. Element types are checked later, when the
    /// numbers are parsed.
    fn try_from(payload: Value) -> PlatformResult<Self> {
        let mut fields = match payload {
            Value::Object(fields) => fields,
            other => {
                return Err(PlatformError::MalformedInput(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let numbers = match fields.remove("numbers") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(PlatformError::MalformedInput(format!(
                    "`numbers` must be an array, found {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(Self { numbers })
    }
}
