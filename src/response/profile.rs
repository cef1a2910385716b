//! Projection of the upstream user record

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{AppError, Result};

/// The three user fields exposed by `/get_user`; absent upstream fields are `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[schema(value_type = Option<String>)]
    pub username: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub display_name: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Value>,
}

impl UserProfile {
    /// Project a raw user record.
    ///
    /// Field values are copied as-is, whatever their JSON type. The platform
    /// answers unknown users with a `null` body, which is not projectable.
    pub fn from_record(record: &Value) -> Result<Self> {
        let object = record.as_object().ok_or_else(|| {
            AppError::Unexpected(format!(
                "expected a JSON object for the user record, got {}",
                json_kind(record)
            ))
        })?;

        let field = |name: &str| object.get(name).filter(|v| !v.is_null()).cloned();

        Ok(Self {
            username: field("username"),
            display_name: field("display_name"),
            avatar: field("avatar"),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
