//! Literal routes for expression mode.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Maps one literal value to an output branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Literal compared against `valueToMatch` by strict equality.
    #[validate(custom(function = "validate_route_literal"))]
    pub value: Value,
    /// Output branch receiving the data when the route matches.
    pub output_index: usize,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Route {
    /// Creates a new route.
    pub fn new(value: impl Into<Value>, output_index: usize) -> Self {
        Self {
            value: value.into(),
            output_index,
            name: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Route literals are restricted to strings, numbers and booleans.
fn validate_route_literal(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(()),
        _ => Err(ValidationError::new("route_literal")
            .with_message("route value must be a string, number or boolean".into())),
    }
}
