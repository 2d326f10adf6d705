//! Rule and condition definitions for rules mode.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use super::{Operator, deserialize_present};
use crate::error::SwitchError;

/// A single `(field, operator, value)` check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Path into the input value; empty addresses the whole value.
    #[serde(default)]
    pub field: String,
    /// Operator to apply.
    pub operator: Operator,
    /// Operand. Unused by the unary operators.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

impl Condition {
    /// Creates a condition with an operand.
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// Creates a condition without an operand, e.g. for `isEmpty`.
    pub fn unary(field: impl Into<String>, operator: Operator) -> Self {
        Self {
            field: field.into(),
            operator,
            value: None,
        }
    }
}

/// How the conditions of a [`Rule`] are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CombineWith {
    /// Every condition must hold.
    #[default]
    #[serde(alias = "AND")]
    And,
    /// At least one condition must hold.
    #[serde(alias = "OR")]
    Or,
}

/// An ordered set of conditions routed to one output.
///
/// A rule without conditions always matches, whatever `combine_with` says.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    name = "RuleBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(private, name = "build_inner", error = "SwitchError")
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Conditions to evaluate, in order.
    #[serde(default)]
    #[builder(default)]
    pub conditions: Vec<Condition>,
    /// Combinator for the conditions.
    #[serde(default)]
    #[builder(default)]
    pub combine_with: CombineWith,
    /// Output branch receiving the data when the rule matches.
    pub output_index: usize,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub name: Option<String>,
}

impl RuleBuilder {
    /// Builds the rule.
    pub fn build(self) -> Result<Rule, SwitchError> {
        self.build_inner()
    }

    /// Appends a condition.
    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.get_or_insert_with(Vec::new).push(condition);
        self
    }
}

impl Rule {
    /// Creates an `and` rule with the given conditions.
    pub fn new(conditions: Vec<Condition>, output_index: usize) -> Self {
        Self {
            conditions,
            combine_with: CombineWith::And,
            output_index,
            name: None,
        }
    }

    /// Creates a rule without conditions, matching every input.
    pub fn catch_all(output_index: usize) -> Self {
        Self::new(Vec::new(), output_index)
    }

    /// Creates a builder for a rule.
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// Sets the combinator.
    pub fn with_combine_with(mut self, combine_with: CombineWith) -> Self {
        self.combine_with = combine_with;
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
