//! Compiled condition evaluation.

use regex::Regex;
use serde_json::Value;

use super::TRACING_TARGET;
use crate::definition::{Condition, Operator};
use crate::value::{FieldPath, deep_equal, is_empty, to_number};

/// A condition with its field path parsed and its pattern compiled.
///
/// Evaluation is total: missing fields, mismatched operand types and
/// invalid patterns all evaluate to a non-match of the operator (which is
/// `true` for the negated operators) instead of failing.
#[derive(Debug, Clone)]
pub struct CompiledCondition {
    path: FieldPath,
    operator: Operator,
    operand: Option<Value>,
    /// Compiled `regex` operand; `None` if absent or invalid.
    pattern: Option<Regex>,
}

impl CompiledCondition {
    /// Compiles a condition.
    pub fn new(condition: &Condition) -> Self {
        let pattern = match (condition.operator, &condition.value) {
            (Operator::Regex, Some(Value::String(source))) => compile_pattern(source),
            _ => None,
        };

        Self {
            path: FieldPath::parse(&condition.field),
            operator: condition.operator,
            operand: condition.value.clone(),
            pattern,
        }
    }

    /// Returns the operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the parsed field path.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Evaluates the condition against `data`.
    pub fn evaluate(&self, data: &Value) -> bool {
        let field = self.path.resolve(data);
        let operand = self.operand.as_ref();

        match self.operator {
            Operator::Equals => deep_equal(field, operand),
            Operator::NotEquals => !deep_equal(field, operand),
            Operator::Contains => contains(field, operand),
            Operator::NotContains => !contains(field, operand),
            Operator::StartsWith => match (field, operand) {
                (Some(Value::String(s)), Some(Value::String(prefix))) => {
                    s.starts_with(prefix.as_str())
                }
                _ => false,
            },
            Operator::EndsWith => match (field, operand) {
                (Some(Value::String(s)), Some(Value::String(suffix))) => {
                    s.ends_with(suffix.as_str())
                }
                _ => false,
            },
            Operator::GreaterThan => to_number(field) > to_number(operand),
            Operator::LessThan => to_number(field) < to_number(operand),
            Operator::GreaterThanOrEqual => to_number(field) >= to_number(operand),
            Operator::LessThanOrEqual => to_number(field) <= to_number(operand),
            Operator::IsEmpty => is_empty(field),
            Operator::IsNotEmpty => !is_empty(field),
            Operator::IsTrue => is_true(field),
            Operator::IsFalse => is_false(field),
            Operator::Regex => match (field, &self.pattern) {
                (Some(Value::String(s)), Some(pattern)) => pattern.is_match(s),
                _ => false,
            },
            Operator::In => is_element_of(field, operand),
            Operator::NotIn => !is_element_of(field, operand),
        }
    }
}

impl From<&Condition> for CompiledCondition {
    fn from(condition: &Condition) -> Self {
        Self::new(condition)
    }
}

impl Condition {
    /// Evaluates this condition against `data` without keeping the
    /// compiled form around.
    pub fn evaluate(&self, data: &Value) -> bool {
        CompiledCondition::new(self).evaluate(data)
    }
}

fn compile_pattern(source: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            tracing::debug!(
                target: TRACING_TARGET,
                pattern = source,
                error = %err,
                "Invalid regex operand, condition will never match"
            );
            None
        }
    }
}

/// Substring of a string field, or element of an array field.
fn contains(field: Option<&Value>, operand: Option<&Value>) -> bool {
    match (field, operand) {
        (Some(Value::String(s)), Some(Value::String(needle))) => s.contains(needle.as_str()),
        (Some(Value::Array(items)), operand) => {
            items.iter().any(|item| deep_equal(Some(item), operand))
        }
        _ => false,
    }
}

/// Field value is an element of an array operand.
fn is_element_of(field: Option<&Value>, operand: Option<&Value>) -> bool {
    match operand {
        Some(Value::Array(items)) => items.iter().any(|item| deep_equal(Some(item), field)),
        _ => false,
    }
}

fn is_true(field: Option<&Value>) -> bool {
    match field {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

fn is_false(field: Option<&Value>) -> bool {
    match field {
        Some(Value::Bool(b)) => !*b,
        Some(Value::String(s)) => s == "false",
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
