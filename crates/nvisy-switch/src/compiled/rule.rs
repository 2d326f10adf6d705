//! Compiled rule evaluation.

use serde_json::Value;

use super::CompiledCondition;
use crate::definition::{CombineWith, Rule};

/// A rule with all of its conditions compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    conditions: Vec<CompiledCondition>,
    combine_with: CombineWith,
    output_index: usize,
    name: Option<String>,
}

impl CompiledRule {
    /// Compiles a rule.
    pub fn new(rule: &Rule) -> Self {
        Self {
            conditions: rule.conditions.iter().map(CompiledCondition::new).collect(),
            combine_with: rule.combine_with,
            output_index: rule.output_index,
            name: rule.name.clone(),
        }
    }

    /// Returns the output index this rule routes to.
    pub fn output_index(&self) -> usize {
        self.output_index
    }

    /// Returns the display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Evaluates the rule against `data`.
    ///
    /// A rule without conditions is vacuously true for both combinators.
    pub fn evaluate(&self, data: &Value) -> bool {
        if self.conditions.is_empty() {
            return true;
        }

        match self.combine_with {
            CombineWith::And => self.conditions.iter().all(|c| c.evaluate(data)),
            CombineWith::Or => self.conditions.iter().any(|c| c.evaluate(data)),
        }
    }
}

impl From<&Rule> for CompiledRule {
    fn from(rule: &Rule) -> Self {
        Self::new(rule)
    }
}

impl Rule {
    /// Evaluates this rule against `data` without keeping the compiled
    /// form around.
    pub fn evaluate(&self, data: &Value) -> bool {
        CompiledRule::new(self).evaluate(data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::definition::{Condition, Operator};

    fn conditions() -> Vec<Condition> {
        vec![
            Condition::new("a", Operator::Equals, 1),
            Condition::new("b", Operator::Equals, 2),
        ]
    }

    #[test]
    fn test_empty_rule_is_vacuously_true() {
        let data = json!(null);
        assert!(Rule::catch_all(0).evaluate(&data));
        assert!(
            Rule::catch_all(0)
                .with_combine_with(CombineWith::Or)
                .evaluate(&data)
        );
    }

    #[test]
    fn test_and() {
        let rule = Rule::new(conditions(), 0);
        assert!(rule.evaluate(&json!({ "a": 1, "b": 2 })));
        assert!(!rule.evaluate(&json!({ "a": 1, "b": 3 })));
        assert!(!rule.evaluate(&json!({})));
    }

    #[test]
    fn test_or() {
        let rule = Rule::new(conditions(), 0).with_combine_with(CombineWith::Or);
        assert!(rule.evaluate(&json!({ "a": 1, "b": 3 })));
        assert!(rule.evaluate(&json!({ "a": 0, "b": 2 })));
        assert!(!rule.evaluate(&json!({ "a": 0, "b": 0 })));
    }

    #[test]
    fn test_malformed_condition_does_not_poison_or() {
        let rule = Rule::new(
            vec![
                Condition::new("name", Operator::Regex, "("),
                Condition::new("name", Operator::Equals, "abc"),
            ],
            0,
        )
        .with_combine_with(CombineWith::Or);
        assert!(rule.evaluate(&json!({ "name": "abc" })));
    }

    #[test]
    fn test_compiled_accessors() {
        let compiled = CompiledRule::from(&Rule::catch_all(4).with_name("rest"));
        assert_eq!(compiled.output_index(), 4);
        assert_eq!(compiled.name(), Some("rest"));
    }
}
