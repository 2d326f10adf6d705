//! Switch router: the entry point evaluating a whole configuration.

use serde_json::Value;

use super::{CompiledRule, TRACING_TARGET};
use crate::definition::{Route, RoutingConfiguration, SwitchMode};
use crate::result::RoutingResult;
use crate::value::strict_equal;

/// Compiled switch node, ready to route data.
///
/// Compiling parses every field path and regex pattern once, so a router
/// can be built when a workflow is loaded and then shared between threads
/// for every item flowing through the node. Routing is pure: the same
/// input always yields the same outputs.
#[derive(Debug, Clone)]
pub struct SwitchRouter {
    strategy: Strategy,
    fallback: Option<usize>,
    allow_multiple_matches: bool,
}

#[derive(Debug, Clone)]
enum Strategy {
    Rules(Vec<CompiledRule>),
    Expression {
        value_to_match: Option<Value>,
        routes: Vec<Route>,
    },
}

impl SwitchRouter {
    /// Compiles a routing configuration.
    ///
    /// A configuration missing the collection its mode requires compiles
    /// into a router without branches, which only ever uses the fallback.
    pub fn new(config: &RoutingConfiguration) -> Self {
        let strategy = match config.mode {
            SwitchMode::Rules => {
                Strategy::Rules(config.active_rules().iter().map(CompiledRule::new).collect())
            }
            SwitchMode::Expression => Strategy::Expression {
                value_to_match: config.value_to_match.clone(),
                routes: config.active_routes().to_vec(),
            },
        };

        let router = Self {
            strategy,
            fallback: config.fallback(),
            allow_multiple_matches: config.allow_multiple_matches,
        };

        tracing::debug!(
            target: TRACING_TARGET,
            mode = %config.mode,
            branches = router.branch_count(),
            fallback = ?router.fallback,
            allow_multiple_matches = router.allow_multiple_matches,
            "Switch router compiled"
        );

        router
    }

    /// Returns the number of rules or routes evaluated per input.
    pub fn branch_count(&self) -> usize {
        match &self.strategy {
            Strategy::Rules(rules) => rules.len(),
            Strategy::Expression { routes, .. } => routes.len(),
        }
    }

    /// Returns the fallback output, if any.
    pub fn fallback(&self) -> Option<usize> {
        self.fallback
    }

    /// Routes one input value.
    ///
    /// Rules or routes are tried in declaration order. Unless multiple
    /// matches are allowed, evaluation stops at the first match. When
    /// nothing matched, the fallback output is used if configured;
    /// otherwise the result is empty and the data is dropped.
    pub fn route<'a>(&self, input: &'a Value) -> RoutingResult<'a> {
        let mut matched = Vec::new();

        match &self.strategy {
            Strategy::Rules(rules) => {
                for (position, rule) in rules.iter().enumerate() {
                    if !rule.evaluate(input) {
                        continue;
                    }

                    tracing::trace!(
                        target: TRACING_TARGET,
                        position,
                        output_index = rule.output_index(),
                        name = rule.name(),
                        "Rule matched"
                    );

                    matched.push(rule.output_index());
                    if !self.allow_multiple_matches {
                        break;
                    }
                }
            }
            Strategy::Expression {
                value_to_match,
                routes,
            } => {
                // An absent value never equals a route literal.
                if let Some(value_to_match) = value_to_match {
                    for (position, route) in routes.iter().enumerate() {
                        if !strict_equal(value_to_match, &route.value) {
                            continue;
                        }

                        tracing::trace!(
                            target: TRACING_TARGET,
                            position,
                            output_index = route.output_index,
                            name = route.name.as_deref(),
                            "Route matched"
                        );

                        matched.push(route.output_index);
                        if !self.allow_multiple_matches {
                            break;
                        }
                    }
                }
            }
        }

        if matched.is_empty()
            && let Some(fallback) = self.fallback
        {
            matched.push(fallback);
        }

        tracing::trace!(
            target: TRACING_TARGET,
            matched_outputs = ?matched,
            "Input routed"
        );

        RoutingResult::new(matched, input)
    }
}

impl From<&RoutingConfiguration> for SwitchRouter {
    fn from(config: &RoutingConfiguration) -> Self {
        Self::new(config)
    }
}

impl From<RoutingConfiguration> for SwitchRouter {
    fn from(config: RoutingConfiguration) -> Self {
        Self::new(&config)
    }
}

/// Compiles `config` and routes a single input.
///
/// Prefer building a [`SwitchRouter`] once when routing many inputs with
/// the same configuration.
pub fn route<'a>(config: &RoutingConfiguration, input: &'a Value) -> RoutingResult<'a> {
    SwitchRouter::new(config).route(input)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::definition::{Condition, Operator, Rule};

    fn status_rule(status: &str, output_index: usize) -> Rule {
        Rule::new(
            vec![Condition::new("status", Operator::Equals, status)],
            output_index,
        )
    }

    #[test]
    fn test_first_match_wins() {
        let config = RoutingConfiguration::rules(vec![
            status_rule("other", 0),
            status_rule("active", 1),
            Rule::catch_all(2),
        ]);
        let input = json!({ "status": "active" });
        assert_eq!(route(&config, &input).matched_outputs, vec![1]);
    }

    #[test]
    fn test_multiple_matches_in_order_with_duplicates() {
        let config = RoutingConfiguration::rules(vec![
            Rule::catch_all(3),
            status_rule("other", 0),
            status_rule("active", 1),
            Rule::catch_all(3),
        ])
        .with_multiple_matches(true);
        let input = json!({ "status": "active" });
        assert_eq!(route(&config, &input).matched_outputs, vec![3, 1, 3]);
    }

    #[test]
    fn test_fallback() {
        let input = json!({ "status": "idle" });
        let config = RoutingConfiguration::rules(vec![status_rule("active", 0)]);
        assert!(route(&config, &input).is_dropped());

        let config = config.with_fallback(3);
        assert_eq!(route(&config, &input).matched_outputs, vec![3]);
    }

    #[test]
    fn test_fallback_not_used_when_matched() {
        let config =
            RoutingConfiguration::rules(vec![status_rule("active", 0)]).with_fallback(3);
        let input = json!({ "status": "active" });
        assert_eq!(route(&config, &input).matched_outputs, vec![0]);
    }

    #[test]
    fn test_negative_fallback_below_sentinel_drops() {
        let mut config = RoutingConfiguration::rules(Vec::new());
        config.fallback_output = -7;
        assert!(route(&config, &json!({})).is_dropped());
    }

    #[test]
    fn test_expression_strict_matching() {
        let config = RoutingConfiguration::expression(
            5,
            vec![Route::new(5, 1), Route::new("5", 2)],
        );
        let input = json!({});
        assert_eq!(route(&config, &input).matched_outputs, vec![1]);

        let config = RoutingConfiguration::expression(
            "5",
            vec![Route::new(5, 1), Route::new("5", 2)],
        );
        assert_eq!(route(&config, &input).matched_outputs, vec![2]);
    }

    #[test]
    fn test_expression_multiple_matches() {
        let config = RoutingConfiguration::expression(
            true,
            vec![Route::new(true, 0), Route::new(1, 1), Route::new(true, 2)],
        )
        .with_multiple_matches(true);
        assert_eq!(route(&config, &json!(null)).matched_outputs, vec![0, 2]);
    }

    #[test]
    fn test_expression_absent_value_matches_nothing() {
        let mut config = RoutingConfiguration::expression("a", vec![Route::new("a", 0)]);
        config.value_to_match = None;
        assert!(route(&config, &json!({})).is_dropped());
    }

    #[test]
    fn test_missing_collection_uses_fallback() {
        let config: RoutingConfiguration = serde_json::from_value(json!({
            "mode": "rules",
            "routes": [{ "value": "a", "outputIndex": 0 }],
            "fallbackOutput": 2
        }))
        .unwrap();
        let router = SwitchRouter::new(&config);
        assert_eq!(router.branch_count(), 0);
        assert_eq!(router.route(&json!("a")).matched_outputs, vec![2]);
    }

    #[test]
    fn test_inactive_collection_is_ignored() {
        let mut config = RoutingConfiguration::expression("x", vec![Route::new("y", 1)]);
        config.rules = Some(vec![Rule::catch_all(0)]);
        assert!(route(&config, &json!({})).is_dropped());
    }

    #[test]
    fn test_data_is_passed_through() {
        let config = RoutingConfiguration::rules(vec![Rule::catch_all(0)]);
        let input = json!({ "nested": { "list": [1, 2, 3] } });
        let result = route(&config, &input);
        assert!(std::ptr::eq(result.data, &input));
        assert_eq!(input, json!({ "nested": { "list": [1, 2, 3] } }));
    }

    #[test]
    fn test_router_is_pure() {
        let router = SwitchRouter::from(
            RoutingConfiguration::rules(vec![status_rule("active", 0), Rule::catch_all(1)])
                .with_multiple_matches(true),
        );
        let input = json!({ "status": "active" });
        let first = router.route(&input);
        let second = router.route(&input);
        assert_eq!(first, second);
    }
}
