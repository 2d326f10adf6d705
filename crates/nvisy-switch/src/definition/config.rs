//! Routing configuration of a switch node.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};
use validator::{Validate, ValidationError};

use super::{Route, Rule, deserialize_present};
use crate::error::{SwitchError, SwitchResult};

/// Sentinel for "no fallback output": unmatched data is dropped.
pub const NO_FALLBACK: i64 = -1;

/// Evaluation strategy of a switch node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SwitchMode {
    /// Evaluate [`Rule`]s against the input.
    #[default]
    Rules,
    /// Compare `value_to_match` against literal [`Route`]s.
    Expression,
}

/// Configuration of one switch node.
///
/// Only the collection selected by `mode` is used; the other one is ignored
/// even when present. The configuration is read-only during evaluation and
/// can be shared between threads.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize, Validate)]
#[builder(
    name = "RoutingConfigurationBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(private, name = "build_inner", error = "SwitchError")
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_mode_collections"))]
pub struct RoutingConfiguration {
    /// Evaluation strategy.
    pub mode: SwitchMode,
    /// Pre-resolved value compared against routes in expression mode.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(default)]
    pub value_to_match: Option<Value>,
    /// Rules evaluated in rules mode, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub rules: Option<Vec<Rule>>,
    /// Routes compared in expression mode, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    #[validate(nested)]
    pub routes: Option<Vec<Route>>,
    /// Output used when nothing matched; `-1` drops the data.
    #[serde(default = "default_fallback_output")]
    #[builder(default = "NO_FALLBACK")]
    #[validate(range(min = -1))]
    pub fallback_output: i64,
    /// Collect every match instead of stopping at the first one.
    #[serde(default)]
    #[builder(default)]
    pub allow_multiple_matches: bool,
}

fn default_fallback_output() -> i64 {
    NO_FALLBACK
}

fn validate_mode_collections(config: &RoutingConfiguration) -> Result<(), ValidationError> {
    match config.mode {
        SwitchMode::Rules if config.rules.is_none() => Err(ValidationError::new("missing_rules")
            .with_message("rules mode requires a `rules` list".into())),
        SwitchMode::Expression if config.routes.is_none() => {
            Err(ValidationError::new("missing_routes")
                .with_message("expression mode requires a `routes` list".into()))
        }
        _ => Ok(()),
    }
}

impl RoutingConfigurationBuilder {
    /// Builds the configuration.
    pub fn build(self) -> Result<RoutingConfiguration, SwitchError> {
        self.build_inner()
    }

    /// Appends a rule.
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules
            .get_or_insert(None)
            .get_or_insert_with(Vec::new)
            .push(rule);
        self
    }

    /// Appends a route.
    pub fn add_route(mut self, route: Route) -> Self {
        self.routes
            .get_or_insert(None)
            .get_or_insert_with(Vec::new)
            .push(route);
        self
    }
}

impl RoutingConfiguration {
    /// Creates a rules-mode configuration.
    pub fn rules(rules: Vec<Rule>) -> Self {
        Self {
            mode: SwitchMode::Rules,
            value_to_match: None,
            rules: Some(rules),
            routes: None,
            fallback_output: NO_FALLBACK,
            allow_multiple_matches: false,
        }
    }

    /// Creates an expression-mode configuration.
    pub fn expression(value_to_match: impl Into<Value>, routes: Vec<Route>) -> Self {
        Self {
            mode: SwitchMode::Expression,
            value_to_match: Some(value_to_match.into()),
            rules: None,
            routes: Some(routes),
            fallback_output: NO_FALLBACK,
            allow_multiple_matches: false,
        }
    }

    /// Creates a builder for a configuration.
    pub fn builder() -> RoutingConfigurationBuilder {
        RoutingConfigurationBuilder::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> SwitchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json_validated(json: &str) -> SwitchResult<Self> {
        let config = Self::from_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the fallback output.
    pub fn with_fallback(mut self, output_index: usize) -> Self {
        self.fallback_output = i64::try_from(output_index).unwrap_or(i64::MAX);
        self
    }

    /// Enables or disables collecting every match.
    pub fn with_multiple_matches(mut self, allow: bool) -> Self {
        self.allow_multiple_matches = allow;
        self
    }

    /// Returns the fallback output, if one is configured.
    pub fn fallback(&self) -> Option<usize> {
        usize::try_from(self.fallback_output).ok()
    }

    /// Returns the rules consulted by the current mode.
    pub fn active_rules(&self) -> &[Rule] {
        match self.mode {
            SwitchMode::Rules => self.rules.as_deref().unwrap_or_default(),
            SwitchMode::Expression => &[],
        }
    }

    /// Returns the routes consulted by the current mode.
    pub fn active_routes(&self) -> &[Route] {
        match self.mode {
            SwitchMode::Expression => self.routes.as_deref().unwrap_or_default(),
            SwitchMode::Rules => &[],
        }
    }
}
