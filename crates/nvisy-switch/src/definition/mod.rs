//! Serializable definitions of a switch node.
//!
//! These types describe what a switch node routes on and are produced by
//! the node-configuration layer:
//! - [`RoutingConfiguration`]: mode, rules/routes, fallback and match policy
//! - [`Rule`] and [`Condition`]: rules-mode predicates
//! - [`Route`]: expression-mode literals
//!
//! Definitions are compiled into evaluators by [`crate::compiled`].

mod config;
mod operator;
mod route;
mod rule;

pub use config::{NO_FALLBACK, RoutingConfiguration, RoutingConfigurationBuilder, SwitchMode};
pub use operator::Operator;
pub use route::Route;
pub use rule::{CombineWith, Condition, Rule, RuleBuilder};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps an explicit `null` as `Some(Value::Null)`; a missing field stays
/// `None` through `#[serde(default)]`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
