//! Compiled evaluators for switch definitions.
//!
//! Compilation turns definitions into ready-to-run evaluators:
//! - [`CompiledCondition`]: one operator check with its path and pattern prepared
//! - [`CompiledRule`]: conditions combined with `and`/`or`
//! - [`SwitchRouter`]: the whole configuration, producing [`RoutingResult`]s
//!
//! [`RoutingResult`]: crate::RoutingResult

mod condition;
mod router;
mod rule;

pub use condition::CompiledCondition;
pub use router::{SwitchRouter, route};
pub use rule::CompiledRule;

/// Tracing target for routing decisions.
const TRACING_TARGET: &str = "nvisy_switch::router";
