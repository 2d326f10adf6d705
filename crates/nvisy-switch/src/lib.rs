#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod compiled;
pub mod definition;
mod error;
mod ports;
mod result;
pub mod value;

#[doc(hidden)]
pub mod prelude;

pub use compiled::{CompiledCondition, CompiledRule, SwitchRouter, route};
pub use definition::{
    CombineWith, Condition, Operator, Route, Rule, RoutingConfiguration, SwitchMode,
};
pub use error::{SwitchError, SwitchResult};
pub use ports::{OutputPort, output_ports};
pub use result::RoutingResult;

/// Tracing target for switch operations.
pub const TRACING_TARGET: &str = "nvisy_switch";
