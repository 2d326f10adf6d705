//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use nvisy_switch::prelude::*;
//! ```

pub use crate::compiled::{SwitchRouter, route};
pub use crate::definition::{
    CombineWith, Condition, Operator, Route, Rule, RoutingConfiguration, SwitchMode,
};
pub use crate::error::{SwitchError, SwitchResult};
pub use crate::ports::{OutputPort, output_ports};
pub use crate::result::RoutingResult;
