//! Output-port metadata for the workflow editor.

use serde::{Deserialize, Serialize};

use crate::definition::{RoutingConfiguration, SwitchMode};

/// Port id used for the fallback output.
pub const FALLBACK_PORT_ID: &str = "fallback";

/// One output port of a switch node as shown in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct OutputPort {
    /// Stable port id: `route{position}` or `fallback`.
    pub id: String,
    /// Human-readable label.
    pub label: String,
}

impl OutputPort {
    /// Creates a new output port.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Describes the output ports of a switch node.
///
/// One port per rule (rules mode) or route (expression mode) in declaration
/// order, labelled by its name or else by its output index, followed by a
/// `fallback` port when a fallback output is configured.
pub fn output_ports(config: &RoutingConfiguration) -> Vec<OutputPort> {
    let branches: Vec<(Option<&str>, usize)> = match config.mode {
        SwitchMode::Rules => config
            .active_rules()
            .iter()
            .map(|rule| (rule.name.as_deref(), rule.output_index))
            .collect(),
        SwitchMode::Expression => config
            .active_routes()
            .iter()
            .map(|route| (route.name.as_deref(), route.output_index))
            .collect(),
    };

    let mut ports: Vec<OutputPort> = branches
        .into_iter()
        .enumerate()
        .map(|(position, (name, output_index))| {
            let label = match name.map(str::trim) {
                Some(name) if !name.is_empty() => name.to_owned(),
                _ => format!("Output {output_index}"),
            };
            OutputPort::new(format!("route{position}"), label)
        })
        .collect();

    if config.fallback().is_some() {
        ports.push(OutputPort::new(FALLBACK_PORT_ID, "Fallback"));
    }

    ports
}
