//! Routing of input documents and result output.

use std::io::Write;

use anyhow::{Context, Result as AnyhowResult};
use nvisy_switch::{OutputPort, RoutingConfiguration, SwitchRouter, output_ports};
use serde_json::Value;
use validator::Validate;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_EVALUATE};

/// Validates the routing configuration.
///
/// The returned error carries the full validation report as its source.
pub fn validate_config(config: &RoutingConfiguration) -> AnyhowResult<()> {
    config
        .validate()
        .context("invalid routing configuration")?;

    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        "Routing configuration is valid"
    );

    Ok(())
}

/// Routes every document and writes one JSON routing result per line.
pub fn route_documents<W: Write>(
    config: &RoutingConfiguration,
    documents: &[Value],
    mut out: W,
) -> AnyhowResult<()> {
    let router = SwitchRouter::new(config);
    let mut dropped = 0;

    for (position, document) in documents.iter().enumerate() {
        let result = router.route(document);
        if result.is_dropped() {
            dropped += 1;
        }

        tracing::debug!(
            target: TRACING_TARGET_EVALUATE,
            position,
            matched_outputs = ?result.matched_outputs,
            "Document routed"
        );

        serde_json::to_writer(&mut out, &result).context("failed to write routing result")?;
        writeln!(out).context("failed to write routing result")?;
    }

    out.flush().context("failed to flush output")?;

    tracing::info!(
        target: TRACING_TARGET_EVALUATE,
        documents = documents.len(),
        dropped,
        "Routing completed"
    );

    Ok(())
}

/// Writes the output ports of the switch node as a JSON array.
pub fn write_ports<W: Write>(config: &RoutingConfiguration, mut out: W) -> AnyhowResult<()> {
    let ports: Vec<OutputPort> = output_ports(config);
    serde_json::to_writer_pretty(&mut out, &ports).context("failed to write output ports")?;
    writeln!(out).context("failed to write output ports")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use nvisy_switch::{Condition, Operator, Rule};
    use serde_json::json;

    use super::*;

    fn config() -> RoutingConfiguration {
        RoutingConfiguration::rules(vec![Rule::new(
            vec![Condition::new("kind", Operator::Equals, "pdf")],
            0,
        )])
    }

    #[test]
    fn test_route_documents_writes_lines() {
        let documents = vec![json!({ "kind": "pdf" }), json!({ "kind": "png" })];
        let mut out = Vec::new();

        route_documents(&config(), &documents, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                json!({ "matchedOutputs": [0], "data": { "kind": "pdf" } }),
                json!({ "matchedOutputs": [], "data": { "kind": "png" } }),
            ]
        );
    }

    #[test]
    fn test_validate_config_accepts_valid() {
        assert!(validate_config(&config()).is_ok());
    }

    #[test]
    fn test_validate_config_reports_violations() {
        let invalid: RoutingConfiguration = serde_json::from_value(json!({
            "mode": "expression",
            "routes": [{ "value": [1], "outputIndex": 0 }],
            "fallbackOutput": -3
        }))
        .unwrap();

        let error = validate_config(&invalid).unwrap_err();
        let report = format!("{error:#}");
        assert!(report.starts_with("invalid routing configuration: "));
        assert!(report.contains("fallback_output"));
        assert!(report.contains("route value must be a string, number or boolean"));
    }

    #[test]
    fn test_write_ports() {
        let mut out = Vec::new();
        write_ports(&config().with_fallback(1), &mut out).unwrap();

        let ports: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            ports,
            json!([
                { "id": "route0", "label": "Output 0" },
                { "id": "fallback", "label": "Fallback" }
            ])
        );
    }
}
