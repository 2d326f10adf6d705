//! Routing configuration and input document sources.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use nvisy_switch::RoutingConfiguration;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::TRACING_TARGET_CONFIG;

/// Where routing configuration and input documents are read from.
///
/// # Environment Variables
///
/// - `NVISY_SWITCH_CONFIG` - Path to the routing configuration (JSON)
/// - `NVISY_SWITCH_INPUT` - Path to the input document(s), `-` for stdin
/// - `NVISY_SWITCH_NDJSON` - Treat every input line as a separate document
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct InputConfig {
    /// Path to the routing configuration file (JSON).
    #[arg(short = 'c', long = "config", env = "NVISY_SWITCH_CONFIG")]
    pub config: PathBuf,

    /// Path to the input document(s); stdin when omitted or `-`.
    #[arg(short = 'i', long = "input", env = "NVISY_SWITCH_INPUT")]
    pub input: Option<PathBuf>,

    /// Treat every non-blank input line as a separate JSON document.
    #[arg(long, env = "NVISY_SWITCH_NDJSON")]
    #[serde(default)]
    pub ndjson: bool,
}

/// Resolved input location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InputConfig {
    /// Returns where input documents are read from.
    pub fn source(&self) -> InputSource {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    /// Reads and parses the routing configuration.
    pub fn load_routing_config(&self) -> AnyhowResult<RoutingConfiguration> {
        let raw = fs::read_to_string(&self.config).with_context(|| {
            format!(
                "failed to read routing configuration {}",
                self.config.display()
            )
        })?;

        let config = RoutingConfiguration::from_json(&raw).with_context(|| {
            format!(
                "failed to parse routing configuration {}",
                self.config.display()
            )
        })?;

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            path = %self.config.display(),
            mode = %config.mode,
            fallback_output = config.fallback_output,
            allow_multiple_matches = config.allow_multiple_matches,
            "Routing configuration loaded"
        );

        Ok(config)
    }

    /// Reads every input document from the configured source.
    pub fn read_documents(&self) -> AnyhowResult<Vec<Value>> {
        let source = self.source();
        let raw = match &source {
            InputSource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read input from stdin")?;
                buf
            }
            InputSource::File(path) => read_file(path)?,
        };

        let documents = parse_documents(&raw, self.ndjson)
            .with_context(|| format!("failed to parse input from {source}"))?;

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            source = %source,
            documents = documents.len(),
            "Input documents loaded"
        );

        Ok(documents)
    }
}

fn read_file(path: &Path) -> AnyhowResult<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read input {}", path.display()))
}

/// Parses a single document, or one document per non-blank line.
pub fn parse_documents(raw: &str, ndjson: bool) -> AnyhowResult<Vec<Value>> {
    if !ndjson {
        let document = serde_json::from_str(raw).context("invalid JSON document")?;
        return Ok(vec![document]);
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid JSON on line {}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    fn input_config(config: PathBuf, input: Option<PathBuf>, ndjson: bool) -> InputConfig {
        InputConfig {
            config,
            input,
            ndjson,
        }
    }

    #[test]
    fn test_source() {
        let cfg = input_config("c.json".into(), None, false);
        assert_eq!(cfg.source(), InputSource::Stdin);

        let cfg = input_config("c.json".into(), Some("-".into()), false);
        assert_eq!(cfg.source(), InputSource::Stdin);

        let cfg = input_config("c.json".into(), Some("in.json".into()), false);
        assert_eq!(cfg.source(), InputSource::File("in.json".into()));
    }

    #[test]
    fn test_parse_single_document() {
        let docs = parse_documents("{\n  \"a\": 1\n}\n", false).unwrap();
        assert_eq!(docs, vec![json!({ "a": 1 })]);
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let docs = parse_documents("{\"a\":1}\n\n  \n\"x\"\n", true).unwrap();
        assert_eq!(docs, vec![json!({ "a": 1 }), json!("x")]);
    }

    #[test]
    fn test_parse_ndjson_reports_line() {
        let err = parse_documents("{}\n{oops\n", true).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();

        let config_path = dir.path().join("switch.json");
        let mut file = fs::File::create(&config_path).unwrap();
        write!(
            file,
            r#"{{ "mode": "expression", "valueToMatch": 1, "routes": [{{ "value": 1, "outputIndex": 0 }}] }}"#
        )
        .unwrap();

        let input_path = dir.path().join("input.ndjson");
        fs::write(&input_path, "{\"n\":1}\n{\"n\":2}\n").unwrap();

        let cfg = input_config(config_path, Some(input_path), true);
        let config = cfg.load_routing_config().unwrap();
        assert_eq!(config.active_routes().len(), 1);
        assert_eq!(cfg.read_documents().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_config_file() {
        let cfg = input_config("/nonexistent/switch.json".into(), None, false);
        let err = cfg.load_routing_config().unwrap_err();
        assert!(err.to_string().contains("failed to read routing configuration"));
    }
}
