//! Routing decision returned to the orchestrator.

use serde::Serialize;
use serde_json::Value;

/// Outcome of routing one input value.
///
/// `data` borrows the routed input, which is passed through untouched.
/// An empty `matched_outputs` means the data is dropped at this node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResult<'a> {
    /// Matched output indices in evaluation order, duplicates preserved.
    pub matched_outputs: Vec<usize>,
    /// The input value.
    pub data: &'a Value,
}

impl<'a> RoutingResult<'a> {
    /// Creates a new routing result.
    pub fn new(matched_outputs: Vec<usize>, data: &'a Value) -> Self {
        Self {
            matched_outputs,
            data,
        }
    }

    /// Returns `true` if the data is forwarded nowhere.
    pub fn is_dropped(&self) -> bool {
        self.matched_outputs.is_empty()
    }

    /// Returns `true` if `output_index` is among the matched outputs.
    pub fn routes_to(&self, output_index: usize) -> bool {
        self.matched_outputs.contains(&output_index)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialization() {
        let data = json!({ "id": 7 });
        let result = RoutingResult::new(vec![1, 1, 0], &data);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, json!({ "matchedOutputs": [1, 1, 0], "data": { "id": 7 } }));
    }

    #[test]
    fn test_helpers() {
        let data = json!(null);
        let dropped = RoutingResult::new(Vec::new(), &data);
        assert!(dropped.is_dropped());

        let routed = RoutingResult::new(vec![2], &data);
        assert!(!routed.is_dropped());
        assert!(routed.routes_to(2));
        assert!(!routed.routes_to(0));
    }
}
