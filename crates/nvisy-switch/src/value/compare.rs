//! Equality and emptiness checks.

use serde_json::{Number, Value};

/// Deep value equality used by condition operators.
///
/// Numbers compare numerically (`5 == 5.0`), arrays element-wise in order
/// and objects by key set and per-key equality. Values of different types
/// are never equal. Two absent values are equal; absent never equals a
/// present `null`.
pub fn deep_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => values_equal(a, b),
        _ => false,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| values_equal(a, b)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Strict scalar identity used by expression-mode routes.
///
/// No coercion is applied: `5` does not equal `"5"` and `true` does not
/// equal `1`. Arrays and objects are never strictly equal to anything,
/// since a route literal can only be a scalar.
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Returns `true` for absent, `null`, `""`, `[]` and `{}`.
///
/// Every other value is non-empty, including `0`, `false` and `" "`.
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Bool(_) | Value::Number(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deep_equal_composites() {
        let a = json!({ "tags": ["a", "b"], "meta": { "n": 1 } });
        let b = json!({ "meta": { "n": 1.0 }, "tags": ["a", "b"] });
        assert!(deep_equal(Some(&a), Some(&b)));

        let c = json!({ "tags": ["b", "a"], "meta": { "n": 1 } });
        assert!(!deep_equal(Some(&a), Some(&c)));
    }

    #[test]
    fn test_deep_equal_no_coercion() {
        assert!(!deep_equal(Some(&json!(1)), Some(&json!("1"))));
        assert!(!deep_equal(Some(&json!(true)), Some(&json!(1))));
        assert!(!deep_equal(Some(&json!(null)), Some(&json!(""))));
    }

    #[test]
    fn test_deep_equal_absent() {
        assert!(deep_equal(None, None));
        assert!(!deep_equal(None, Some(&Value::Null)));
        assert!(!deep_equal(Some(&Value::Null), None));
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let a = json!(u64::MAX);
        let b = json!(u64::MAX - 1);
        assert!(!deep_equal(Some(&a), Some(&b)));
        assert!(deep_equal(Some(&a), Some(&a)));
    }

    #[test]
    fn test_strict_equal() {
        assert!(strict_equal(&json!(5), &json!(5)));
        assert!(strict_equal(&json!(5), &json!(5.0)));
        assert!(!strict_equal(&json!(5), &json!("5")));
        assert!(!strict_equal(&json!("5"), &json!(5)));
        assert!(!strict_equal(&json!(true), &json!(1)));
        assert!(!strict_equal(&json!([1]), &json!([1])));
        assert!(!strict_equal(&json!({}), &json!({})));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&json!(null))));
        assert!(is_empty(Some(&json!(""))));
        assert!(is_empty(Some(&json!([]))));
        assert!(is_empty(Some(&json!({}))));

        assert!(!is_empty(Some(&json!(0))));
        assert!(!is_empty(Some(&json!(false))));
        assert!(!is_empty(Some(&json!(" "))));
        assert!(!is_empty(Some(&json!([null]))));
        assert!(!is_empty(Some(&json!({ "k": null }))));
    }
}
