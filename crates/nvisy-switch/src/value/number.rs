//! Best-effort numeric coercion.

use serde_json::Value;

/// Coerces a value to a number for the ordering operators.
///
/// Anything without a sensible numeric reading becomes `NaN`, which makes
/// every subsequent comparison `false`.
///
/// | Input | Result |
/// |---|---|
/// | absent | `NaN` |
/// | `null` | `0` |
/// | `false` / `true` | `0` / `1` |
/// | number | itself |
/// | string | trimmed; `""` is `0`, otherwise a numeric literal or `NaN` |
/// | `[]` | `0` |
/// | `[x]` | the string form of `x`, coerced |
/// | longer arrays, objects | `NaN` |
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_numeric(s),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => 0.0,
            [item] => single_element(item),
            _ => f64::NAN,
        },
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// A one-element array coerces through its string form, so `[null]` is
/// `0` but `[true]` is `NaN`.
fn single_element(item: &Value) -> f64 {
    match item {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric(s),
        Value::Array(_) => to_number(Some(item)),
        Value::Bool(_) | Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric(raw: &str) -> f64 {
    let s = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings, which are not
    // numeric literals here.
    let is_decimal_literal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
    .unwrap_or(f64::NAN)
}
