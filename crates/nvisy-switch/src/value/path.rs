//! Field path resolution.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde_json::Value;

/// A single segment of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PathSegment {
    /// Plain key, e.g. `name`.
    #[display("{_0}")]
    Key(String),
    /// Key followed by an index, e.g. `items[3]`.
    #[display("{_0}[{_1}]")]
    Indexed(String, usize),
}

impl PathSegment {
    fn parse(segment: &str) -> Self {
        let indexed = segment
            .strip_suffix(']')
            .and_then(|rest| rest.split_once('['))
            .filter(|(key, index)| {
                !key.is_empty()
                    && !index.is_empty()
                    && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
                    && index.bytes().all(|b| b.is_ascii_digit())
            })
            .and_then(|(key, index)| Some((key, index.parse::<usize>().ok()?)));

        match indexed {
            Some((key, index)) => Self::Indexed(key.to_owned(), index),
            None => Self::Key(segment.to_owned()),
        }
    }

    fn step<'a>(&self, current: &'a Value) -> Option<&'a Value> {
        match self {
            Self::Key(key) => lookup(current, key),
            Self::Indexed(key, index) => match current.as_object()?.get(key)? {
                Value::Array(items) => items.get(*index),
                other => Some(other),
            },
        }
    }
}

/// Plain key lookup: object keys, or array positions written as digits.
fn lookup<'a>(current: &'a Value, key: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) => {
            items.get(key.parse::<usize>().ok()?)
        }
        _ => None,
    }
}

/// A parsed dotted/indexed path such as `order.items[0].sku`.
///
/// The empty path addresses the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Parses a path string. Parsing never fails; unusual segments are
    /// treated as plain keys.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }

        Self {
            segments: path.split('.').map(PathSegment::parse).collect(),
        }
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns `true` if this path addresses the whole value.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolves this path against `value`.
    ///
    /// Returns `None` when any step is missing or a `null` is reached
    /// before the last segment.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments.iter().try_fold(value, |current, segment| {
            if current.is_null() {
                return None;
            }
            segment.step(current)
        })
    }
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Parses `path` and resolves it against `value` in one call.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    FieldPath::parse(path).resolve(value)
}
