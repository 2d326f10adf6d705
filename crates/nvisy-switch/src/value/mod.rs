//! Operations over the routed payload.
//!
//! Payloads are plain [`serde_json::Value`]s. A value that could not be
//! reached (missing key, out-of-range index) is represented as `None`,
//! which is distinct from a present JSON `null`.
//!
//! - [`FieldPath`]: dotted/indexed path resolution
//! - [`deep_equal`] and [`strict_equal`]: the two equality flavours
//! - [`to_number`]: best-effort numeric coercion
//! - [`is_empty`]: emptiness check used by `isEmpty`/`isNotEmpty`

mod compare;
mod number;
mod path;

pub use compare::{deep_equal, is_empty, strict_equal};
pub use number::to_number;
pub use path::{FieldPath, PathSegment, resolve};
