//! Condition operators.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Operator applied by a [`Condition`] to the resolved field value.
///
/// Names are camelCase on the wire (`greaterThanOrEqual`, `notIn`, ...).
///
/// [`Condition`]: super::Condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Operator {
    /// Deep equality without type coercion.
    Equals,
    /// Negation of [`Operator::Equals`].
    NotEquals,
    /// Substring of a string, or element of an array.
    Contains,
    /// Negation of [`Operator::Contains`].
    NotContains,
    /// String prefix.
    StartsWith,
    /// String suffix.
    EndsWith,
    /// Numeric `>` after coercion.
    GreaterThan,
    /// Numeric `<` after coercion.
    LessThan,
    /// Numeric `>=` after coercion.
    GreaterThanOrEqual,
    /// Numeric `<=` after coercion.
    LessThanOrEqual,
    /// Absent, `null`, `""`, `[]` or `{}`.
    IsEmpty,
    /// Negation of [`Operator::IsEmpty`].
    IsNotEmpty,
    /// `true`, `"true"` or `1`.
    IsTrue,
    /// `false`, `"false"` or `0`.
    IsFalse,
    /// Regular expression search in a string.
    Regex,
    /// Field value is an element of the operand array.
    In,
    /// Negation of [`Operator::In`].
    NotIn,
}

impl Operator {
    /// Returns `true` if the operator ignores the condition operand.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Self::IsEmpty | Self::IsNotEmpty | Self::IsTrue | Self::IsFalse
        )
    }

    /// Returns `true` for the four ordering operators.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::LessThan | Self::GreaterThanOrEqual | Self::LessThanOrEqual
        )
    }
}
