//! The built-in comparison operators.
//!
//! [`Operator`] is the closed set of symbolic tokens a selection may refer
//! to when built-in operators are enabled: `>=`, `>`, `<`, `==` and `<=`.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// A built-in binary comparison, identified by its symbolic token.
///
/// Each operator compares a subject value (left) against a reference value
/// (right).
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::predicate::Operator;
///
/// let operator: Operator = "<=".parse().unwrap();
/// assert_eq!(operator, Operator::LessOrEqual);
/// assert!(operator.apply(&20, &20));
/// assert!(!operator.apply(&21, &20));
/// assert_eq!(operator.to_string(), "<=");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `>=`
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    GreaterOrEqual,
    /// `>`
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    Greater,
    /// `<`
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    Less,
    /// `==`
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Equal,
    /// `<=`
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    LessOrEqual,
}

impl Operator {
    /// Every built-in operator, in token-table order.
    pub const ALL: [Self; 5] = [
        Self::GreaterOrEqual,
        Self::Greater,
        Self::Less,
        Self::Equal,
        Self::LessOrEqual,
    ];

    /// Returns the symbolic token of this operator.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::GreaterOrEqual => ">=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "==",
            Self::LessOrEqual => "<=",
        }
    }

    /// Compares `subject` against `reference`.
    ///
    /// Values that are not comparable (e.g. `NaN`) fail every ordering
    /// operator.
    #[inline]
    #[must_use]
    pub fn apply<V: PartialOrd + ?Sized>(self, subject: &V, reference: &V) -> bool {
        match self {
            Self::GreaterOrEqual => subject >= reference,
            Self::Greater => subject > reference,
            Self::Less => subject < reference,
            Self::Equal => subject == reference,
            Self::LessOrEqual => subject <= reference,
        }
    }
}

impl FromStr for Operator {
    type Err = LookupError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == token)
            .ok_or_else(|| LookupError::UnknownOperator {
                token: token.to_string(),
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

static_assertions::assert_impl_all!(Operator: Copy, Send, Sync, FromStr);
