//! Resolution of predicate descriptors into callable predicates.

use std::fmt;

use super::{Comparator, Operator, PredicateDescriptor, PredicateTable};
use crate::error::LookupError;

/// Decides how a [`PredicateDescriptor`] becomes a predicate.
///
/// | Mode        | `Operator(op)`          | `Named(name)`              | `Direct(f)` |
/// |-------------|-------------------------|----------------------------|-------------|
/// | `Direct`    | `op`                    | error                      | `f`         |
/// | `Table(t)`  | `t[op.symbol()]`        | `t[name]`                  | error       |
/// | `Operators` | `op`                    | `name` parsed as a token   | error       |
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::predicate::{PredicateDescriptor, Resolver};
///
/// let descriptor = PredicateDescriptor::<i32>::named(">");
/// let predicate = Resolver::Operators.resolve(&descriptor).unwrap();
/// assert!(predicate.test(&3, &2));
///
/// assert!(Resolver::Direct.resolve(&descriptor).is_err());
/// ```
#[derive(Default)]
pub enum Resolver<'t, V> {
    /// Descriptors must be callable themselves.
    #[default]
    Direct,
    /// Descriptors are keys into an auxiliary table.
    Table(&'t PredicateTable<V>),
    /// Descriptors must denote one of the built-in operators.
    Operators,
}

impl<'t, V> Resolver<'t, V> {
    /// Resolves `descriptor` into a predicate.
    ///
    /// # Errors
    ///
    /// - [`LookupError::UnknownOperator`] if a name is not an operator token
    ///   in [`Resolver::Operators`] mode
    /// - [`LookupError::MissingPredicate`] if the table has no such entry
    /// - [`LookupError::UnexpectedDescriptor`] if the descriptor kind is not
    ///   accepted by this mode
    pub fn resolve<'a>(
        &self,
        descriptor: &'a PredicateDescriptor<V>,
    ) -> Result<Resolved<'a, V>, LookupError>
    where
        't: 'a,
    {
        match (self, descriptor) {
            (Self::Direct | Self::Operators, PredicateDescriptor::Operator(operator)) => {
                Ok(Resolved::Operator(*operator))
            }
            (Self::Direct, PredicateDescriptor::Direct(comparator)) => {
                Ok(Resolved::Comparator(comparator))
            }
            (Self::Operators, PredicateDescriptor::Named(token)) => {
                token.parse().map(Resolved::Operator)
            }
            (Self::Table(table), PredicateDescriptor::Operator(operator)) => {
                lookup(*table, operator.symbol())
            }
            (Self::Table(table), PredicateDescriptor::Named(name)) => lookup(*table, name),
            (_, descriptor) => Err(LookupError::UnexpectedDescriptor {
                expected: self.expects(),
                found: descriptor.kind(),
            }),
        }
    }

    const fn expects(&self) -> &'static str {
        match self {
            Self::Direct => "a callable",
            Self::Table(_) => "a named",
            Self::Operators => "an operator",
        }
    }
}

fn lookup<'a, V>(table: &'a PredicateTable<V>, name: &str) -> Result<Resolved<'a, V>, LookupError> {
    table
        .get(name)
        .map(Resolved::Comparator)
        .ok_or_else(|| LookupError::MissingPredicate {
            name: name.to_string(),
        })
}

impl<V> Clone for Resolver<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Resolver<'_, V> {}

impl<V> fmt::Debug for Resolver<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => formatter.write_str("Direct"),
            Self::Table(table) => formatter.debug_tuple("Table").field(table).finish(),
            Self::Operators => formatter.write_str("Operators"),
        }
    }
}

/// A resolved binary predicate, borrowed from its descriptor or table.
pub enum Resolved<'a, V> {
    /// A built-in operator.
    Operator(Operator),
    /// A user-supplied comparator.
    Comparator(&'a Comparator<V>),
}

impl<V: PartialOrd> Resolved<'_, V> {
    /// Evaluates the predicate on `subject` and `reference`.
    #[inline]
    #[must_use]
    pub fn test(&self, subject: &V, reference: &V) -> bool {
        match self {
            Self::Operator(operator) => operator.apply(subject, reference),
            Self::Comparator(comparator) => comparator(subject, reference),
        }
    }
}

impl<V> fmt::Debug for Resolved<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(operator) => formatter.debug_tuple("Operator").field(operator).finish(),
            Self::Comparator(_) => formatter.write_str("Comparator(<comparator>)"),
        }
    }
}
