//! Predicate descriptors and constraints.

use std::fmt;
use std::rc::Rc;

use super::Operator;

/// A shared binary predicate comparing a subject against a reference value.
pub type Comparator<V> = Rc<dyn Fn(&V, &V) -> bool>;

/// Describes which binary predicate a constraint uses.
///
/// A descriptor is only meaningful together with a
/// [`Resolver`](super::Resolver), which decides how each variant is turned
/// into an actual predicate.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::predicate::{Operator, PredicateDescriptor};
///
/// let by_operator: PredicateDescriptor<i32> = Operator::Less.into();
/// let by_name = PredicateDescriptor::<i32>::named("divides");
/// let direct = PredicateDescriptor::direct(|subject: &i32, reference: &i32| {
///     subject % reference == 0
/// });
///
/// assert_eq!(by_operator.kind(), "an operator");
/// assert_eq!(by_name.kind(), "a named");
/// assert_eq!(direct.kind(), "a direct comparator");
/// ```
pub enum PredicateDescriptor<V> {
    /// One of the built-in comparison operators.
    Operator(Operator),
    /// A key into an auxiliary [`PredicateTable`](super::PredicateTable),
    /// or an operator token when built-in operators are enabled.
    Named(String),
    /// A directly callable comparator.
    Direct(Comparator<V>),
}

impl<V> PredicateDescriptor<V> {
    /// Creates a descriptor naming a table entry or operator token.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a descriptor wrapping a comparator.
    #[must_use]
    pub fn direct<F>(comparator: F) -> Self
    where
        F: Fn(&V, &V) -> bool + 'static,
    {
        Self::Direct(Rc::new(comparator))
    }

    /// Returns a short description of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Operator(_) => "an operator",
            Self::Named(_) => "a named",
            Self::Direct(_) => "a direct comparator",
        }
    }
}

impl<V> Clone for PredicateDescriptor<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Operator(operator) => Self::Operator(*operator),
            Self::Named(name) => Self::Named(name.clone()),
            Self::Direct(comparator) => Self::Direct(Rc::clone(comparator)),
        }
    }
}

impl<V> fmt::Debug for PredicateDescriptor<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(operator) => formatter.debug_tuple("Operator").field(operator).finish(),
            Self::Named(name) => formatter.debug_tuple("Named").field(name).finish(),
            Self::Direct(_) => formatter.write_str("Direct(<comparator>)"),
        }
    }
}

impl<V> From<Operator> for PredicateDescriptor<V> {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

impl<V> From<&str> for PredicateDescriptor<V> {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl<V> From<String> for PredicateDescriptor<V> {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// A predicate descriptor paired with the value a subject is checked against.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::predicate::{Constraint, Operator};
///
/// let cheaper_than_sixty: Constraint<i32> = (Operator::Less, 60).into();
/// assert_eq!(cheaper_than_sixty.reference, 60);
///
/// let at_most_twenty: Constraint<i32> = ("<=", 20).into();
/// assert_eq!(at_most_twenty.reference, 20);
/// ```
pub struct Constraint<V> {
    /// How to compare.
    pub descriptor: PredicateDescriptor<V>,
    /// What to compare against.
    pub reference: V,
}

impl<V> Constraint<V> {
    /// Creates a constraint from a descriptor and a reference value.
    #[must_use]
    pub fn new(descriptor: impl Into<PredicateDescriptor<V>>, reference: V) -> Self {
        Self {
            descriptor: descriptor.into(),
            reference,
        }
    }

    /// Creates a constraint using a directly callable comparator.
    #[must_use]
    pub fn direct<F>(comparator: F, reference: V) -> Self
    where
        F: Fn(&V, &V) -> bool + 'static,
    {
        Self {
            descriptor: PredicateDescriptor::direct(comparator),
            reference,
        }
    }
}

impl<V: Clone> Clone for Constraint<V> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            reference: self.reference.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Constraint<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Constraint")
            .field("descriptor", &self.descriptor)
            .field("reference", &self.reference)
            .finish()
    }
}

impl<V> From<(Operator, V)> for Constraint<V> {
    fn from((operator, reference): (Operator, V)) -> Self {
        Self::new(operator, reference)
    }
}

impl<V> From<(&str, V)> for Constraint<V> {
    fn from((name, reference): (&str, V)) -> Self {
        Self::new(name, reference)
    }
}
