//! Error types for the idiom helpers.
//!
//! Every fallible operation in this crate fails eagerly, at the point where
//! its lazy sequence is constructed. Once an iterator has been returned it
//! never produces an error.
//!
//! - [`LookupError`]: a predicate descriptor, auxiliary table entry, or
//!   constraint could not be found
//! - [`RandomError`]: a random stream could not be built
//! - [`Error`]: the union of both, for callers that mix the helpers

/// Represents a failed lookup while resolving a selection.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::error::LookupError;
///
/// let error = LookupError::UnknownOperator {
///     token: "=>".to_string(),
/// };
/// assert_eq!(format!("{error}"), "unknown comparison operator `=>`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// A token was not one of `>=`, `>`, `<`, `==`, `<=`.
    UnknownOperator {
        /// The token that failed to parse.
        token: String,
    },
    /// The auxiliary predicate table has no entry for the given name.
    MissingPredicate {
        /// The name that was looked up.
        name: String,
    },
    /// A subject has no matching constraint.
    MissingConstraint {
        /// The subject key, rendered with `Debug`.
        key: String,
    },
    /// The descriptor kind cannot be resolved in the current mode.
    UnexpectedDescriptor {
        /// The descriptor kind the resolver accepts.
        expected: &'static str,
        /// The descriptor kind that was supplied.
        found: &'static str,
    },
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { token } => {
                write!(formatter, "unknown comparison operator `{token}`")
            }
            Self::MissingPredicate { name } => {
                write!(formatter, "no predicate named `{name}` in the table")
            }
            Self::MissingConstraint { key } => {
                write!(formatter, "no constraint for subject {key}")
            }
            Self::UnexpectedDescriptor { expected, found } => {
                write!(formatter, "expected {expected} descriptor, found {found}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Represents an error when building a random stream.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::error::RandomError;
///
/// assert_eq!(
///     format!("{}", RandomError::EmptyDomain),
///     "cannot draw random values from an empty domain"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// The domain to choose from has no elements.
    EmptyDomain,
}

impl std::fmt::Display for RandomError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDomain => write!(
                formatter,
                "cannot draw random values from an empty domain"
            ),
        }
    }
}

impl std::error::Error for RandomError {}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lookup failed while resolving a selection.
    Lookup(LookupError),
    /// A random stream could not be built.
    Random(RandomError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(error) => write!(formatter, "{error}"),
            Self::Random(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lookup(error) => Some(error),
            Self::Random(error) => Some(error),
        }
    }
}

impl From<LookupError> for Error {
    fn from(error: LookupError) -> Self {
        Self::Lookup(error)
    }
}

impl From<RandomError> for Error {
    fn from(error: RandomError) -> Self {
        Self::Random(error)
    }
}
