//! # lambars-idioms
//!
//! Lazy iterator idioms for Rust, in the spirit of the classic
//! "itertools recipes".
//!
//! ## Overview
//!
//! - **Selection**: pick the keys of a table whose values satisfy
//!   per-key constraints, with operators, named predicates or closures
//! - **Flattening**: depth-first leaves of nested containers, and
//!   post-order pairs of nested mappings
//! - **Generators**: repeated calls of an impure function, and endless
//!   streams of random choices with optional sentinels
//! - **Prefixes**: the longest common prefix of strings or slices
//!
//! Every helper returns an [`Iterator`]. Fallible helpers fail when the
//! iterator is built, never while it is consumed.
//!
//! ## Feature Flags
//!
//! - `select`: [`predicate`] and [`select`] modules
//! - `flatten`: [`flatten`] module and the [`nested!`] macro
//! - `generate`: [`generate::call`]
//! - `random`: random streams in [`generate`] (pulls in `rand`)
//! - `serde`: serde support for [`predicate::Operator`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_idioms::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let subjects = BTreeMap::from([("cake", 50), ("bread", 20), ("pie", 100)]);
//! let constraints: BTreeMap<_, Constraint<i32>> = BTreeMap::from([
//!     ("cake", (Operator::Less, 60).into()),
//!     ("bread", (Operator::LessOrEqual, 20).into()),
//!     ("pie", (Operator::Less, 80).into()),
//! ]);
//! let selected: Vec<_> = select(&subjects, &constraints, Resolver::Direct)
//!     .unwrap()
//!     .collect();
//! assert_eq!(selected, [&"bread", &"cake"]);
//!
//! let leaves: Vec<_> = flatten(nested![1, [2, [3, [4, [5]]]]]).collect();
//! assert_eq!(leaves, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(common_prefix(["lambda", "lambars"]), "lamb");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lambars_idioms::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, LookupError, RandomError};
    pub use crate::prefix::*;

    #[cfg(feature = "select")]
    pub use crate::predicate::*;

    #[cfg(feature = "select")]
    pub use crate::select::*;

    #[cfg(feature = "flatten")]
    pub use crate::flatten::*;

    #[cfg(feature = "flatten")]
    pub use crate::nested;

    #[cfg(feature = "generate")]
    pub use crate::generate::*;
}

pub mod error;
pub mod prefix;

#[cfg(feature = "select")]
pub mod predicate;

#[cfg(feature = "select")]
pub mod select;

#[cfg(feature = "flatten")]
pub mod flatten;

#[cfg(feature = "generate")]
pub mod generate;
