//! Predicate descriptors and their resolution.
//!
//! A selection constraint names its comparison in one of three ways, modelled
//! by [`PredicateDescriptor`]:
//!
//! - [`Operator`]: one of the built-in tokens `>=`, `>`, `<`, `==`, `<=`
//! - a name looked up in an auxiliary [`PredicateTable`]
//! - a directly callable [`Comparator`]
//!
//! A [`Resolver`] turns a descriptor into a [`Resolved`] predicate, or fails
//! with a [`LookupError`](crate::error::LookupError).
//!
//! # Examples
//!
//! ```rust
//! use lambars_idioms::predicate::{Constraint, PredicateTable, Resolver};
//!
//! let table = PredicateTable::new()
//!     .with("divides", |subject: &i32, reference: &i32| subject % reference == 0);
//! let constraint: Constraint<i32> = ("divides", 3).into();
//!
//! let predicate = Resolver::Table(&table).resolve(&constraint.descriptor).unwrap();
//! assert!(predicate.test(&9, &constraint.reference));
//! ```

mod descriptor;
mod operator;
mod resolver;
mod table;

pub use descriptor::{Comparator, Constraint, PredicateDescriptor};
pub use operator::Operator;
pub use resolver::{Resolved, Resolver};
pub use table::PredicateTable;
