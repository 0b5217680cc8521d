//! Constraint-based selection over keyed tables.
//!
//! Given a table of subjects and a table of constraints sharing the same
//! keys, [`select`] yields the keys whose subject satisfies its constraint.
//! [`select_by`] is the simplified form taking unary predicates.
//!
//! Both tables only need to implement [`KeyedTable`], which is provided for
//! `BTreeMap`, `HashMap` and association lists (`Vec<(K, V)>`).
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use lambars_idioms::predicate::Constraint;
//! use lambars_idioms::select::select_with_operators;
//!
//! let subjects = BTreeMap::from([("cake", 50), ("bread", 20), ("pie", 100)]);
//! let constraints: BTreeMap<_, Constraint<i32>> = BTreeMap::from([
//!     ("cake", ("<", 60).into()),
//!     ("bread", ("<=", 20).into()),
//!     ("pie", ("<", 80).into()),
//! ]);
//!
//! let affordable: Vec<_> = select_with_operators(&subjects, &constraints)
//!     .unwrap()
//!     .collect();
//! assert_eq!(affordable, [&"bread", &"cake"]);
//! ```

mod filter;
mod keyed;

pub use filter::{Select, select, select_by, select_with_operators, select_with_table};
pub use keyed::KeyedTable;
