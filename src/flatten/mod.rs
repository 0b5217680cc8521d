//! Flattening of nested structures.
//!
//! - [`flatten`]: depth-first, pre-order leaves of any [`IntoNested`] value
//! - [`flatten_text`]: the characters of a top-level string
//! - [`flatten_dict`]: post-order `(key, node)` pairs of a [`DictNode`] mapping
//!
//! Whether a value is expanded is decided by its type, through the
//! [`IntoNested`] capability trait, rather than by probing it at run time.
//! Strings nested inside containers are leaves.
//!
//! None of the flatteners guard against cycles. The owned [`Nested`] and
//! [`DictNode`] trees cannot be cyclic, but a user-defined [`IntoNested`]
//! implementation that never bottoms out will not terminate.
//!
//! # Examples
//!
//! ```rust
//! use lambars_idioms::flatten::{DictNode, flatten, flatten_dict};
//! use lambars_idioms::nested;
//! use std::collections::BTreeMap;
//!
//! assert_eq!(flatten(nested![1, [2, [3]]]).collect::<Vec<_>>(), [1, 2, 3]);
//!
//! let config = BTreeMap::from([(
//!     "server",
//!     DictNode::branch([("port", DictNode::Value(8080))]),
//! )]);
//! let keys: Vec<_> = flatten_dict(&config).map(|(key, _)| *key).collect();
//! assert_eq!(keys, ["port", "server"]);
//! ```

mod nested;
mod nested_macro;
mod tree;

pub use nested::{Flatten, IntoNested, Nested, flatten, flatten_text};
pub use tree::{DictNode, FlattenDict, flatten_dict};
