//! Lazy generators.
//!
//! - [`call`]: the results of calling a function over and over
//! - [`random_stream`] and its specializations: endless random choices from
//!   a finite domain (feature `random`)
//!
//! Both kinds of sequence are impure: each pull may observe different
//! state. Pulling is the only thing that advances them.
//!
//! # Examples
//!
//! ```rust
//! use lambars_idioms::generate::call;
//!
//! let mut seen = Vec::new();
//! let doubled: Vec<_> = call(
//!     |value: i32| {
//!         seen.push(value);
//!         value * 2
//!     },
//!     (21,),
//! )
//! .times(2)
//! .collect();
//! assert_eq!(doubled, [42, 42]);
//! assert_eq!(seen, [21, 21]);
//! ```

mod call;
#[cfg(feature = "random")]
mod random;

pub use call::{Apply, RepeatCall, call};
#[cfg(feature = "random")]
pub use random::{
    ASCII_LETTERS, RandomStream, UntilSentinel, random_alphabets, random_alphabets_with,
    random_bits, random_bits_with, random_digits, random_digits_with, random_stream,
    random_stream_with,
};
