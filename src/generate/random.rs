//! Infinite streams of random choices.
//!
//! Every stream owns its random number generator. The `random_*` functions
//! seed a fresh [`StdRng`] from the operating system on each call; the
//! `*_with` variants take any [`Rng`] instead, which makes the output
//! reproducible:
//!
//! ```rust
//! use lambars_idioms::generate::random_digits_with;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let first: Vec<_> = random_digits_with(StdRng::seed_from_u64(7)).take(8).collect();
//! let second: Vec<_> = random_digits_with(StdRng::seed_from_u64(7)).take(8).collect();
//! assert_eq!(first, second);
//! ```

use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::RandomError;

/// The ASCII letters, lowercase first.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Creates an infinite stream of uniform random choices from `domain`,
/// using a freshly seeded generator.
///
/// # Errors
///
/// [`RandomError::EmptyDomain`] if `domain` has no elements.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::generate::random_stream;
///
/// let colors = ["red", "green", "blue"];
/// let picks: Vec<_> = random_stream(colors).unwrap().take(10).collect();
/// assert_eq!(picks.len(), 10);
/// assert!(picks.iter().all(|color| colors.contains(color)));
/// ```
pub fn random_stream<T>(domain: impl Into<Vec<T>>) -> Result<RandomStream<T, StdRng>, RandomError> {
    RandomStream::new(StdRng::from_os_rng(), domain.into())
}

/// Creates an infinite stream of uniform random choices from `domain`,
/// drawing from `rng`.
///
/// # Errors
///
/// [`RandomError::EmptyDomain`] if `domain` has no elements.
pub fn random_stream_with<T, R: Rng>(
    rng: R,
    domain: impl Into<Vec<T>>,
) -> Result<RandomStream<T, R>, RandomError> {
    RandomStream::new(rng, domain.into())
}

/// A stream of random ASCII letters.
///
/// ```rust
/// use lambars_idioms::generate::random_alphabets;
///
/// let word: String = random_alphabets().until('z').take(16).collect();
/// assert!(word.chars().all(|letter| letter.is_ascii_alphabetic() && letter != 'z'));
/// ```
pub fn random_alphabets() -> RandomStream<char, StdRng> {
    random_alphabets_with(StdRng::from_os_rng())
}

/// [`random_alphabets`] drawing from `rng`.
pub fn random_alphabets_with<R: Rng>(rng: R) -> RandomStream<char, R> {
    RandomStream::from_nonempty(rng, ASCII_LETTERS.chars().collect())
}

/// A stream of random bits, `1` or `0`.
pub fn random_bits() -> RandomStream<u8, StdRng> {
    random_bits_with(StdRng::from_os_rng())
}

/// [`random_bits`] drawing from `rng`.
pub fn random_bits_with<R: Rng>(rng: R) -> RandomStream<u8, R> {
    RandomStream::from_nonempty(rng, vec![1, 0])
}

/// A stream of random decimal digits, `0` to `9`.
///
/// ```rust
/// use lambars_idioms::generate::random_digits;
///
/// // Stops right before the first 0 is drawn.
/// let digits: Vec<u8> = random_digits().until(0).take(100).collect();
/// assert!(digits.iter().all(|digit| (1..=9).contains(digit)));
/// ```
pub fn random_digits() -> RandomStream<u8, StdRng> {
    random_digits_with(StdRng::from_os_rng())
}

/// [`random_digits`] drawing from `rng`.
pub fn random_digits_with<R: Rng>(rng: R) -> RandomStream<u8, R> {
    RandomStream::from_nonempty(rng, (0..=9).collect())
}

/// An infinite stream of uniform random choices from a finite domain.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RandomStream<T, R> {
    domain: Vec<T>,
    rng: R,
}

impl<T, R: Rng> RandomStream<T, R> {
    fn new(rng: R, domain: Vec<T>) -> Result<Self, RandomError> {
        if domain.is_empty() {
            tracing::debug!("refused random stream over an empty domain");
            return Err(RandomError::EmptyDomain);
        }
        Ok(Self::from_nonempty(rng, domain))
    }

    fn from_nonempty(rng: R, domain: Vec<T>) -> Self {
        tracing::debug!(
            domain = domain.len(),
            rng = std::any::type_name::<R>(),
            "created random stream"
        );
        Self { domain, rng }
    }

    /// Returns the values this stream chooses from.
    #[must_use]
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Ends the stream right before the first value equal to `sentinel`.
    ///
    /// The sentinel itself is never yielded. If the domain does not contain
    /// the sentinel, the stream stays infinite.
    pub fn until(self, sentinel: T) -> UntilSentinel<T, R>
    where
        T: PartialEq,
    {
        UntilSentinel {
            stream: self,
            sentinel,
            finished: false,
        }
    }
}

impl<T: Clone, R: Rng> Iterator for RandomStream<T, R> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.domain.choose(&mut self.rng).cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone, R: Rng> FusedIterator for RandomStream<T, R> {}

/// A random stream truncated before its first sentinel value.
///
/// Created by [`RandomStream::until`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct UntilSentinel<T, R> {
    stream: RandomStream<T, R>,
    sentinel: T,
    finished: bool,
}

impl<T: Clone + PartialEq, R: Rng> Iterator for UntilSentinel<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let value = self.stream.next()?;
        if value == self.sentinel {
            tracing::trace!("random stream reached its sentinel");
            self.finished = true;
            None
        } else {
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished { (0, Some(0)) } else { (0, None) }
    }
}

impl<T: Clone + PartialEq, R: Rng> FusedIterator for UntilSentinel<T, R> {}
