//! Lazy sequences of repeated function calls.

use std::fmt;
use std::iter::{Filter, FusedIterator};

/// Calls a function with its arguments packed into a tuple.
///
/// Implemented for every `FnMut` of arity 0 to 6, so that [`call`] can keep
/// a fixed argument tuple and spread it on each invocation.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::generate::Apply;
///
/// let mut add = |first: i32, second: i32| first + second;
/// assert_eq!(add.apply((2, 3)), 5);
///
/// let mut answer = || 42;
/// assert_eq!(answer.apply(()), 42);
/// ```
pub trait Apply<Arguments> {
    /// The function's return type.
    type Output;

    /// Invokes the function with `arguments` spread as parameters.
    fn apply(&mut self, arguments: Arguments) -> Self::Output;
}

macro_rules! impl_apply {
    ($($argument:ident),*) => {
        impl<Function, Return, $($argument),*> Apply<($($argument,)*)> for Function
        where
            Function: FnMut($($argument),*) -> Return,
        {
            type Output = Return;

            #[inline]
            #[allow(non_snake_case)]
            fn apply(&mut self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument),*)
            }
        }
    };
}

impl_apply!();
impl_apply!(A);
impl_apply!(A, B);
impl_apply!(A, B, C);
impl_apply!(A, B, C, D);
impl_apply!(A, B, C, D, E);
impl_apply!(A, B, C, D, E, G);

/// Creates an unbounded lazy sequence of `function(arguments...)` results.
///
/// Each pull performs exactly one call. `arguments` is a tuple that is
/// cloned for every call. Use [`RepeatCall::times`] to bound the number of
/// calls and [`RepeatCall::when`] to keep only some results.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::generate::call;
///
/// let mut counter = 0;
/// let results: Vec<_> = call(
///     |step: i32| {
///         counter += step;
///         counter
///     },
///     (2,),
/// )
/// .times(4)
/// .collect();
/// assert_eq!(results, [2, 4, 6, 8]);
/// ```
pub fn call<F, Arguments>(function: F, arguments: Arguments) -> RepeatCall<F, Arguments>
where
    F: Apply<Arguments>,
    Arguments: Clone,
{
    tracing::debug!(
        arguments = std::any::type_name::<Arguments>(),
        "created repeated-call generator"
    );
    RepeatCall {
        function,
        arguments,
        remaining: None,
    }
}

/// A lazy sequence of the results of calling a function repeatedly.
///
/// Created by [`call`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RepeatCall<F, Arguments> {
    function: F,
    arguments: Arguments,
    remaining: Option<usize>,
}

impl<F, Arguments> RepeatCall<F, Arguments>
where
    F: Apply<Arguments>,
    Arguments: Clone,
{
    /// Limits the sequence to `count` calls in total.
    #[must_use]
    pub fn times(mut self, count: usize) -> Self {
        tracing::debug!(count, "bounded repeated-call generator");
        self.remaining = Some(count);
        self
    }

    /// Limits the sequence to `count` calls, or removes the limit for `None`.
    #[must_use]
    pub fn limit(mut self, count: Option<usize>) -> Self {
        self.remaining = count;
        self
    }

    /// Keeps only the results for which `predicate` holds.
    ///
    /// The call limit still counts every underlying call, so a filtered
    /// sequence never yields more values than calls were made.
    ///
    /// ```rust
    /// use lambars_idioms::generate::call;
    ///
    /// let mut next = 0;
    /// let even: Vec<_> = call(
    ///     || {
    ///         next += 1;
    ///         next
    ///     },
    ///     (),
    /// )
    /// .times(7)
    /// .when(|value| value % 2 == 0)
    /// .collect();
    /// assert_eq!(even, [2, 4, 6]);
    /// ```
    pub fn when<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&F::Output) -> bool,
    {
        self.filter(predicate)
    }

    /// Returns the number of calls left, or `None` if unbounded.
    #[must_use]
    pub const fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}

impl<F, Arguments> Iterator for RepeatCall<F, Arguments>
where
    F: Apply<Arguments>,
    Arguments: Clone,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.checked_sub(1)?;
        }
        tracing::trace!(remaining = ?self.remaining, "calling");
        Some(self.function.apply(self.arguments.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

impl<F, Arguments> FusedIterator for RepeatCall<F, Arguments>
where
    F: Apply<Arguments>,
    Arguments: Clone,
{
}

impl<F, Arguments: fmt::Debug> fmt::Debug for RepeatCall<F, Arguments> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepeatCall")
            .field("arguments", &self.arguments)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
