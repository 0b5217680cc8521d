//! The `nested!` macro for building heterogeneous nested literals.

/// Builds a [`Nested`](crate::flatten::Nested) tree from a bracketed literal.
///
/// Each element is either a bracketed group, which becomes a
/// [`Nested::Branch`](crate::flatten::Nested::Branch), or an expression,
/// which becomes a [`Nested::Leaf`](crate::flatten::Nested::Leaf). The outer
/// brackets of the invocation form the root branch.
///
/// The macro expands one element per recursive step, so a single branch with
/// more than about a hundred elements exceeds the default
/// `#![recursion_limit]`. Build long lists from an iterator instead:
///
/// ```rust
/// use lambars_idioms::flatten::{Nested, flatten};
/// use lambars_idioms::nested;
///
/// let long: Nested<u32> = (0..10_000).map(Nested::Leaf).collect();
/// let tree = nested![[0], [1, 2]];
/// assert_eq!(flatten(long).count(), 10_000);
/// assert_eq!(flatten(tree).count(), 3);
/// ```
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::flatten::{Nested, flatten};
/// use lambars_idioms::nested;
///
/// let tree = nested![1, [2, [3, [4, [5]]]]];
/// assert_eq!(tree.depth(), 5);
/// assert_eq!(flatten(tree).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
///
/// let empty: Nested<i32> = nested![];
/// assert_eq!(empty, Nested::Branch(vec![]));
///
/// let computed = nested![1 + 1, [-3, 2 * 4]];
/// assert_eq!(flatten(computed).collect::<Vec<_>>(), [2, -3, 8]);
/// ```
#[macro_export]
macro_rules! nested {
    (@list [$($done:expr,)*]) => {
        ::std::vec![$($done,)*]
    };
    (@list [$($done:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(@list [$($done,)* $crate::nested!($($inner)*),] $($($rest)*)?)
    };
    (@list [$($done:expr,)*] $leaf:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(
            @list [$($done,)* $crate::flatten::Nested::Leaf($leaf),] $($($rest)*)?
        )
    };
    ($($element:tt)*) => {
        $crate::flatten::Nested::Branch($crate::nested!(@list [] $($element)*))
    };
}
