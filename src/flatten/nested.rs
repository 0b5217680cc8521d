//! Depth-first flattening of nested containers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::iter::FusedIterator;

/// A value that is either a leaf or an ordered list of nested values.
///
/// `Nested` is the common shape every [`IntoNested`] container is converted
/// into before flattening. It also allows heterogeneous nesting depths, which
/// plain `Vec`s cannot express; see the [`nested!`](crate::nested) macro.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::flatten::Nested;
/// use lambars_idioms::nested;
///
/// let value = nested![1, [2, 3]];
/// assert_eq!(
///     value,
///     Nested::Branch(vec![
///         Nested::Leaf(1),
///         Nested::Branch(vec![Nested::Leaf(2), Nested::Leaf(3)]),
///     ])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A value that is not expanded further.
    Leaf(T),
    /// A container whose elements are expanded in order.
    Branch(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this is a [`Nested::Leaf`].
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the maximum nesting depth. A leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Self>) -> Self {
        Self::Branch(children)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Self>>(iterable: I) -> Self {
        Self::Branch(iterable.into_iter().collect())
    }
}

/// The capability of being flattened.
///
/// Containers convert into a [`Nested::Branch`] of their converted elements;
/// scalars convert into a [`Nested::Leaf`]. Mappings contribute their keys
/// only. Strings are scalars: they are never expanded into characters when
/// they appear inside a container (use [`flatten_text`] for a top-level
/// string).
///
/// Implement this trait for your own scalar types to make them flattenable:
///
/// ```rust
/// use lambars_idioms::flatten::{IntoNested, Nested, flatten};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// impl IntoNested for Point {
///     type Leaf = Self;
///
///     fn into_nested(self) -> Nested<Self> {
///         Nested::Leaf(self)
///     }
/// }
///
/// let points: Vec<_> = flatten(vec![vec![Point(0, 0)], vec![Point(1, 2)]]).collect();
/// assert_eq!(points, [Point(0, 0), Point(1, 2)]);
/// ```
pub trait IntoNested {
    /// The type of the values produced by flattening.
    type Leaf;

    /// Converts `self` into a [`Nested`] tree.
    fn into_nested(self) -> Nested<Self::Leaf>;
}

impl<T> IntoNested for Nested<T> {
    type Leaf = T;

    #[inline]
    fn into_nested(self) -> Self {
        self
    }
}

macro_rules! impl_scalar_into_nested {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl IntoNested for $scalar {
                type Leaf = Self;

                #[inline]
                fn into_nested(self) -> Nested<Self> {
                    Nested::Leaf(self)
                }
            }
        )*
    };
}

impl_scalar_into_nested!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl IntoNested for &str {
    type Leaf = Self;

    #[inline]
    fn into_nested(self) -> Nested<Self> {
        Nested::Leaf(self)
    }
}

fn branch<I>(elements: I) -> Nested<<I::Item as IntoNested>::Leaf>
where
    I: IntoIterator,
    I::Item: IntoNested,
{
    Nested::Branch(elements.into_iter().map(IntoNested::into_nested).collect())
}

impl<N: IntoNested> IntoNested for Vec<N> {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self)
    }
}

impl<N: IntoNested, const LENGTH: usize> IntoNested for [N; LENGTH] {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self)
    }
}

impl<N: IntoNested> IntoNested for VecDeque<N> {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self)
    }
}

impl<N: IntoNested> IntoNested for BTreeSet<N> {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self)
    }
}

impl<N: IntoNested, S> IntoNested for HashSet<N, S> {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self)
    }
}

impl<K: IntoNested, V> IntoNested for BTreeMap<K, V> {
    type Leaf = K::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self.into_keys())
    }
}

impl<K: IntoNested, V, S> IntoNested for HashMap<K, V, S> {
    type Leaf = K::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self.into_keys())
    }
}

/// `None` is an empty container, `Some(value)` a container of one.
impl<N: IntoNested> IntoNested for Option<N> {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        branch(self)
    }
}

impl<N: IntoNested> IntoNested for Box<N> {
    type Leaf = N::Leaf;

    fn into_nested(self) -> Nested<Self::Leaf> {
        (*self).into_nested()
    }
}

/// Flattens `value` into a lazy, depth-first, pre-order sequence of leaves.
///
/// A scalar given directly yields itself. Mappings yield their keys.
///
/// Strings are scalars here too, even at the top level: `flatten("ferris")`
/// yields `"ferris"` once. Use [`flatten_text`] to iterate over the
/// characters of a string instead.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lambars_idioms::flatten::flatten;
/// use lambars_idioms::nested;
///
/// let numbers: Vec<_> = flatten(nested![1, [2, [3, [4, [5]]]]]).collect();
/// assert_eq!(numbers, [1, 2, 3, 4, 5]);
///
/// let words: Vec<_> = flatten(vec![vec!["lazy", "idioms"], vec!["rust"]]).collect();
/// assert_eq!(words, ["lazy", "idioms", "rust"]);
///
/// let keys: Vec<_> = flatten(BTreeMap::from([('a', 1), ('b', 2)])).collect();
/// assert_eq!(keys, ['a', 'b']);
/// ```
pub fn flatten<N: IntoNested>(value: N) -> Flatten<N::Leaf> {
    Flatten::new(value.into_nested())
}

/// Flattens a top-level string into its characters.
///
/// ```rust
/// use lambars_idioms::flatten::flatten_text;
///
/// assert_eq!(flatten_text("ferris").collect::<String>(), "ferris");
/// assert_eq!(flatten_text("ferris").count(), 6);
/// ```
pub fn flatten_text(text: &str) -> std::str::Chars<'_> {
    text.chars()
}

/// A lazy, single-pass iterator over the leaves of a [`Nested`] tree.
///
/// Created by [`flatten`]. Leaves are yielded depth-first, in pre-order.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<T> {
    stack: Vec<std::vec::IntoIter<Nested<T>>>,
}

impl<T> Flatten<T> {
    fn new(root: Nested<T>) -> Self {
        Self {
            stack: vec![vec![root].into_iter()],
        }
    }
}

impl<T> Iterator for Flatten<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cursor = self.stack.last_mut()?;
            match cursor.next() {
                Some(Nested::Leaf(value)) => return Some(value),
                Some(Nested::Branch(children)) => self.stack.push(children.into_iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T> FusedIterator for Flatten<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;
    use rstest::rstest;

    #[rstest]
    fn test_flatten_deeply_nested() {
        let value = nested![1, [2, [3, [4, [5]]]]];
        assert_eq!(value.depth(), 5);
        assert_eq!(flatten(value).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn test_flatten_is_pre_order() {
        let value = nested![[1, [2, 3]], 4, [[5], 6]];
        assert_eq!(flatten(value).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_flatten_skips_empty_branches() {
        let value: Nested<i32> = nested![[], [[]], 7, []];
        assert_eq!(flatten(value).collect::<Vec<_>>(), [7]);
    }

    #[rstest]
    fn test_flatten_scalar_yields_itself() {
        assert_eq!(flatten(42).collect::<Vec<_>>(), [42]);
    }

    #[rstest]
    fn test_nested_strings_are_not_expanded() {
        let value = vec![vec!["ferris".to_string()], vec!["rust".to_string()]];
        assert_eq!(flatten(value).collect::<Vec<_>>(), ["ferris", "rust"]);
    }

    #[rstest]
    fn test_flatten_top_level_string_yields_itself() {
        assert_eq!(flatten("ferris").collect::<Vec<_>>(), ["ferris"]);
        assert_eq!(flatten("ferris".to_string()).count(), 1);
        assert_eq!(flatten_text("ferris").count(), 6);
    }

    #[rstest]
    fn test_flatten_text_yields_characters() {
        assert_eq!(
            flatten_text("ferris").collect::<Vec<_>>(),
            ['f', 'e', 'r', 'r', 'i', 's']
        );
    }

    #[rstest]
    fn test_flatten_map_yields_keys_only() {
        let map = BTreeMap::from([(3, "three"), (1, "one"), (2, "two")]);
        assert_eq!(flatten(map).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[rstest]
    fn test_flatten_mixed_standard_containers() {
        let value = vec![
            VecDeque::from([Some(1), None]),
            VecDeque::from([Some(2)]),
        ];
        assert_eq!(flatten(value).collect::<Vec<_>>(), [1, 2]);
    }

    #[rstest]
    fn test_flatten_arrays_and_boxes() {
        let value = [Box::new([1, 2]), Box::new([3, 4])];
        assert_eq!(flatten(value).collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[rstest]
    fn test_flatten_is_lazy_and_resumable() {
        let mut leaves = flatten(nested![1, [2, [3]]]);
        assert_eq!(leaves.next(), Some(1));
        let rest: Vec<_> = leaves.by_ref().collect();
        assert_eq!(rest, [2, 3]);
        assert_eq!(leaves.next(), None);
    }

    #[rstest]
    fn test_nested_from_iterator_builds_branch() {
        let value: Nested<u8> = (1..=3).map(Nested::Leaf).collect();
        assert_eq!(value, nested![1, 2, 3]);
        assert!(!value.is_leaf());
        assert_eq!(value.depth(), 1);
    }
}
