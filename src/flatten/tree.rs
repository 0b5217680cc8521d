//! Post-order flattening of nested mappings.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::iter::FusedIterator;

/// A node of a mapping tree: either a plain value or a nested mapping.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::flatten::DictNode;
///
/// let tree: DictNode<&str, i32> = DictNode::branch([
///     ("width", DictNode::Value(3)),
///     ("inner", DictNode::branch([("depth", DictNode::Value(4))])),
/// ]);
/// assert!(tree.is_branch());
/// assert_eq!(tree.as_branch().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictNode<K, V> {
    /// A leaf value.
    Value(V),
    /// A nested mapping.
    Branch(BTreeMap<K, DictNode<K, V>>),
}

impl<K: Ord, V> DictNode<K, V> {
    /// Creates a branch node from `(key, node)` entries.
    #[must_use]
    pub fn branch<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Branch(entries.into_iter().collect())
    }
}

impl<K, V> DictNode<K, V> {
    /// Returns `true` if this node is a nested mapping.
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Returns the leaf value, if any.
    #[must_use]
    pub const fn as_value(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    /// Returns the nested mapping, if any.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&BTreeMap<K, Self>> {
        match self {
            Self::Value(_) => None,
            Self::Branch(children) => Some(children),
        }
    }

    /// Flattens the mapping held by this node; a value node yields nothing.
    pub fn flatten(&self) -> FlattenDict<'_, K, V> {
        match self {
            Self::Value(_) => FlattenDict { stack: Vec::new() },
            Self::Branch(children) => flatten_dict(children),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, DictNode<K, V>)> for DictNode<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, Self)>>(iterable: I) -> Self {
        Self::branch(iterable)
    }
}

/// Flattens a nested mapping into `(key, node)` pairs, in post-order.
///
/// Leaf pairs are yielded as soon as they are reached. The pair of a nested
/// mapping is yielded only after every pair below it. Siblings follow the
/// mapping's key order.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::flatten::{DictNode, flatten_dict};
///
/// let tree = DictNode::branch([
///     (1, DictNode::branch([
///         (5, DictNode::branch([(9, DictNode::Value("nine"))])),
///         (10, DictNode::Value("ten")),
///     ])),
///     (8, DictNode::branch([(2, DictNode::Value("two"))])),
/// ]);
///
/// let keys: Vec<_> = tree.flatten().map(|(key, _)| *key).collect();
/// assert_eq!(keys, [9, 5, 10, 1, 2, 8]);
///
/// let root = tree.as_branch().unwrap();
/// let (last_key, last_node) = flatten_dict(root).last().unwrap();
/// assert_eq!(*last_key, 8);
/// assert_eq!(last_node, &root[&8]);
/// ```
pub fn flatten_dict<K, V>(mapping: &BTreeMap<K, DictNode<K, V>>) -> FlattenDict<'_, K, V> {
    FlattenDict {
        stack: vec![Frame {
            owner: None,
            entries: mapping.iter(),
        }],
    }
}

#[derive(Debug)]
struct Frame<'a, K, V> {
    owner: Option<(&'a K, &'a DictNode<K, V>)>,
    entries: btree_map::Iter<'a, K, DictNode<K, V>>,
}

impl<K, V> Clone for Frame<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner,
            entries: self.entries.clone(),
        }
    }
}

/// A lazy post-order iterator over the pairs of a nested mapping.
///
/// Created by [`flatten_dict`] and [`DictNode::flatten`].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FlattenDict<'a, K, V> {
    stack: Vec<Frame<'a, K, V>>,
}

impl<K, V> Clone for FlattenDict<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V> Iterator for FlattenDict<'a, K, V> {
    type Item = (&'a K, &'a DictNode<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.entries.next() {
                Some((key, node @ DictNode::Branch(children))) => {
                    self.stack.push(Frame {
                        owner: Some((key, node)),
                        entries: children.iter(),
                    });
                }
                Some(pair) => return Some(pair),
                None => {
                    if let Some(owner) = self.stack.pop().and_then(|frame| frame.owner) {
                        return Some(owner);
                    }
                }
            }
        }
    }
}

impl<K, V> FusedIterator for FlattenDict<'_, K, V> {}
