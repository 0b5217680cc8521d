//! Auxiliary predicate tables.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{Comparator, Operator};

/// A name-to-comparator map consulted by [`Resolver::Table`](super::Resolver::Table).
///
/// Useful when constraints are written down as names rather than functions,
/// for example when they come from configuration.
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::predicate::PredicateTable;
///
/// let table = PredicateTable::new()
///     .with("divides", |subject: &i32, reference: &i32| subject % reference == 0)
///     .with("differs", |subject: &i32, reference: &i32| subject != reference);
///
/// assert_eq!(table.len(), 2);
/// let divides = table.get("divides").unwrap();
/// assert!(divides(&12, &4));
/// assert!(table.get("multiplies").is_none());
/// ```
pub struct PredicateTable<V> {
    entries: BTreeMap<String, Comparator<V>>,
}

impl<V> PredicateTable<V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers `comparator` under `name`, returning the entry it replaced.
    pub fn insert<F>(&mut self, name: impl Into<String>, comparator: F) -> Option<Comparator<V>>
    where
        F: Fn(&V, &V) -> bool + 'static,
    {
        self.entries.insert(name.into(), Rc::new(comparator))
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, comparator: F) -> Self
    where
        F: Fn(&V, &V) -> bool + 'static,
    {
        self.insert(name, comparator);
        self
    }

    /// Looks up the comparator registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Comparator<V>> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of registered comparators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no comparator is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<V: PartialOrd + 'static> PredicateTable<V> {
    /// Creates a table holding the five built-in operators, keyed by token.
    ///
    /// ```rust
    /// use lambars_idioms::predicate::PredicateTable;
    ///
    /// let table = PredicateTable::<u32>::operators();
    /// assert!(table.get(">=").unwrap()(&3, &3));
    /// assert_eq!(table.names().collect::<Vec<_>>(), ["<", "<=", "==", ">", ">="]);
    /// ```
    #[must_use]
    pub fn operators() -> Self {
        Operator::ALL
            .into_iter()
            .fold(Self::new(), |table, operator| {
                table.with(operator.symbol(), move |subject: &V, reference: &V| {
                    operator.apply(subject, reference)
                })
            })
    }
}

impl<V> Default for PredicateTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for PredicateTable<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V> fmt::Debug for PredicateTable<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut table = PredicateTable::new();
        assert!(table.insert("same", |left: &i32, right: &i32| left == right).is_none());
        assert!(table.insert("same", |_: &i32, _: &i32| false).is_some());

        assert_eq!(table.len(), 1);
        assert!(!table.get("same").unwrap()(&1, &1));
    }

    #[test]
    fn test_default_is_empty() {
        let table: PredicateTable<String> = PredicateTable::default();
        assert!(table.is_empty());
        assert!(!table.contains("anything"));
    }

    #[test]
    fn test_operators_table_covers_every_token() {
        let table = PredicateTable::<i64>::operators();
        for operator in Operator::ALL {
            assert!(table.contains(operator.symbol()));
        }
        assert!(table.get("<").unwrap()(&50, &60));
        assert!(!table.get("<").unwrap()(&100, &80));
    }

    #[test]
    fn test_debug_lists_names() {
        let table = PredicateTable::new().with("odd", |subject: &i32, _: &i32| subject % 2 == 1);
        assert_eq!(format!("{table:?}"), "{\"odd\"}");
    }
}
