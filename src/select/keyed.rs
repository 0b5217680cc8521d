//! The keyed-table capability shared by subject and constraint sets.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A finite mapping from keys to values that can be iterated and queried.
///
/// Iteration order is the table's natural order: sorted for [`BTreeMap`],
/// unspecified for [`HashMap`], insertion order for an association list
/// (`Vec<(K, V)>`).
///
/// # Examples
///
/// ```rust
/// use lambars_idioms::select::KeyedTable;
///
/// let prices = vec![("pie", 100), ("cake", 50)];
/// assert_eq!(prices.lookup(&"cake"), Some(&50));
/// assert_eq!(
///     prices.entries().map(|(key, _)| *key).collect::<Vec<_>>(),
///     ["pie", "cake"]
/// );
/// ```
pub trait KeyedTable<K, V> {
    /// Returns the value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Iterates over every entry in the table's natural order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Returns the number of entries.
    fn size(&self) -> usize {
        self.entries().count()
    }
}

impl<K: Ord, V> KeyedTable<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> KeyedTable<K, V> for HashMap<K, V, S> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// An association list; the first entry for a key wins.
impl<K: PartialEq, V> KeyedTable<K, V> for Vec<(K, V)> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter().map(|(key, value)| (key, value))
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btreemap_entries_are_sorted() {
        let table: BTreeMap<&str, i32> = [("pie", 100), ("bread", 20), ("cake", 50)]
            .into_iter()
            .collect();
        let keys: Vec<_> = table.entries().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["bread", "cake", "pie"]);
        assert_eq!(KeyedTable::size(&table), 3);
    }

    #[test]
    fn test_hashmap_lookup() {
        let table: HashMap<u8, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(table.lookup(&2), Some(&'b'));
        assert_eq!(table.lookup(&3), None);
    }

    fn largest_entry<'a, K, V: Ord, T: KeyedTable<K, V>>(table: &'a T) -> Option<(&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        table.entries().max_by_key(|(_, value)| *value)
    }

    #[test]
    fn test_entries_borrow_for_the_table_lifetime() {
        let btree = BTreeMap::from([("bread", 20), ("pie", 100)]);
        let hash = HashMap::from([("bread", 20), ("pie", 100)]);
        let list = vec![("bread", 20), ("pie", 100)];

        let found = [largest_entry(&btree), largest_entry(&hash), largest_entry(&list)];

        assert!(found.iter().all(|entry| *entry == Some((&"pie", &100))));
    }

    #[test]
    fn test_association_list_first_entry_wins() {
        let table = vec![("a", 1), ("b", 2), ("a", 3)];
        assert_eq!(table.lookup(&"a"), Some(&1));
        assert_eq!(KeyedTable::size(&table), 3);
    }
}
