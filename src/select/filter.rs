//! Constraint-based key selection.

use std::fmt::Debug;
use std::iter::FusedIterator;

use super::KeyedTable;
use crate::error::LookupError;
use crate::predicate::{Constraint, PredicateTable, Resolver};

/// Selects the keys of `subjects` whose values satisfy their constraint.
///
/// For every subject key `k`, the constraint `constraints[k]` is resolved
/// through `resolver` and evaluated as
/// `predicate(subjects[k], constraints[k].reference)`. All predicates are
/// evaluated before this function returns; the returned [`Select`] then
/// yields the passing keys lazily, in the subject table's iteration order.
///
/// # Errors
///
/// - [`LookupError::MissingConstraint`] if a subject key has no constraint
/// - any error of [`Resolver::resolve`] for a constraint's descriptor
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lambars_idioms::predicate::{Constraint, Operator, Resolver};
/// use lambars_idioms::select::select;
///
/// let subjects = BTreeMap::from([("cake", 50), ("bread", 20), ("pie", 100)]);
/// let constraints: BTreeMap<_, Constraint<i32>> = BTreeMap::from([
///     ("cake", (Operator::Less, 60).into()),
///     ("bread", (Operator::LessOrEqual, 20).into()),
///     ("pie", (Operator::Less, 80).into()),
/// ]);
///
/// let selected: Vec<_> = select(&subjects, &constraints, Resolver::Direct)
///     .unwrap()
///     .collect();
/// assert_eq!(selected, [&"bread", &"cake"]);
/// ```
pub fn select<'s, K, V, S, C>(
    subjects: &'s S,
    constraints: &C,
    resolver: Resolver<'_, V>,
) -> Result<Select<'s, K>, LookupError>
where
    K: Debug + 's,
    V: PartialOrd + 's,
    S: KeyedTable<K, V>,
    C: KeyedTable<K, Constraint<V>>,
{
    let selectors = subjects
        .entries()
        .map(|(key, subject)| -> Result<_, LookupError> {
            let constraint = constraints.lookup(key).ok_or_else(|| missing_constraint(key))?;
            let predicate = resolver.resolve(&constraint.descriptor)?;
            Ok((key, predicate.test(subject, &constraint.reference)))
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|error| tracing::debug!(%error, ?resolver, "selection failed"))?;

    Ok(Select::from_selectors(selectors))
}

/// [`select`] with the built-in operators: every descriptor must be an
/// [`Operator`](crate::predicate::Operator) or one of its tokens.
///
/// # Errors
///
/// See [`select`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lambars_idioms::predicate::Constraint;
/// use lambars_idioms::select::select_with_operators;
///
/// let subjects = BTreeMap::from([("cake", 50), ("pie", 100)]);
/// let constraints: BTreeMap<_, Constraint<i32>> =
///     BTreeMap::from([("cake", ("<", 60).into()), ("pie", ("<", 80).into())]);
///
/// let selected: Vec<_> = select_with_operators(&subjects, &constraints)
///     .unwrap()
///     .collect();
/// assert_eq!(selected, [&"cake"]);
/// ```
pub fn select_with_operators<'s, K, V, S, C>(
    subjects: &'s S,
    constraints: &C,
) -> Result<Select<'s, K>, LookupError>
where
    K: Debug + 's,
    V: PartialOrd + 's,
    S: KeyedTable<K, V>,
    C: KeyedTable<K, Constraint<V>>,
{
    select(subjects, constraints, Resolver::Operators)
}

/// [`select`] with descriptors looked up in `table`.
///
/// # Errors
///
/// See [`select`].
pub fn select_with_table<'s, K, V, S, C>(
    subjects: &'s S,
    constraints: &C,
    table: &PredicateTable<V>,
) -> Result<Select<'s, K>, LookupError>
where
    K: Debug + 's,
    V: PartialOrd + 's,
    S: KeyedTable<K, V>,
    C: KeyedTable<K, Constraint<V>>,
{
    select(subjects, constraints, Resolver::Table(table))
}

/// Selects the keys of `subjects` whose values satisfy a unary predicate.
///
/// The simplified form of [`select`]: each constraint is a predicate over
/// the subject value alone, with no reference value and no resolver.
///
/// # Errors
///
/// [`LookupError::MissingConstraint`] if a subject key has no predicate.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lambars_idioms::select::select_by;
///
/// let ages = BTreeMap::from([("ada", 36), ("alan", 41), ("grace", 85)]);
/// let mut predicates: BTreeMap<&str, Box<dyn Fn(&i32) -> bool>> = BTreeMap::new();
/// predicates.insert("ada", Box::new(|age: &i32| *age > 40));
/// predicates.insert("alan", Box::new(|age: &i32| *age > 40));
/// predicates.insert("grace", Box::new(|age: &i32| *age % 5 == 0));
///
/// let selected: Vec<_> = select_by(&ages, &predicates).unwrap().collect();
/// assert_eq!(selected, [&"alan", &"grace"]);
/// ```
pub fn select_by<'s, K, V, S, P, F>(
    subjects: &'s S,
    predicates: &P,
) -> Result<Select<'s, K>, LookupError>
where
    K: Debug + 's,
    V: 's,
    S: KeyedTable<K, V>,
    P: KeyedTable<K, F>,
    F: Fn(&V) -> bool,
{
    let selectors = subjects
        .entries()
        .map(|(key, subject)| -> Result<_, LookupError> {
            let predicate = predicates.lookup(key).ok_or_else(|| missing_constraint(key))?;
            Ok((key, predicate(subject)))
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|error| tracing::debug!(%error, "selection failed"))?;

    Ok(Select::from_selectors(selectors))
}

fn missing_constraint<K: Debug>(key: &K) -> LookupError {
    LookupError::MissingConstraint {
        key: format!("{key:?}"),
    }
}

/// A lazy sequence of selected keys.
///
/// Created by [`select`] and [`select_by`]. The keys are borrowed from the
/// subject table and yielded in its iteration order.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Select<'s, K> {
    selectors: std::vec::IntoIter<(&'s K, bool)>,
}

impl<'s, K> Select<'s, K> {
    fn from_selectors(selectors: Vec<(&'s K, bool)>) -> Self {
        tracing::debug!(
            subjects = selectors.len(),
            selected = selectors.iter().filter(|(_, passed)| *passed).count(),
            "evaluated selection"
        );
        Self {
            selectors: selectors.into_iter(),
        }
    }
}

impl<'s, K> Iterator for Select<'s, K> {
    type Item = &'s K;

    fn next(&mut self) -> Option<Self::Item> {
        self.selectors.find_map(|(key, passed)| passed.then_some(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.selectors.len()))
    }
}

impl<K> DoubleEndedIterator for Select<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.selectors
            .rfind(|(_, passed)| *passed)
            .map(|(key, _)| key)
    }
}

impl<K> FusedIterator for Select<'_, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Operator;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn bakery() -> BTreeMap<&'static str, i32> {
        BTreeMap::from([("cake", 50), ("bread", 20), ("pie", 100)])
    }

    fn bakery_constraints() -> BTreeMap<&'static str, Constraint<i32>> {
        BTreeMap::from([
            ("cake", (Operator::Less, 60).into()),
            ("bread", (Operator::LessOrEqual, 20).into()),
            ("pie", (Operator::Less, 80).into()),
        ])
    }

    #[rstest]
    fn test_select_bakery_example() {
        let subjects = bakery();
        let selected: Vec<_> = select(&subjects, &bakery_constraints(), Resolver::Direct)
            .unwrap()
            .copied()
            .collect();
        assert_eq!(selected, ["bread", "cake"]);
    }

    #[rstest]
    fn test_select_empty_subjects_is_empty() {
        let subjects: BTreeMap<&str, i32> = BTreeMap::new();
        let mut selected = select(&subjects, &bakery_constraints(), Resolver::Direct).unwrap();
        assert_eq!(selected.next(), None);
    }

    #[rstest]
    fn test_select_reports_missing_constraint_eagerly() {
        let mut subjects = bakery();
        subjects.insert("scone", 10);
        let error = select(&subjects, &bakery_constraints(), Resolver::Direct).unwrap_err();
        assert_eq!(
            error,
            LookupError::MissingConstraint {
                key: "\"scone\"".to_string()
            }
        );
    }

    #[rstest]
    fn test_select_ignores_constraints_without_subjects() {
        let subjects = BTreeMap::from([("cake", 50)]);
        let selected: Vec<_> = select(&subjects, &bakery_constraints(), Resolver::Direct)
            .unwrap()
            .collect();
        assert_eq!(selected, [&"cake"]);
    }

    #[rstest]
    fn test_select_with_table_uses_custom_predicates() {
        let subjects = BTreeMap::from([(1, 12), (2, 13), (3, 15)]);
        let constraints: BTreeMap<_, Constraint<i32>> = BTreeMap::from([
            (1, ("divides", 4).into()),
            (2, ("divides", 4).into()),
            (3, ("divides", 5).into()),
        ]);
        let table = PredicateTable::new()
            .with("divides", |subject: &i32, reference: &i32| subject % reference == 0);

        let selected: Vec<_> = select_with_table(&subjects, &constraints, &table)
            .unwrap()
            .copied()
            .collect();
        assert_eq!(selected, [1, 3]);
    }

    #[rstest]
    fn test_select_with_operators_rejects_unknown_token() {
        let subjects = BTreeMap::from([("cake", 50)]);
        let constraints: BTreeMap<_, Constraint<i32>> =
            BTreeMap::from([("cake", ("=<", 60).into())]);
        assert_eq!(
            select_with_operators(&subjects, &constraints).unwrap_err(),
            LookupError::UnknownOperator {
                token: "=<".to_string()
            }
        );
    }

    #[rstest]
    fn test_select_preserves_association_list_order() {
        let subjects = vec![("pie", 100), ("cake", 50), ("bread", 20)];
        let constraints = vec![
            ("bread", Constraint::new(Operator::Greater, 0)),
            ("cake", Constraint::new(Operator::Greater, 0)),
            ("pie", Constraint::new(Operator::Greater, 0)),
        ];
        let selected: Vec<_> = select(&subjects, &constraints, Resolver::Direct)
            .unwrap()
            .copied()
            .collect();
        assert_eq!(selected, ["pie", "cake", "bread"]);
    }

    #[rstest]
    fn test_select_is_double_ended() {
        let subjects = bakery();
        let mut selected = select(&subjects, &bakery_constraints(), Resolver::Direct).unwrap();
        assert_eq!(selected.next_back(), Some(&"cake"));
        assert_eq!(selected.next(), Some(&"bread"));
        assert_eq!(selected.next(), None);
    }

    #[rstest]
    fn test_select_by_missing_predicate() {
        let subjects = BTreeMap::from([("a", 1), ("b", 2)]);
        let mut predicates: BTreeMap<&str, fn(&i32) -> bool> = BTreeMap::new();
        predicates.insert("a", |value: &i32| *value > 0);
        assert_eq!(
            select_by(&subjects, &predicates).unwrap_err(),
            LookupError::MissingConstraint {
                key: "\"b\"".to_string()
            }
        );
    }

    #[rstest]
    fn test_select_by_with_boxed_closures() {
        let threshold = 10;
        let subjects = BTreeMap::from([("x", 5), ("y", 15)]);
        let mut predicates: BTreeMap<&str, Box<dyn Fn(&i32) -> bool>> = BTreeMap::new();
        predicates.insert("x", Box::new(move |value: &i32| *value < threshold));
        predicates.insert("y", Box::new(move |value: &i32| *value < threshold));
        let selected: Vec<_> = select_by(&subjects, &predicates).unwrap().collect();
        assert_eq!(selected, [&"x"]);
    }
}
