//! Chainable query wrapper.
//!
//! [`Query`] wraps any iterator and exposes the query operators as methods.
//! Every chainable operator returns another `Query` (or an
//! [`OrderedQuery`] for sorts), and `Query` is itself an [`Iterator`], so
//! results can be consumed with `for`, `collect`, `count` and friends.

use std::hash::Hash;
use std::iter::{Chain, Enumerate, Filter, Map, Skip, Take, Zip};

use crate::error::{QueryError, Result};
use crate::join::{GroupJoin, Join};
use crate::lookup::{GroupBy, Lookup};
use crate::order::{Directed, OrderedQuery, SortOrder, try_sort_by_key};
use crate::set::{Distinct, DistinctBy, Except, Intersect};

/// A lazily evaluated query over an iterator.
#[derive(Debug, Clone)]
pub struct Query<I> {
    iter: I,
}

/// Lift any iterable into a [`Query`].
pub trait IntoQuery: IntoIterator + Sized {
    fn query(self) -> Query<Self::IntoIter> {
        Query::new(self.into_iter())
    }
}

impl<T: IntoIterator> IntoQuery for T {}

impl<I: Iterator> Query<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    pub fn into_inner(self) -> I {
        self.iter
    }

    // --- Streaming operators ---

    /// Keep elements for which `predicate` returns true.
    pub fn filter<P>(self, predicate: P) -> Query<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Query::new(self.iter.filter(predicate))
    }

    /// Project each element.
    pub fn select<U, F>(self, f: F) -> Query<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Query::new(self.iter.map(f))
    }

    /// Project each element together with its zero-based index.
    pub fn select_indexed<U, F>(
        self,
        mut f: F,
    ) -> Query<Map<Enumerate<I>, impl FnMut((usize, I::Item)) -> U>>
    where
        F: FnMut(usize, I::Item) -> U,
    {
        Query::new(
            self.iter
                .enumerate()
                .map(move |(index, element)| f(index, element)),
        )
    }

    pub fn take(self, n: usize) -> Query<Take<I>> {
        Query::new(self.iter.take(n))
    }

    pub fn skip(self, n: usize) -> Query<Skip<I>> {
        Query::new(self.iter.skip(n))
    }

    /// Pair elements positionally, stopping at the shorter side.
    pub fn zip<J: IntoIterator>(self, other: J) -> Query<Zip<I, J::IntoIter>> {
        Query::new(self.iter.zip(other))
    }

    // --- Ordering ---

    /// Stable ascending sort by `key`.
    pub fn order_by<K, F>(
        self,
        key: F,
    ) -> OrderedQuery<I, impl FnMut(&I::Item) -> Directed<K>, Directed<K>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.order_by_with(key, SortOrder::Ascending)
    }

    /// Stable descending sort by `key`.
    pub fn order_by_descending<K, F>(
        self,
        key: F,
    ) -> OrderedQuery<I, impl FnMut(&I::Item) -> Directed<K>, Directed<K>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.order_by_with(key, SortOrder::Descending)
    }

    /// Stable sort by `key` in the given direction.
    pub fn order_by_with<K, F>(
        self,
        mut key: F,
        order: SortOrder,
    ) -> OrderedQuery<I, impl FnMut(&I::Item) -> Directed<K>, Directed<K>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        OrderedQuery::new(self.iter, move |element: &I::Item| {
            Directed::new(key(element), order)
        })
    }

    /// Stable sort by a partially ordered key, sorting immediately.
    ///
    /// Fails with [`QueryError::InvalidComparer`] when keys cannot be
    /// ordered, e.g. a NaN float.
    pub fn try_order_by<K, F>(
        self,
        key: F,
        order: SortOrder,
    ) -> Result<Query<std::vec::IntoIter<I::Item>>>
    where
        K: PartialOrd,
        F: FnMut(&I::Item) -> K,
    {
        let sorted = try_sort_by_key(self.iter, key, order)?;
        Ok(Query::new(sorted.into_iter()))
    }

    // --- Grouping and joins ---

    /// Group elements by key, in order of each key's first occurrence.
    pub fn group_by<K, F>(self, key: F) -> Query<GroupBy<I, F, K>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Query::new(GroupBy::new(self.iter, key))
    }

    /// Inner join with `inner` on equal keys.
    pub fn join<J, K, FO, FI, FR, R>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Query<Join<I, J::IntoIter, K, FO, FI, FR>>
    where
        J: IntoIterator,
        K: Eq + Hash,
        FO: FnMut(&I::Item) -> K,
        FI: FnMut(&J::Item) -> K,
        FR: FnMut(&I::Item, &J::Item) -> R,
    {
        Query::new(Join::new(
            self.iter,
            inner.into_iter(),
            outer_key,
            inner_key,
            result,
        ))
    }

    /// Group join with `inner`: one row per outer element, with its matches.
    pub fn group_join<J, K, FO, FI, FR, R>(
        self,
        inner: J,
        outer_key: FO,
        inner_key: FI,
        result: FR,
    ) -> Query<GroupJoin<I, J::IntoIter, K, FO, FI, FR>>
    where
        J: IntoIterator,
        K: Eq + Hash,
        FO: FnMut(&I::Item) -> K,
        FI: FnMut(&J::Item) -> K,
        FR: FnMut(I::Item, &[J::Item]) -> R,
    {
        Query::new(GroupJoin::new(
            self.iter,
            inner.into_iter(),
            outer_key,
            inner_key,
            result,
        ))
    }

    // --- Set operators ---

    pub fn distinct(self) -> Query<Distinct<I>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Query::new(Distinct::new(self.iter))
    }

    /// Keep the first element for each distinct key.
    pub fn distinct_by<K, F>(self, key: F) -> Query<DistinctBy<I, F, K>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Query::new(DistinctBy::new(self.iter, key))
    }

    pub fn union<J>(self, other: J) -> Query<Distinct<Chain<I, J::IntoIter>>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        Query::new(Distinct::new(self.iter.chain(other)))
    }

    pub fn intersect<J>(self, other: J) -> Query<Intersect<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash,
    {
        Query::new(Intersect::new(self.iter, other.into_iter()))
    }

    pub fn except<J>(self, other: J) -> Query<Except<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Eq + Hash + Clone,
    {
        Query::new(Except::new(self.iter, other.into_iter()))
    }

    // --- Terminal operators ---

    pub fn first(mut self) -> Result<I::Item> {
        self.iter.next().ok_or(QueryError::EmptySequence)
    }

    pub fn first_where<P>(mut self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(predicate).ok_or(QueryError::EmptySequence)
    }

    pub fn first_or_default(mut self) -> I::Item
    where
        I::Item: Default,
    {
        self.iter.next().unwrap_or_default()
    }

    pub fn first_where_or_default<P>(mut self, predicate: P) -> I::Item
    where
        I::Item: Default,
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.find(predicate).unwrap_or_default()
    }

    /// Left fold starting from `seed`. An empty sequence yields `seed`.
    pub fn aggregate<A, F>(self, seed: A, f: F) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        self.iter.fold(seed, f)
    }

    /// Left fold seeded with the first element.
    pub fn reduce<F>(mut self, f: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let seed = self.iter.next().ok_or(QueryError::EmptySequence)?;
        Ok(self.iter.fold(seed, f))
    }

    /// Build a [`Lookup`] of every element by key.
    pub fn to_lookup<K, F>(self, key: F) -> Lookup<K, I::Item>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Lookup::build(self.iter, key)
    }

    pub fn to_vec(self) -> Vec<I::Item> {
        self.iter.collect()
    }
}

impl<I: Iterator> Iterator for Query<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_filter_select_chain() {
        let result = vec![1, 2, 3, 4, 5, 6]
            .query()
            .filter(|n| n % 2 == 0)
            .select(|n| n * 10)
            .to_vec();
        assert_eq!(result, vec![20, 40, 60]);
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let result = vec![1, 3, 5].query().filter(|n| n % 2 == 0).to_vec();
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_short_circuits() {
        let calls = Cell::new(0);
        let first = (1..=100)
            .query()
            .filter(|n| {
                calls.set(calls.get() + 1);
                n % 3 == 0
            })
            .first()
            .unwrap();
        assert_eq!(first, 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_select_indexed() {
        let result = vec![1, 2, 3]
            .query()
            .select_indexed(|i, x| format!("{i} {x}"))
            .to_vec();
        assert_eq!(result, vec!["0 1", "1 2", "2 3"]);
    }

    #[test]
    fn test_zip_truncates_to_shorter() {
        let result = vec![1, 2, 3].query().zip(vec!["a", "b"]).to_vec();
        assert_eq!(result, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_order_by_then_select() {
        let result = vec![("Alice", 30), ("Bob", 25), ("Charlie", 35)]
            .query()
            .order_by(|u| u.1)
            .query()
            .select(|u| u.0)
            .to_vec();
        assert_eq!(result, vec!["Bob", "Alice", "Charlie"]);
    }

    #[test]
    fn test_order_by_descending_then_by() {
        let result = vec![("HR", "Sam"), ("IT", "Sara"), ("HR", "John")]
            .query()
            .order_by_descending(|e| e.0)
            .then_by(|e| e.1)
            .to_vec();
        assert_eq!(result, vec![("IT", "Sara"), ("HR", "John"), ("HR", "Sam")]);
    }

    #[test]
    fn test_try_order_by_invalid_comparer() {
        let result = vec![1.5, f64::NAN].query().try_order_by(|x| *x, SortOrder::Ascending);
        assert!(matches!(
            result,
            Err(QueryError::InvalidComparer { .. })
        ));
    }

    #[test]
    fn test_group_by() {
        let groups = vec![1, 2, 1, 3, 2].query().group_by(|n| *n).to_vec();
        let keys: Vec<_> = groups.iter().map(|g| *g.key()).collect();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(groups[0].elements(), &[1, 1]);
        assert_eq!(groups[1].elements(), &[2, 2]);
        assert_eq!(groups[2].elements(), &[3]);
    }

    #[test]
    fn test_join_and_group_join() {
        let outer = vec![1, 2];
        let inner = vec![1];
        let joined = outer
            .clone()
            .query()
            .join(inner.clone(), |o| *o, |i| *i, |o, i| (*o, *i))
            .to_vec();
        assert_eq!(joined, vec![(1, 1)]);

        let grouped = outer
            .query()
            .group_join(inner, |o| *o, |i| *i, |o, matched| (o, matched.len()))
            .to_vec();
        assert_eq!(grouped, vec![(1, 1), (2, 0)]);
    }

    #[test]
    fn test_set_operations() {
        let a = vec![1, 2, 3];
        let b = vec![3, 4, 5];
        assert_eq!(a.clone().query().union(b.clone()).to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(a.clone().query().intersect(b.clone()).to_vec(), vec![3]);
        assert_eq!(a.query().except(b).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_union_with_duplicates() {
        let result = vec![2, 2, 1].query().union(vec![1, 3, 3]).to_vec();
        assert_eq!(result, vec![2, 1, 3]);
    }

    #[test]
    fn test_first_on_empty() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.query().first(), Err(QueryError::EmptySequence));
    }

    #[test]
    fn test_first_where_never_true() {
        let result = vec![1, 3].query().first_where(|n| *n > 10);
        assert_eq!(result, Err(QueryError::EmptySequence));
    }

    #[test]
    fn test_first_or_default() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.query().first_or_default(), 0);
        assert_eq!(vec![4, 5].query().first_where_or_default(|n| *n > 4), 5);
    }

    #[test]
    fn test_aggregate_empty_returns_seed() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.query().aggregate(0, |acc, n| acc + n), 0);
    }

    #[test]
    fn test_aggregate_is_left_fold() {
        let result = vec!["a", "b", "c"]
            .query()
            .aggregate(String::new(), |mut acc, s| {
                acc.push_str(s);
                acc
            });
        assert_eq!(result, "abc");
    }

    #[test]
    fn test_reduce() {
        assert_eq!(vec![1, 2, 3].query().reduce(|a, b| a * 10 + b), Ok(123));
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.query().reduce(|a, b| a + b), Err(QueryError::EmptySequence));
    }

    #[test]
    fn test_take_skip_keep_query_surface() {
        let result = (1..=10).query().skip(2).take(3).select(|n| n * n).to_vec();
        assert_eq!(result, vec![9, 16, 25]);
    }

    #[test]
    fn test_to_lookup() {
        let lookup = vec!["a", "bb", "cc", "d"].query().to_lookup(|s| s.len());
        assert_eq!(lookup.get(&2), &["bb", "cc"]);
        assert_eq!(lookup.get(&1), &["a", "d"]);
    }

    #[test]
    fn test_query_is_an_iterator() {
        let total: i32 = vec![1, 2, 3].query().filter(|n| *n > 1).sum();
        assert_eq!(total, 5);
        assert_eq!(vec![1, 2, 3].query().count(), 3);
    }
}
