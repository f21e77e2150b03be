//! Key-to-elements lookups and groupings.
//!
//! A [`Lookup`] maps each distinct key to the elements that produced it.
//! Keys keep the order in which they were first seen and each key's
//! elements keep their source order. Group-by and both join operators are
//! built on it.

use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;

/// A key together with every source element that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn new(key: K, elements: Vec<T>) -> Self {
        Self { key, elements }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Elements in their original relative order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Ordered multi-map from key to elements.
#[derive(Debug, Clone)]
pub struct Lookup<K, V> {
    groups: IndexMap<K, Vec<V>, RandomState>,
}

impl<K, V> Default for Lookup<K, V> {
    fn default() -> Self {
        Self {
            groups: IndexMap::default(),
        }
    }
}

impl<K: Eq + Hash, V> Lookup<K, V> {
    /// Build a lookup in a single pass over `source`.
    ///
    /// The key selector is invoked exactly once per element.
    pub fn build<I, F>(source: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> K,
    {
        let mut groups: IndexMap<K, Vec<V>, RandomState> = IndexMap::default();
        let mut rows = 0usize;
        for element in source {
            rows += 1;
            groups.entry(key(&element)).or_default().push(element);
        }
        tracing::trace!(rows, keys = groups.len(), "built lookup");
        Self { groups }
    }

    /// Elements stored under `key`, empty if the key was never seen.
    pub fn get(&self, key: &K) -> &[V] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }
}

impl<K, V> Lookup<K, V> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K, V> IntoIterator for Lookup<K, V> {
    type Item = Grouping<K, V>;
    type IntoIter = Groupings<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Groupings {
            inner: self.groups.into_iter(),
        }
    }
}

/// Owning iterator over the groupings of a [`Lookup`].
pub struct Groupings<K, V> {
    inner: indexmap::map::IntoIter<K, Vec<V>>,
}

impl<K, V> Iterator for Groupings<K, V> {
    type Item = Grouping<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, elements)| Grouping::new(key, elements))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Lazy group-by. The whole source is buffered on the first pull.
pub struct GroupBy<I: Iterator, F, K> {
    source: Option<(I, F)>,
    groups: Groupings<K, I::Item>,
}

impl<I, F, K> GroupBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
{
    pub(crate) fn new(source: I, key: F) -> Self {
        Self {
            source: Some((source, key)),
            groups: Lookup::default().into_iter(),
        }
    }
}

impl<I, F, K> Iterator for GroupBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = Grouping<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((source, key)) = self.source.take() {
            self.groups = Lookup::build(source, key).into_iter();
        }
        self.groups.next()
    }
}
