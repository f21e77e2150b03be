//! Distinct and set operators.
//!
//! All of them keep first-occurrence order of the left sequence. The right
//! sequence of `intersect`/`except` is hashed into a set on the first pull.

use std::hash::Hash;

use ahash::AHashSet;

/// Elements of `I` with repeats removed.
pub struct Distinct<I: Iterator> {
    source: I,
    seen: AHashSet<I::Item>,
}

impl<I: Iterator> Distinct<I> {
    pub(crate) fn new(source: I) -> Self {
        Self {
            source,
            seen: AHashSet::new(),
        }
    }
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.source.find(|element| seen.insert(element.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Elements of `I` whose key has not been seen before.
pub struct DistinctBy<I, F, K> {
    source: I,
    key: F,
    seen: AHashSet<K>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(crate) fn new(source: I, key: F) -> Self {
        Self {
            source,
            key,
            seen: AHashSet::new(),
        }
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { source, key, seen } = self;
        source.find(|element| seen.insert(key(element)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Distinct elements of `I` that also occur in `J`.
pub struct Intersect<I: Iterator, J> {
    source: I,
    pending: Option<J>,
    remaining: AHashSet<I::Item>,
}

impl<I: Iterator, J> Intersect<I, J> {
    pub(crate) fn new(source: I, other: J) -> Self {
        Self {
            source,
            pending: Some(other),
            remaining: AHashSet::new(),
        }
    }
}

impl<I, J> Iterator for Intersect<I, J>
where
    I: Iterator,
    I::Item: Eq + Hash,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(other) = self.pending.take() {
            self.remaining = other.collect();
            tracing::trace!(rows = self.remaining.len(), operator = "intersect", "hashed right side");
        }
        // Removing on emit suppresses later duplicates from the left side.
        let remaining = &mut self.remaining;
        self.source.find(|element| remaining.remove(element))
    }
}

/// Distinct elements of `I` that do not occur in `J`.
pub struct Except<I: Iterator, J> {
    source: I,
    pending: Option<J>,
    excluded: AHashSet<I::Item>,
}

impl<I: Iterator, J> Except<I, J> {
    pub(crate) fn new(source: I, other: J) -> Self {
        Self {
            source,
            pending: Some(other),
            excluded: AHashSet::new(),
        }
    }
}

impl<I, J> Iterator for Except<I, J>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(other) = self.pending.take() {
            self.excluded = other.collect();
            tracing::trace!(rows = self.excluded.len(), operator = "except", "hashed right side");
        }
        let excluded = &mut self.excluded;
        self.source.find(|element| excluded.insert(element.clone()))
    }
}
