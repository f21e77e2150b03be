//! Stable ordering with secondary keys.
//!
//! Sorting caches each element's key next to the element, so every key
//! selector runs exactly once per element. The `(key, element)` pairs are then
//! stably sorted, which keeps equal keys in source order for both ascending
//! and descending levels. A `then_by` level extends the cached key into a
//! tuple; tuple comparison is lexicographic, so later levels only break ties
//! of earlier ones.

use std::cmp::Ordering;

/// Direction of one sort level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// A sort key that orders itself according to its [`SortOrder`].
#[derive(Debug, Clone, Copy)]
pub struct Directed<K> {
    key: K,
    order: SortOrder,
}

impl<K> Directed<K> {
    pub fn new(key: K, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl<K: Ord> Ord for Directed<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order.apply(self.key.cmp(&other.key))
    }
}

impl<K: Ord> PartialOrd for Directed<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for Directed<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord> Eq for Directed<K> {}

/// A sequence ordered by one or more keys.
///
/// Nothing is sorted until the first element is pulled; at that point the
/// whole source is buffered together with each element's cached key.
pub struct OrderedQuery<I: Iterator, F, K> {
    source: Option<I>,
    key: F,
    sorted: std::vec::IntoIter<(K, I::Item)>,
}

impl<I, F, K> OrderedQuery<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
{
    pub(crate) fn new(source: I, key: F) -> Self {
        Self {
            source: Some(source),
            key,
            sorted: Vec::new().into_iter(),
        }
    }
}

impl<I, F, K> OrderedQuery<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    /// Break ties of the current ordering by `key`, ascending.
    pub fn then_by<K2, G>(
        self,
        key: G,
    ) -> OrderedQuery<I, impl FnMut(&I::Item) -> (K, Directed<K2>), (K, Directed<K2>)>
    where
        K2: Ord,
        G: FnMut(&I::Item) -> K2,
    {
        self.then_by_with(key, SortOrder::Ascending)
    }

    /// Break ties of the current ordering by `key`, descending.
    pub fn then_by_descending<K2, G>(
        self,
        key: G,
    ) -> OrderedQuery<I, impl FnMut(&I::Item) -> (K, Directed<K2>), (K, Directed<K2>)>
    where
        K2: Ord,
        G: FnMut(&I::Item) -> K2,
    {
        self.then_by_with(key, SortOrder::Descending)
    }

    /// Break ties of the current ordering by `key` in the given direction.
    ///
    /// If elements were already pulled, the remaining ones are re-sorted
    /// with the extended key. Their cached keys are reused, so only `key`
    /// runs on them.
    pub fn then_by_with<K2, G>(
        self,
        mut key: G,
        order: SortOrder,
    ) -> OrderedQuery<I, impl FnMut(&I::Item) -> (K, Directed<K2>), (K, Directed<K2>)>
    where
        K2: Ord,
        G: FnMut(&I::Item) -> K2,
    {
        let OrderedQuery {
            source,
            key: mut primary,
            sorted,
        } = self;
        let sorted = if source.is_none() {
            let mut keyed: Vec<((K, Directed<K2>), I::Item)> = sorted
                .map(|(cached, element)| {
                    let secondary = Directed::new(key(&element), order);
                    ((cached, secondary), element)
                })
                .collect();
            sort_keyed(&mut keyed);
            keyed.into_iter()
        } else {
            Vec::new().into_iter()
        };
        OrderedQuery {
            source,
            key: move |item: &I::Item| (primary(item), Directed::new(key(item), order)),
            sorted,
        }
    }

    /// Materialize the ordered sequence.
    pub fn to_vec(self) -> Vec<I::Item> {
        self.collect()
    }

    /// Continue the chain with the full [`Query`](crate::Query) surface.
    pub fn query(self) -> crate::Query<Self> {
        crate::Query::new(self)
    }
}

impl<I, F, K> Iterator for OrderedQuery<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            let key = &mut self.key;
            let mut keyed: Vec<(K, I::Item)> = source
                .map(|element| (key(&element), element))
                .collect();
            sort_keyed(&mut keyed);
            self.sorted = keyed.into_iter();
        }
        self.sorted.next().map(|(_, element)| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.sorted.size_hint(),
        }
    }
}

fn sort_keyed<K: Ord, T>(keyed: &mut [(K, T)]) {
    // `sort_by` is stable; equal keys keep their source order.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::trace!(rows = keyed.len(), "sorted sequence");
}

/// Stably sort by a partially ordered key, failing if any pair of keys the
/// sort compares is incomparable, or if a key is incomparable with itself.
pub(crate) fn try_sort_by_key<T, K, S, F>(
    source: S,
    mut key: F,
    order: SortOrder,
) -> crate::Result<Vec<T>>
where
    S: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    let invalid = || crate::QueryError::InvalidComparer {
        operator: "try_order_by",
    };
    let mut keyed: Vec<(usize, K, T)> = source
        .into_iter()
        .enumerate()
        .map(|(position, element)| (position, key(&element), element))
        .collect();
    if keyed.iter().any(|(_, k, _)| k.partial_cmp(k).is_none()) {
        return Err(invalid());
    }
    // Once an incomparable pair shows up the result is discarded; from then
    // on source position alone orders the rest so the comparator stays total.
    let mut incomparable = false;
    keyed.sort_by(|a, b| {
        if !incomparable {
            match a.1.partial_cmp(&b.1) {
                Some(ordering) => return order.apply(ordering),
                None => incomparable = true,
            }
        }
        a.0.cmp(&b.0)
    });
    if incomparable {
        return Err(invalid());
    }
    tracing::trace!(rows = keyed.len(), "sorted sequence by partial key");
    Ok(keyed.into_iter().map(|(_, _, element)| element).collect())
}
