//! Hash joins.
//!
//! Both joins build a [`Lookup`] over the inner sequence on the first pull
//! and then stream the outer sequence once.

use std::hash::Hash;

use crate::lookup::Lookup;

/// Inner join: one row per matching `(outer, inner)` pair.
///
/// Rows follow outer order, then inner order within an outer element. Outer
/// elements without a match produce nothing.
pub struct Join<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
{
    outer: I,
    outer_key: FO,
    pending: Option<(J, FI)>,
    lookup: Lookup<K, J::Item>,
    result: FR,
    current: Option<(I::Item, K, usize)>,
}

impl<I, J, K, FO, FI, FR> Join<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
    FO: FnMut(&I::Item) -> K,
    FI: FnMut(&J::Item) -> K,
{
    pub(crate) fn new(outer: I, inner: J, outer_key: FO, inner_key: FI, result: FR) -> Self {
        Self {
            outer,
            outer_key,
            pending: Some((inner, inner_key)),
            lookup: Lookup::default(),
            result,
            current: None,
        }
    }
}

impl<I, J, K, FO, FI, FR, R> Iterator for Join<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
    K: Eq + Hash,
    FO: FnMut(&I::Item) -> K,
    FI: FnMut(&J::Item) -> K,
    FR: FnMut(&I::Item, &J::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some((inner, inner_key)) = self.pending.take() {
            self.lookup = Lookup::build(inner, inner_key);
        }
        loop {
            if let Some((outer, key, position)) = self.current.as_mut()
                && let Some(inner) = self.lookup.get(key).get(*position)
            {
                *position += 1;
                return Some((self.result)(&*outer, inner));
            }
            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            self.current = Some((outer, key, 0));
        }
    }
}

/// Group join: exactly one row per outer element.
///
/// The combiner receives the outer element and every matching inner
/// element; the slice is empty when nothing matched.
pub struct GroupJoin<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
{
    outer: I,
    outer_key: FO,
    pending: Option<(J, FI)>,
    lookup: Lookup<K, J::Item>,
    result: FR,
}

impl<I, J, K, FO, FI, FR> GroupJoin<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
    FO: FnMut(&I::Item) -> K,
    FI: FnMut(&J::Item) -> K,
{
    pub(crate) fn new(outer: I, inner: J, outer_key: FO, inner_key: FI, result: FR) -> Self {
        Self {
            outer,
            outer_key,
            pending: Some((inner, inner_key)),
            lookup: Lookup::default(),
            result,
        }
    }
}

impl<I, J, K, FO, FI, FR, R> Iterator for GroupJoin<I, J, K, FO, FI, FR>
where
    I: Iterator,
    J: Iterator,
    K: Eq + Hash,
    FO: FnMut(&I::Item) -> K,
    FI: FnMut(&J::Item) -> K,
    FR: FnMut(I::Item, &[J::Item]) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some((inner, inner_key)) = self.pending.take() {
            self.lookup = Lookup::build(inner, inner_key);
        }
        let outer = self.outer.next()?;
        let key = (self.outer_key)(&outer);
        Some((self.result)(outer, self.lookup.get(&key)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.outer.size_hint()
    }
}
