//! Nested-loop implementations of each query operator.
//!
//! Each function takes its input as a slice and returns a fully built
//! `Vec`, so results can be compared directly against the lazy operators.

use query_rs::{QueryError, SortOrder};

pub fn filter<T: Clone>(source: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut output = Vec::new();
    for element in source {
        if predicate(element) {
            output.push(element.clone());
        }
    }
    output
}

pub fn select<T, U>(source: &[T], mut f: impl FnMut(&T) -> U) -> Vec<U> {
    let mut output = Vec::with_capacity(source.len());
    for element in source {
        output.push(f(element));
    }
    output
}

/// Insertion sort: an element moves left only past strictly greater keys,
/// which keeps ties in source order.
pub fn order_by<T: Clone, K: Ord>(
    source: &[T],
    mut key: impl FnMut(&T) -> K,
    order: SortOrder,
) -> Vec<T> {
    let mut keyed: Vec<(K, T)> = Vec::with_capacity(source.len());
    for element in source {
        let k = key(element);
        let mut position = keyed.len();
        while position > 0 && order.apply(keyed[position - 1].0.cmp(&k)).is_gt() {
            position -= 1;
        }
        keyed.insert(position, (k, element.clone()));
    }
    keyed.into_iter().map(|(_, element)| element).collect()
}

/// Groups as `(key, elements)` pairs in first-seen key order.
pub fn group_by<T: Clone, K: PartialEq>(
    source: &[T],
    mut key: impl FnMut(&T) -> K,
) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for element in source {
        let k = key(element);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, elements)) => elements.push(element.clone()),
            None => groups.push((k, vec![element.clone()])),
        }
    }
    groups
}

pub fn join<O, I, K: PartialEq, R>(
    outer: &[O],
    inner: &[I],
    mut outer_key: impl FnMut(&O) -> K,
    mut inner_key: impl FnMut(&I) -> K,
    mut result: impl FnMut(&O, &I) -> R,
) -> Vec<R> {
    let mut output = Vec::new();
    for o in outer {
        let k = outer_key(o);
        for i in inner {
            if inner_key(i) == k {
                output.push(result(o, i));
            }
        }
    }
    output
}

pub fn group_join<O: Clone, I: Clone, K: PartialEq, R>(
    outer: &[O],
    inner: &[I],
    mut outer_key: impl FnMut(&O) -> K,
    mut inner_key: impl FnMut(&I) -> K,
    mut result: impl FnMut(O, &[I]) -> R,
) -> Vec<R> {
    let mut output = Vec::with_capacity(outer.len());
    for o in outer {
        let k = outer_key(o);
        let mut matched = Vec::new();
        for i in inner {
            if inner_key(i) == k {
                matched.push(i.clone());
            }
        }
        output.push(result(o.clone(), &matched));
    }
    output
}

pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    let len = a.len().min(b.len());
    let mut output = Vec::with_capacity(len);
    for index in 0..len {
        output.push((a[index].clone(), b[index].clone()));
    }
    output
}

pub fn aggregate<T, A>(source: &[T], seed: A, mut f: impl FnMut(A, &T) -> A) -> A {
    let mut accumulator = seed;
    for element in source {
        accumulator = f(accumulator, element);
    }
    accumulator
}

pub fn first<T: Clone>(
    source: &[T],
    mut predicate: impl FnMut(&T) -> bool,
) -> Result<T, QueryError> {
    for element in source {
        if predicate(element) {
            return Ok(element.clone());
        }
    }
    Err(QueryError::EmptySequence)
}

pub fn distinct<T: Clone + PartialEq>(source: &[T]) -> Vec<T> {
    let mut output: Vec<T> = Vec::new();
    for element in source {
        if !output.contains(element) {
            output.push(element.clone());
        }
    }
    output
}

pub fn union<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    let mut output = distinct(a);
    for element in b {
        if !output.contains(element) {
            output.push(element.clone());
        }
    }
    output
}

pub fn intersect<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    let mut output: Vec<T> = Vec::new();
    for element in distinct(a) {
        if b.contains(&element) {
            output.push(element);
        }
    }
    output
}

pub fn except<T: Clone + PartialEq>(a: &[T], b: &[T]) -> Vec<T> {
    let mut output: Vec<T> = Vec::new();
    for element in distinct(a) {
        if !b.contains(&element) {
            output.push(element);
        }
    }
    output
}
