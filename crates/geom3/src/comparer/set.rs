//! Hash set keyed by an [`EqualityComparer`] instead of `Eq + Hash`.
//!
//! Buckets are keyed by `comparer.hash(value)`; within a bucket membership is
//! decided by `comparer.equals`. Insertion order is preserved.

use std::collections::HashMap;

use super::EqualityComparer;

#[derive(Clone, Debug)]
pub struct ComparerSet<T, C> {
    comparer: C,
    items: Vec<T>,
    buckets: HashMap<i32, Vec<usize>>,
}

impl<T, C: EqualityComparer<T>> ComparerSet<T, C> {
    pub fn new(comparer: C) -> Self {
        Self {
            comparer,
            items: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Insert `value` unless an equal one is present. Returns `true` if inserted.
    pub fn insert(&mut self, value: T) -> bool {
        let key = self.comparer.hash(&value);
        let bucket = self.buckets.entry(key).or_default();
        if bucket.len() > 1 {
            tracing::trace!(key, len = bucket.len(), "bucket fallback to linear equals");
        }
        if bucket
            .iter()
            .any(|&i| self.comparer.equals(&self.items[i], &value))
        {
            return false;
        }
        bucket.push(self.items.len());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let key = self.comparer.hash(value);
        self.buckets.get(&key).is_some_and(|bucket| {
            bucket
                .iter()
                .any(|&i| self.comparer.equals(&self.items[i], value))
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct hash buckets in use.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Members in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C: EqualityComparer<T>> Extend<T> for ComparerSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a ComparerSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// First occurrence of each equivalence class under `comparer`, in input order.
pub fn distinct<T, C, I>(items: I, comparer: &C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    C: EqualityComparer<T>,
{
    let mut set = ComparerSet::new(comparer);
    set.extend(items);
    set.into_vec()
}

