//! Fixed-range hash table over chained association-list buckets.
//!
//! A thin dispatch layer: every keyed operation computes
//! `hash(key, range)` with the strategy fixed at construction and
//! delegates to the [`AssocList`] in that bucket, propagating the
//! bucket's result unchanged. The table holds no other state, so every
//! operation is a total function of table contents and arguments; a
//! rejected call leaves the table exactly as it was.
//!
//! The range never changes after construction; there is no resizing or
//! rehashing. A hash result outside `0..range` is a bug in the caller's
//! strategy: with the `bounds_checking` feature the table reports it
//! through the `log` facade and panics before touching the bucket array;
//! without the feature the stray index hits the bucket slice and panics
//! there. It is never clamped or wrapped.

use std::fmt;

use crate::alist::{AssocList, InsertError, Walk};
use crate::strategy::{EqFn, HashFn};
use crate::value::Value;

/// Hash table with a fixed number of chained buckets.
#[derive(Debug)]
pub struct HashTable {
    buckets: Box<[AssocList]>,
    hash: HashFn,
}

/// Rejected table merge: the two tables have different ranges. Neither
/// table was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMismatch {
    pub base: usize,
    pub rest: usize,
}

impl fmt::Display for RangeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot merge tables of range {} and {}",
            self.base, self.rest
        )
    }
}

impl std::error::Error for RangeMismatch {}

impl HashTable {
    /// A table of `range` empty buckets using `hash` for every keyed
    /// operation. A zero-range table is representable but can only be
    /// asked for emptiness; any keyed operation will fail in the strategy.
    pub fn new(range: usize, hash: HashFn) -> Self {
        let buckets = (0..range).map(|_| AssocList::new()).collect();
        HashTable { buckets, hash }
    }

    /// The fixed bucket count.
    pub fn range(&self) -> usize {
        self.buckets.len()
    }

    /// True iff every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(AssocList::is_empty)
    }

    /// Total entry count across all buckets. O(n).
    pub fn len(&self) -> usize {
        self.buckets.iter().map(AssocList::len).sum()
    }

    fn bucket_index(&self, key: &Value) -> usize {
        let index = (self.hash)(key, self.buckets.len());
        #[cfg(feature = "bounds_checking")]
        if index >= self.buckets.len() {
            log::error!(
                "hash strategy returned bucket {index} for a table of range {}",
                self.buckets.len()
            );
            panic!("hash strategy returned an out-of-range bucket index");
        }
        index
    }

    /// Insert with replace. See [`AssocList::insert`].
    pub fn insert(&mut self, key: Value, value: Value, eq: EqFn) -> Option<Value> {
        let i = self.bucket_index(&key);
        self.buckets[i].insert(key, value, eq)
    }

    /// Insert without replace. See [`AssocList::insert_unique`].
    pub fn insert_unique(
        &mut self,
        key: Value,
        value: Value,
        eq: EqFn,
    ) -> Result<(), InsertError> {
        let i = self.bucket_index(&key);
        self.buckets[i].insert_unique(key, value, eq)
    }

    pub fn lookup(&self, key: &Value, eq: EqFn) -> Option<&Value> {
        self.buckets[self.bucket_index(key)].lookup(key, eq)
    }

    /// Unlink a key and hand its pair back. See [`AssocList::delete`].
    pub fn delete(&mut self, key: &Value, eq: EqFn) -> Option<(Value, Value)> {
        let i = self.bucket_index(key);
        self.buckets[i].delete(key, eq)
    }

    /// Visit every entry exactly once: buckets in index order, each bucket
    /// in chain order. No cross-table order is promised. The visitor's
    /// [`Walk`] verdict may remove the current entry; if it rewrites a key,
    /// the entry stays in its bucket regardless of the key's new hash.
    pub fn walk<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Value, &mut Value) -> Walk,
    {
        for bucket in self.buckets.iter_mut() {
            bucket.walk(&mut visit);
        }
    }

    /// Merge with overwrite: bucket *i* of `rest` merges into bucket *i*
    /// of `self`. Requires equal ranges; on mismatch neither table is
    /// touched. On success `rest` is exhausted: a valid, empty table.
    pub fn merge(&mut self, rest: &mut HashTable, eq: EqFn) -> Result<(), RangeMismatch> {
        self.check_range(rest)?;
        for (base, rest) in self.buckets.iter_mut().zip(rest.buckets.iter_mut()) {
            base.merge(rest, eq);
        }
        Ok(())
    }

    /// Merge without overwrite: per-bucket [`AssocList::merge_unique`].
    /// Colliding entries remain in the `rest` bucket they started in;
    /// indices are paired positionally, never recomputed.
    pub fn merge_unique(
        &mut self,
        rest: &mut HashTable,
        eq: EqFn,
    ) -> Result<(), RangeMismatch> {
        self.check_range(rest)?;
        for (base, rest) in self.buckets.iter_mut().zip(rest.buckets.iter_mut()) {
            base.merge_unique(rest, eq);
        }
        Ok(())
    }

    fn check_range(&self, rest: &HashTable) -> Result<(), RangeMismatch> {
        if self.buckets.len() == rest.buckets.len() {
            Ok(())
        } else {
            Err(RangeMismatch {
                base: self.buckets.len(),
                rest: rest.buckets.len(),
            })
        }
    }

    /// Drop every entry; the buckets themselves stay.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }

    /// Read-only view of one bucket's chain. Mostly useful to observe
    /// collision placement in tests and diagnostics.
    pub fn bucket(&self, index: usize) -> &AssocList {
        &self.buckets[index]
    }
}
