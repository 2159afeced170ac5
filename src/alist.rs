//! Association list: the unordered (key, value) store used as a hash
//! table bucket.
//!
//! Entries live in a singly linked chain; a miss prepends, so chain order
//! is most-recently-inserted-first. Keys are compared only through the
//! caller-supplied equality strategy; the list itself is key-agnostic.
//! Key uniqueness is an invariant only under exclusive use of
//! [`AssocList::insert_unique`] / [`AssocList::merge_unique`]; plain
//! [`AssocList::insert`] replaces the value of a matching key by policy.

use std::fmt;
use std::mem;

use crate::sll::Sll;
use crate::strategy::EqFn;
use crate::value::Value;

#[derive(Debug)]
struct Entry {
    key: Value,
    value: Value,
}

/// Unordered (key, value) store over a singly linked chain.
#[derive(Debug, Default)]
pub struct AssocList {
    list: Sll<Entry>,
}

/// Rejected uniqueness-enforcing insert. Carries the offered pair back to
/// the caller untouched, so bulk operations can retain it.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertError {
    Duplicate { key: Value, value: Value },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::Duplicate { key, .. } => {
                write!(f, "key {key:?} is already present")
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// Verdict a [`AssocList::walk`] visitor returns for the entry it was
/// handed. `Remove` unlinks that entry, and only that entry, without
/// derailing the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Keep,
    Remove,
}

impl AssocList {
    /// An empty list. Never allocates.
    pub fn new() -> Self {
        AssocList { list: Sll::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Insert with replace: a key matching under `eq` keeps its stored key
    /// and has its value overwritten in place; the previous value is
    /// returned and the redundant incoming key is dropped. A miss prepends
    /// a fresh entry and returns `None`.
    pub fn insert(&mut self, key: Value, value: Value, eq: EqFn) -> Option<Value> {
        match self.list.iter_mut().find(|e| eq(&key, &e.key)) {
            Some(e) => Some(mem::replace(&mut e.value, value)),
            None => {
                self.list.push_front(Entry { key, value });
                None
            }
        }
    }

    /// Insert without replace: a key matching under `eq` is an error and
    /// the list is left untouched; the rejected pair travels back inside
    /// the error.
    pub fn insert_unique(
        &mut self,
        key: Value,
        value: Value,
        eq: EqFn,
    ) -> Result<(), InsertError> {
        if self.list.iter().any(|e| eq(&key, &e.key)) {
            return Err(InsertError::Duplicate { key, value });
        }
        self.list.push_front(Entry { key, value });
        Ok(())
    }

    /// First match in chain order, i.e. most-recently-inserted-first.
    pub fn lookup(&self, key: &Value, eq: EqFn) -> Option<&Value> {
        self.list.iter().find(|e| eq(key, &e.key)).map(|e| &e.value)
    }

    /// Unlink the first match and hand its pair back; `None` leaves the
    /// list untouched. Head and interior nodes unlink alike.
    pub fn delete(&mut self, key: &Value, eq: EqFn) -> Option<(Value, Value)> {
        self.list
            .remove_where(|e| eq(key, &e.key))
            .map(|e| (e.key, e.value))
    }

    /// Visit every entry once in chain order. The visitor may rewrite key
    /// and value in place (rehashing consequences are the caller's) and
    /// decides whether the current entry stays. The successor is resolved
    /// before each visit, so removing the current entry is always safe;
    /// removing any other entry is not expressible here.
    pub fn walk<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Value, &mut Value) -> Walk,
    {
        self.list
            .retain_mut(|e| matches!(visit(&mut e.key, &mut e.value), Walk::Keep));
    }

    /// Merge with overwrite: every entry of `rest` is taken off `rest` one
    /// at a time and inserted into `self`, replacing values of matching
    /// keys. Afterwards `rest` is exhausted: a valid, empty list. O(n·m).
    pub fn merge(&mut self, rest: &mut AssocList, eq: EqFn) {
        while let Some(Entry { key, value }) = rest.list.pop_front() {
            self.insert(key, value, eq);
        }
    }

    /// Merge without overwrite: entries whose keys are absent from `self`
    /// transfer; colliding entries stay behind in `rest`, in their
    /// original relative order. Afterwards `rest` holds exactly the
    /// collisions, which is the deliberate asymmetry with
    /// [`AssocList::merge`].
    pub fn merge_unique(&mut self, rest: &mut AssocList, eq: EqFn) {
        let mut kept = Vec::new();
        while let Some(Entry { key, value }) = rest.list.pop_front() {
            if let Err(InsertError::Duplicate { key, value }) =
                self.insert_unique(key, value, eq)
            {
                kept.push(Entry { key, value });
            }
        }
        for entry in kept.into_iter().rev() {
            rest.list.push_front(entry);
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.list.iter().map(|e| (&e.key, &e.value))
    }
}
