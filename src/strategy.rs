//! Hash and equality strategies.
//!
//! The containers never hash or compare keys themselves; callers pass a
//! [`HashFn`] at table construction and an [`EqFn`] into every keyed
//! operation. The stock strategies below cover the four [`Value`] kinds.
//!
//! A hash strategy must satisfy `hash(key, range) < range` for every key
//! it will ever see; the table treats a violation as a programming error,
//! not a recoverable condition (see [`crate::ht`]).

use std::rc::Rc;

use crate::value::Value;

/// Maps a key to a bucket index in `0..range`.
pub type HashFn = fn(&Value, usize) -> usize;

/// Key equality predicate.
pub type EqFn = fn(&Value, &Value) -> bool;

/// Bucket index for signed-integer keys. Euclidean remainder, so negative
/// keys land in range too.
///
/// # Panics
/// If the key is not [`Value::Int`], or `range` is zero.
pub fn int_hash(key: &Value, range: usize) -> usize {
    match key {
        Value::Int(n) => n.rem_euclid(range as i64) as usize,
        other => panic!("int_hash applied to {other:?}"),
    }
}

/// Bucket index for unsigned-integer keys.
///
/// # Panics
/// If the key is not [`Value::Uint`], or `range` is zero.
pub fn uint_hash(key: &Value, range: usize) -> usize {
    match key {
        Value::Uint(n) => (n % range as u64) as usize,
        other => panic!("uint_hash applied to {other:?}"),
    }
}

/// Bucket index for symbol keys.
///
/// # Panics
/// If the key is not [`Value::Sym`], or `range` is zero.
pub fn sym_hash(key: &Value, range: usize) -> usize {
    match key {
        Value::Sym(s) => *s as usize % range,
        other => panic!("sym_hash applied to {other:?}"),
    }
}

/// Bucket index for reference keys, derived from the allocation address.
/// Stable for a given key while it is alive, which is all a fixed-range
/// table requires.
///
/// # Panics
/// If the key is not [`Value::Ref`], or `range` is zero.
pub fn ref_hash(key: &Value, range: usize) -> usize {
    match key {
        Value::Ref(rc) => Rc::as_ptr(rc) as *const () as usize % range,
        other => panic!("ref_hash applied to {other:?}"),
    }
}

/// Signed-integer equality. Keys of any other kind never match.
pub fn int_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x == y,
        _ => false,
    }
}

/// Unsigned-integer equality. Keys of any other kind never match.
pub fn uint_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Uint(x), Value::Uint(y)) => x == y,
        _ => false,
    }
}

/// Symbol equality. Keys of any other kind never match.
pub fn sym_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Sym(x), Value::Sym(y)) => x == y,
        _ => false,
    }
}

/// Reference identity: two keys are equal iff they share an allocation.
/// Payload content is never consulted.
pub fn ref_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Ref(x), Value::Ref(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}
