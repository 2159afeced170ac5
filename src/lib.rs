//! chaintable: a fixed-range chained hash table and companion containers
//! over a tagged generic value.
//!
//! Internal design:
//!
//! Summary
//! - Goal: keep each container a thin, independently testable layer over
//!   the one below it, with all key behavior injected by the caller.
//! - Layers:
//!   - `Sll<T>`: singly linked list primitive for prepend, head/interior
//!     unlink, in-place visitation. No policy of its own.
//!   - `AssocList`: unordered (key, value) store over `Sll`; owns the
//!     replace-on-match / reject-on-match insert policies, deletion, the
//!     delete-current-only walk, and both merge flavors.
//!   - `HashTable`: a fixed array of `AssocList` buckets plus a hash
//!     strategy chosen at construction; dispatches every keyed call to
//!     one bucket and propagates its result unchanged.
//! - `Value` is the only payload type: a closed sum over signed integer,
//!   unsigned integer, single-byte symbol, and opaque shared reference.
//!   `Stack<T>` rides along as a trivial adapter over `Sll`.
//!
//! Constraints
//! - Single-threaded by design; a `Value::Ref` payload is an `Rc`, so the
//!   containers are `!Send`/`!Sync` and misuse is a compile error.
//! - The table range is fixed at construction: no resizing, no rehashing.
//! - Hashing and equality are caller-supplied strategy functions; the
//!   containers never compare keys on their own.
//! - Key uniqueness holds only under exclusive use of the `_unique`
//!   operations; plain insert replaces a matching key's value by policy.
//!
//! Failure conventions
//! - Misses (`lookup`, `delete`) are `None`; a rejected unique insert
//!   returns the offered pair inside the error; a range mismatch between
//!   merged tables reports both ranges and mutates nothing. There is no
//!   shared error state anywhere.
//! - A hash result outside `0..range` is a caller bug: the
//!   `bounds_checking` feature reports it through the `log` facade and
//!   panics before the bucket array is touched; without the feature the
//!   bucket slice's own bounds check panics. The index is never clamped.
//!
//! Merge contracts
//! - `merge` (overwrite) drains `rest` one entry at a time into the base
//!   container and leaves it exhausted; `merge_unique` transfers only
//!   fresh keys and leaves the collisions behind in `rest`. The asymmetry
//!   is deliberate and load-bearing for callers that retry collisions.

pub mod alist;
pub mod ht;
pub mod sll;
pub mod stack;
pub mod strategy;
pub mod value;

// Public surface
pub use alist::{AssocList, InsertError, Walk};
pub use ht::{HashTable, RangeMismatch};
pub use sll::Sll;
pub use stack::Stack;
pub use strategy::{EqFn, HashFn};
pub use value::Value;
