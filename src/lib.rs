//! chained-set: an unordered set of unique keys built on separate chaining.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a set with O(1) average membership operations whose table
//!   mechanics (buckets, chains, growth, iteration) are explicit and can be
//!   reasoned about layer by layer.
//! - Layers, leaves first:
//!   - `chain`: nodes in a `slotmap` arena; a chain is a singly linked list
//!     of arena keys. Find, head insertion, unlink.
//!   - `bucket_array`: boxed slice of optional chain heads.
//!   - `mapper`: `BuildHasher` plus `hash % buckets` reduction.
//!   - `growth`: load-factor policy; bucket counts grow `c -> 2c + 1`.
//!   - `table`: `ChainTable<K>`, bucket array + arena, driven purely by
//!     precomputed hashes; rehash relinks nodes into a fresh array.
//!   - `cursor`: copyable positions (`Cursor`) and the `Iter`/`IntoIter`
//!     iterators walking buckets in index order.
//!   - `ChainedSet<K, S>`: public API; hashes keys, consults the policy,
//!     guards against reentrancy.
//!
//! Constraints
//! - Single-threaded: `ChainedSet` is `Send` but not `Sync`.
//! - Unique keys: inserting an existing key is a no-op reporting `false`.
//! - `size <= buckets * max_load_factor` after every insertion.
//! - Bucket counts never shrink implicitly; `clear()` restores the initial
//!   bucket count.
//!
//! Hasher and rehashing invariants
//! - Each node stores its full `u64` hash. Rehash reuses it, so user `Hash`
//!   code only runs on the key being inserted or looked up.
//! - The new bucket array is allocated before any node moves; relinking
//!   does not allocate. A rehash is either not started or complete.
//!
//! Reentrancy
//! - Operations that call user `Hash`/`Eq` code mark the set busy with a
//!   debug-only guard. Re-entering the set from those impls panics in debug
//!   builds.
//!
//! Cursors
//! - `insert` and `find` return a `Cursor`, resolved with `Cursor::key`.
//!   The end cursor and cursors to erased keys resolve to `None`. Cursors
//!   are invalidated by structural mutation; see `Cursor`.
//!
//! ```
//! use chained_set::ChainedSet;
//!
//! let mut set: ChainedSet<String> = ChainedSet::new();
//! let (cursor, inserted) = set.insert("apple".to_string());
//! assert!(inserted);
//! assert_eq!(cursor.key(&set).map(String::as_str), Some("apple"));
//! assert!(!set.insert("apple".to_string()).1);
//!
//! assert_eq!(set.count("apple"), 1);
//! assert!(set.find("pear").is_end());
//! assert_eq!(set.erase("apple"), 1);
//! assert!(set.is_empty());
//! ```

mod bucket_array;
mod chain;
mod chained_set;
mod chained_set_proptest;
mod config;
mod cursor;
mod growth;
mod mapper;
mod reentrancy;
mod table;

// Public surface
pub use chained_set::{ChainedSet, Dump};
pub use config::{ConfigError, SetConfig, DEFAULT_BUCKETS, DEFAULT_MAX_LOAD_FACTOR};
pub use cursor::{Cursor, IntoIter, Iter};
pub use hashbrown::hash_map::DefaultHashBuilder;
pub use hashbrown::Equivalent;
