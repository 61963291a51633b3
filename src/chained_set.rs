//! ChainedSet: the public set API over `ChainTable`.

use crate::config::SetConfig;
use crate::cursor::{Cursor, IntoIter, Iter};
use crate::growth::GrowthPolicy;
use crate::mapper::BucketMapper;
use crate::reentrancy::DebugReentrancy;
use crate::table::ChainTable;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::Equivalent;

/// An unordered set of unique keys using separate chaining.
///
/// Keys live in an arena; each bucket holds the head of a singly linked
/// chain of arena nodes. When an insertion would push the load factor above
/// the configured maximum, the bucket array is replaced by a larger one and
/// every node is relinked into it.
///
/// Lookups accept any `Q: Hash + Equivalent<K>`, so a `ChainedSet<String>`
/// can be queried with a `&str`. `Hash` and `Eq` must agree: equal keys must
/// hash identically.
pub struct ChainedSet<K, S = DefaultHashBuilder> {
    mapper: BucketMapper<S>,
    table: ChainTable<K>,
    policy: GrowthPolicy,
    // Bucket count restored by `clear()`.
    initial_buckets: usize,
    reentrancy: DebugReentrancy,
}

impl<K> ChainedSet<K, DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_config(SetConfig::default())
    }

    /// Start with exactly `buckets` buckets (at least one).
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_config_and_hasher(
            SetConfig::default()
                .with_initial_buckets(buckets.max(1))
                .unwrap_or_default(),
            DefaultHashBuilder::default(),
        )
    }

    /// Start with enough buckets to hold `capacity` keys without growing.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the required bucket count does not
    /// fit in `usize`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    pub fn with_config(config: SetConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K> Default for ChainedSet<K, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> ChainedSet<K, S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_config_and_hasher(SetConfig::default(), hasher)
    }

    /// Like `with_capacity`, with a caller-supplied hasher.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the required bucket count does not
    /// fit in `usize`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let config = SetConfig::default();
        let policy = GrowthPolicy::new(config.max_load_factor());
        let buckets = policy.grown_buckets(capacity, config.initial_buckets());
        Self::with_config_and_hasher(
            config.with_initial_buckets(buckets).unwrap_or(config),
            hasher,
        )
    }

    pub fn with_config_and_hasher(config: SetConfig, hasher: S) -> Self {
        Self {
            mapper: BucketMapper::new(hasher),
            table: ChainTable::with_buckets(config.initial_buckets()),
            policy: GrowthPolicy::new(config.max_load_factor()),
            initial_buckets: config.initial_buckets(),
            reentrancy: DebugReentrancy::new(),
        }
    }

    pub fn hasher(&self) -> &S {
        self.mapper.hasher()
    }
}

impl<K, S> ChainedSet<K, S> {
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.bucket_count()
    }

    /// Keys per bucket.
    pub fn load_factor(&self) -> f64 {
        self.table.len() as f64 / self.table.bucket_count() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.policy.max_load_factor()
    }

    /// Drop every key and return to the initial bucket count.
    pub fn clear(&mut self) {
        log::trace!(
            "clear: dropping {} keys, {} -> {} buckets",
            self.table.len(),
            self.table.bucket_count(),
            self.initial_buckets
        );
        self.table.reset(self.initial_buckets);
    }

    /// Exchange the contents of two sets without copying any key.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Cursor at the first key in iteration order, or `end()` if empty.
    pub fn begin(&self) -> Cursor {
        Cursor::from_pos(self.table.first())
    }

    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// The cursor following `cursor`. Advancing `end()` stays at `end()`,
    /// as does advancing a cursor whose key was erased.
    pub fn advance(&self, cursor: Cursor) -> Cursor {
        Cursor::from_pos(cursor.pos().and_then(|p| self.table.successor(p)))
    }

    /// Resolve a cursor obtained from this set.
    pub fn key_at(&self, cursor: Cursor) -> Option<&K> {
        cursor.pos().and_then(|(_, node)| self.table.key_at(node))
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.table)
    }

    /// Bucket-by-bucket listing of the table for debugging.
    pub fn dump(&self) -> Dump<'_, K, S> {
        Dump { set: self }
    }
}

impl<K, S> ChainedSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Insert `key` if absent.
    ///
    /// Returns a cursor at the stored key and whether it was newly inserted.
    /// A duplicate leaves the set unchanged and drops `key`.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the bucket count cannot grow.
    pub fn insert(&mut self, key: K) -> (Cursor, bool) {
        let _g = self.reentrancy.enter("insert");
        let hash = self.mapper.hash(&key);
        if let Some(pos) = self.table.find(hash, &key) {
            return (Cursor::from_pos(Some(pos)), false);
        }
        let buckets = self.table.bucket_count();
        if let Some(target) = self.policy.grow_target(self.table.len() + 1, buckets) {
            self.table.rehash(target);
        }
        let pos = self.table.insert_unique(hash, key);
        (Cursor::from_pos(Some(pos)), true)
    }

    /// Cursor at the key equivalent to `q`, or `end()`.
    pub fn find<Q>(&self, q: &Q) -> Cursor
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let _g = self.reentrancy.enter("find");
        let hash = self.mapper.hash(q);
        Cursor::from_pos(self.table.find(hash, q))
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&K>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let _g = self.reentrancy.enter("get");
        let hash = self.mapper.hash(q);
        let (_, node) = self.table.find(hash, q)?;
        self.table.key_at(node)
    }

    pub fn contains<Q>(&self, q: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let _g = self.reentrancy.enter("contains");
        let hash = self.mapper.hash(q);
        self.table.find(hash, q).is_some()
    }

    /// 1 if the set holds a key equivalent to `q`, else 0.
    pub fn count<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        usize::from(self.contains(q))
    }

    /// Remove and return the key equivalent to `q`.
    pub fn take<Q>(&mut self, q: &Q) -> Option<K>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let _g = self.reentrancy.enter("take");
        let hash = self.mapper.hash(q);
        self.table.erase(hash, q)
    }

    pub fn remove<Q>(&mut self, q: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.take(q).is_some()
    }

    /// Number of keys removed: 1 or 0.
    pub fn erase<Q>(&mut self, q: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        usize::from(self.remove(q))
    }

    /// Grow now so that `additional` more keys fit without a rehash.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the bucket count cannot grow.
    pub fn reserve(&mut self, additional: usize) {
        let wanted = self.table.len().saturating_add(additional);
        if let Some(target) = self.policy.grow_target(wanted, self.table.bucket_count()) {
            log::trace!("reserve: room for {wanted} keys");
            self.table.rehash(target);
        }
    }
}

impl<K, S> Clone for ChainedSet<K, S>
where
    K: Clone,
    S: Clone,
{
    /// Deep copy: fresh arena and bucket array holding clones of every key.
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            table: self.table.clone(),
            policy: self.policy,
            initial_buckets: self.initial_buckets,
            reentrancy: DebugReentrancy::new(),
        }
    }
}

impl<K, S> PartialEq for ChainedSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|k| other.contains(k))
    }
}

impl<K, S> Eq for ChainedSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, S> fmt::Debug for ChainedSet<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, S> Extend<K> for ChainedSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts each key in turn; only keys not already present can grow the table.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<'a, K, S> Extend<&'a K> for ChainedSet<K, S>
where
    K: 'a + Eq + Hash + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<K, S> FromIterator<K> for ChainedSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<K, const N: usize> From<[K; N]> for ChainedSet<K, DefaultHashBuilder>
where
    K: Eq + Hash,
{
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a, K, S> IntoIterator for &'a ChainedSet<K, S> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, S> IntoIterator for ChainedSet<K, S> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        IntoIter::new(self.table)
    }
}

/// Display adapter returned by `ChainedSet::dump`.
pub struct Dump<'a, K, S> {
    set: &'a ChainedSet<K, S>,
}

impl<K: fmt::Debug, S> fmt::Display for Dump<'_, K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = &self.set.table;
        writeln!(
            f,
            "buckets: {}, len: {}, load factor: {:.3}, longest chain: {}",
            table.bucket_count(),
            table.len(),
            self.set.load_factor(),
            table.max_chain_len()
        )?;
        for b in 0..table.bucket_count() {
            write!(f, "[{b}]:")?;
            let mut chain = table.chain(b).peekable();
            if chain.peek().is_none() {
                write!(f, " -")?;
            }
            let mut first = true;
            for (_, node) in chain {
                let sep = if first { " " } else { " -> " };
                write!(f, "{sep}{:?}", node.key)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl<K, S> ChainedSet<K, S> {
    pub(crate) fn assert_consistent(&self) {
        self.table.assert_consistent();
        assert!(
            !self.policy.exceeds(self.table.len(), self.table.bucket_count()),
            "load factor {} above {}",
            self.load_factor(),
            self.max_load_factor()
        );
    }
}
