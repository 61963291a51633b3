//! ChainTable: bucket array plus node arena, with no hasher attached.
//!
//! All entry points take a precomputed hash; the table never calls user
//! `Hash` code. Rehash relinks the existing nodes using their stored hashes.

use crate::bucket_array::BucketArray;
use crate::chain::{self, ChainIter, NodeArena, NodeKey};
use crate::mapper::bucket_index;
use hashbrown::Equivalent;

/// Position of a live node: its bucket and its arena key.
pub(crate) type Pos = (usize, NodeKey);

#[derive(Clone, Debug)]
pub(crate) struct ChainTable<K> {
    pub(crate) buckets: BucketArray,
    pub(crate) nodes: NodeArena<K>,
}

impl<K> ChainTable<K> {
    pub(crate) fn with_buckets(buckets: usize) -> Self {
        Self {
            buckets: BucketArray::with_buckets(buckets),
            nodes: NodeArena::with_key(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn bucket_of(&self, hash: u64) -> usize {
        bucket_index(hash, self.buckets.len())
    }

    pub(crate) fn find<Q>(&self, hash: u64, q: &Q) -> Option<Pos>
    where
        Q: ?Sized + Equivalent<K>,
    {
        let b = self.bucket_of(hash);
        chain::chain_find(&self.nodes, self.buckets.head(b), hash, q).map(|k| (b, k))
    }

    /// Insert a key known to be absent.
    pub(crate) fn insert_unique(&mut self, hash: u64, key: K) -> Pos {
        let b = self.bucket_of(hash);
        let k = chain::chain_insert(&mut self.nodes, self.buckets.head_mut(b), key, hash);
        (b, k)
    }

    pub(crate) fn erase<Q>(&mut self, hash: u64, q: &Q) -> Option<K>
    where
        Q: ?Sized + Equivalent<K>,
    {
        let b = self.bucket_of(hash);
        chain::chain_erase(&mut self.nodes, self.buckets.head_mut(b), hash, q)
    }

    /// Move every node into a new array of `new_buckets` buckets.
    ///
    /// The new array is allocated before any node is touched; relinking does
    /// not allocate, so the table is either untouched or fully migrated.
    pub(crate) fn rehash(&mut self, new_buckets: usize) {
        let mut fresh = BucketArray::with_buckets(new_buckets);
        let n = fresh.len();
        for head in self.buckets.iter() {
            let mut cur = head;
            while let Some(k) = cur {
                let node = &mut self.nodes[k];
                cur = node.next;
                let slot = fresh.head_mut(bucket_index(node.hash, n));
                node.next = *slot;
                *slot = Some(k);
            }
        }
        let old = core::mem::replace(&mut self.buckets, fresh);
        log::debug!(
            "rehash: {} -> {} buckets ({} keys)",
            old.len(),
            n,
            self.nodes.len()
        );
    }

    /// Drop every node and start over with `buckets` empty buckets.
    pub(crate) fn reset(&mut self, buckets: usize) {
        self.nodes.clear();
        self.buckets = BucketArray::with_buckets(buckets);
    }

    pub(crate) fn key_at(&self, node: NodeKey) -> Option<&K> {
        self.nodes.get(node).map(|n| &n.key)
    }

    pub(crate) fn first(&self) -> Option<Pos> {
        self.buckets.next_occupied(0)
    }

    /// Position after `pos`: the next node in the same chain, else the head
    /// of the next non-empty bucket. A stale node key yields `None`.
    pub(crate) fn successor(&self, pos: Pos) -> Option<Pos> {
        let (b, k) = pos;
        match self.nodes.get(k)?.next {
            Some(next) => Some((b, next)),
            None => self.buckets.next_occupied(b + 1),
        }
    }

    pub(crate) fn chain(&self, bucket: usize) -> ChainIter<'_, K> {
        ChainIter::new(&self.nodes, self.buckets.head(bucket))
    }

    /// Length of the longest chain.
    pub(crate) fn max_chain_len(&self) -> usize {
        self.buckets
            .iter()
            .map(|h| chain::chain_len(&self.nodes, h))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
impl<K> ChainTable<K> {
    /// Every node sits in the bucket its stored hash maps to, and is reachable
    /// from exactly one bucket.
    pub(crate) fn assert_consistent(&self) {
        let n = self.bucket_count();
        let mut seen = 0usize;
        for b in 0..n {
            for (_, node) in self.chain(b) {
                assert_eq!(bucket_index(node.hash, n), b, "node in wrong bucket");
                seen += 1;
            }
        }
        assert_eq!(seen, self.nodes.len(), "unreachable or shared nodes");
    }
}
