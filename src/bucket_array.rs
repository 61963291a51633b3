//! Fixed-size array of chain heads.

use crate::chain::NodeKey;

/// One slot per bucket; `None` is an empty bucket. The array never changes
/// length: growth replaces it with a new one.
#[derive(Clone, Debug)]
pub(crate) struct BucketArray {
    heads: Box<[Option<NodeKey>]>,
}

impl BucketArray {
    /// Allocate `buckets` empty buckets. Zero is bumped to one so that bucket
    /// mapping never divides by zero.
    pub(crate) fn with_buckets(buckets: usize) -> Self {
        Self {
            heads: vec![None; buckets.max(1)].into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub(crate) fn head(&self, bucket: usize) -> Option<NodeKey> {
        self.heads[bucket]
    }

    #[inline]
    pub(crate) fn head_mut(&mut self, bucket: usize) -> &mut Option<NodeKey> {
        &mut self.heads[bucket]
    }

    /// First non-empty bucket at or after `from`, with its head node.
    pub(crate) fn next_occupied(&self, from: usize) -> Option<(usize, NodeKey)> {
        self.heads
            .get(from..)?
            .iter()
            .enumerate()
            .find_map(|(i, h)| h.map(|k| (from + i, k)))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Option<NodeKey>> + '_ {
        self.heads.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn zero_buckets_rounds_up_to_one() {
        let b = BucketArray::with_buckets(0);
        assert_eq!(b.len(), 1);
        assert_eq!(b.head(0), None);
    }

    /// Invariant: `next_occupied` scans forward in index order and stops at the end.
    #[test]
    fn next_occupied_scans_forward() {
        let mut keys: SlotMap<NodeKey, ()> = SlotMap::with_key();
        let k1 = keys.insert(());
        let k2 = keys.insert(());

        let mut b = BucketArray::with_buckets(8);
        assert_eq!(b.next_occupied(0), None);

        *b.head_mut(2) = Some(k1);
        *b.head_mut(5) = Some(k2);
        assert_eq!(b.next_occupied(0), Some((2, k1)));
        assert_eq!(b.next_occupied(2), Some((2, k1)));
        assert_eq!(b.next_occupied(3), Some((5, k2)));
        assert_eq!(b.next_occupied(6), None);
        assert_eq!(b.next_occupied(8), None);
        assert_eq!(b.next_occupied(100), None);
        assert_eq!(b.iter().filter(Option::is_some).count(), 2);
    }
}
