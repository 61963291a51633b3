//! Hash-to-bucket mapping.

use core::hash::{BuildHasher, Hash};

/// Wraps the configured `BuildHasher` and reduces hashes to bucket indices.
#[derive(Clone, Debug, Default)]
pub(crate) struct BucketMapper<S> {
    hasher: S,
}

impl<S: BuildHasher> BucketMapper<S> {
    pub(crate) fn new(hasher: S) -> Self {
        Self { hasher }
    }

    pub(crate) fn hasher(&self) -> &S {
        &self.hasher
    }

    #[inline]
    pub(crate) fn hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }
}

/// Bucket index of `hash` in a table of `buckets` buckets; always in
/// `[0, buckets)`. `buckets` must be non-zero.
#[inline]
pub(crate) fn bucket_index(hash: u64, buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    // The remainder is below `buckets`, so it fits back into usize.
    (hash % buckets as u64) as usize
}

/// Hasher that sends every key to bucket 0, for collision tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct ConstBuildHasher;

#[cfg(test)]
pub(crate) struct ConstHasher;

#[cfg(test)]
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}

#[cfg(test)]
impl core::hash::Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}
