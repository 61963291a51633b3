//! Load-factor growth policy.
//!
//! Growth is `c -> 2c + 1`, which keeps bucket counts odd when starting from
//! an odd count (7, 15, 31, ...). Bucket counts only ever increase here; the
//! only way back down is `clear()`.

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GrowthPolicy {
    max_load_factor: f64,
}

impl GrowthPolicy {
    pub(crate) fn new(max_load_factor: f64) -> Self {
        debug_assert!(max_load_factor.is_finite() && max_load_factor > 0.0);
        Self { max_load_factor }
    }

    pub(crate) fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// True if holding `len` keys in `buckets` buckets would exceed the
    /// maximum load factor.
    #[inline]
    pub(crate) fn exceeds(&self, len: usize, buckets: usize) -> bool {
        len as f64 > buckets as f64 * self.max_load_factor
    }

    /// Bucket count to grow to before holding `len` keys in `buckets`
    /// buckets, or `None` if the current count suffices.
    #[inline]
    pub(crate) fn grow_target(&self, len: usize, buckets: usize) -> Option<usize> {
        self.exceeds(len, buckets)
            .then(|| self.grown_buckets(len, buckets))
    }

    /// Smallest bucket count reachable from `buckets` by repeated growth that
    /// holds `len` keys within the load factor. Returns `buckets` unchanged
    /// when no growth is needed.
    ///
    /// # Panics
    ///
    /// Panics with `capacity overflow` if the bucket count would overflow
    /// `usize`.
    pub(crate) fn grown_buckets(&self, len: usize, buckets: usize) -> usize {
        let mut n = buckets.max(1);
        while self.exceeds(len, n) {
            n = match n.checked_mul(2).and_then(|d| d.checked_add(1)) {
                Some(next) => next,
                None => panic!("capacity overflow"),
            };
        }
        n
    }
}
