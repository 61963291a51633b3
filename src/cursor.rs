//! Positions and iterators over a `ChainedSet`.
//!
//! A `Cursor` is a plain copyable position, like the handles it resolves
//! through: it does not borrow the set, so it is resolved against the set
//! explicitly with `Cursor::key`. Walking order is bucket index order and,
//! within a bucket, most-recently-inserted first. That order is not stable
//! across growth and callers should not rely on it.

use crate::chain::{Node, NodeKey};
use crate::chained_set::ChainedSet;
use crate::table::{ChainTable, Pos};
use core::iter::FusedIterator;

/// Position of one key in a `ChainedSet`, or the end position.
///
/// A cursor stays meaningful until the next structural mutation of the set
/// it came from. After the key it points at is erased it resolves to `None`
/// (arena keys are generational, so a reused slot is never mistaken for the
/// old key). After a growth rehash the key still resolves, but advancing from
/// the old cursor may skip or repeat keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pos: Option<Pos>,
}

impl Cursor {
    /// The past-the-end position. Equal to every other end cursor.
    pub const END: Cursor = Cursor { pos: None };

    #[inline]
    pub(crate) fn from_pos(pos: Option<Pos>) -> Self {
        Self { pos }
    }

    #[inline]
    pub(crate) fn pos(&self) -> Option<Pos> {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// The key at this position, or `None` for the end cursor or a cursor
    /// whose key has since been erased.
    pub fn key<'a, K, S>(&self, set: &'a ChainedSet<K, S>) -> Option<&'a K> {
        set.key_at(*self)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::END
    }
}

/// Borrowing iterator over the keys of a `ChainedSet`.
pub struct Iter<'a, K> {
    table: &'a ChainTable<K>,
    next: Option<Pos>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(table: &'a ChainTable<K>) -> Self {
        Self {
            table,
            next: table.first(),
            remaining: table.len(),
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        let pos = self.next?;
        let node: &'a Node<K> = &self.table.nodes[pos.1];
        self.next = match node.next {
            Some(k) => Some((pos.0, k)),
            None => self.table.buckets.next_occupied(pos.0 + 1),
        };
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

impl<K: core::fmt::Debug> core::fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator over the keys of a `ChainedSet`, in arena order.
pub struct IntoIter<K> {
    it: slotmap::basic::IntoIter<NodeKey, Node<K>>,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(table: ChainTable<K>) -> Self {
        Self {
            it: table.nodes.into_iter(),
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.it.next().map(|(_, node)| node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
