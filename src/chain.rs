//! Chain operations over the node arena.
//!
//! A chain is a singly linked list threaded through a `SlotMap`: each bucket
//! holds the key of its first node and each node holds the key of the next
//! one. Links are exclusive; a node is reachable from exactly one bucket.

use hashbrown::Equivalent;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational arena key of a chain node.
    pub(crate) struct NodeKey;
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    // Full hash computed once at insertion; rehash reuses it.
    pub(crate) hash: u64,
    pub(crate) next: Option<NodeKey>,
}

pub(crate) type NodeArena<K> = SlotMap<NodeKey, Node<K>>;

/// Linear scan of the chain starting at `head` for a key equivalent to `q`.
pub(crate) fn chain_find<K, Q>(
    nodes: &NodeArena<K>,
    head: Option<NodeKey>,
    hash: u64,
    q: &Q,
) -> Option<NodeKey>
where
    Q: ?Sized + Equivalent<K>,
{
    let mut cur = head;
    while let Some(k) = cur {
        let node = &nodes[k];
        if node.hash == hash && q.equivalent(&node.key) {
            return Some(k);
        }
        cur = node.next;
    }
    None
}

/// Link a fresh node as the new head of the chain.
///
/// The caller must already know that `key` is absent from the chain.
pub(crate) fn chain_insert<K>(
    nodes: &mut NodeArena<K>,
    head: &mut Option<NodeKey>,
    key: K,
    hash: u64,
) -> NodeKey {
    let k = nodes.insert(Node {
        key,
        hash,
        next: *head,
    });
    *head = Some(k);
    k
}

/// Unlink and destroy the node holding a key equivalent to `q`, returning
/// the owned key. No-op returning `None` when the chain has no such key.
pub(crate) fn chain_erase<K, Q>(
    nodes: &mut NodeArena<K>,
    head: &mut Option<NodeKey>,
    hash: u64,
    q: &Q,
) -> Option<K>
where
    Q: ?Sized + Equivalent<K>,
{
    let mut prev: Option<NodeKey> = None;
    let mut cur = *head;
    while let Some(k) = cur {
        let node = &nodes[k];
        if node.hash == hash && q.equivalent(&node.key) {
            let next = node.next;
            match prev {
                None => *head = next,
                Some(p) => nodes[p].next = next,
            }
            return nodes.remove(k).map(|n| n.key);
        }
        prev = cur;
        cur = node.next;
    }
    None
}

/// Number of nodes in the chain starting at `head`.
pub(crate) fn chain_len<K>(nodes: &NodeArena<K>, head: Option<NodeKey>) -> usize {
    ChainIter::new(nodes, head).count()
}

/// Walks one chain from its head, yielding node keys and nodes.
pub(crate) struct ChainIter<'a, K> {
    nodes: &'a NodeArena<K>,
    cur: Option<NodeKey>,
}

impl<'a, K> ChainIter<'a, K> {
    pub(crate) fn new(nodes: &'a NodeArena<K>, head: Option<NodeKey>) -> Self {
        Self { nodes, cur: head }
    }
}

impl<'a, K> Iterator for ChainIter<'a, K> {
    type Item = (NodeKey, &'a Node<K>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let node = &self.nodes[k];
        self.cur = node.next;
        Some((k, node))
    }
}
