#![cfg(test)]

// Property tests for ChainedSet kept inside the crate so they can check the
// table's internal placement invariants after every step.

use crate::chained_set::ChainedSet;
use crate::config::SetConfig;
use crate::cursor::Cursor;
use crate::mapper::ConstBuildHasher;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Erase(usize),
    Take(usize),
    Find(usize),
    Contains(String),
    Iterate,
    Walk,
    CloneSet,
    Clear,
    Reserve(usize),
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            8 => idx.clone().prop_map(OpI::Insert),
            3 => idx.clone().prop_map(OpI::Erase),
            2 => idx.clone().prop_map(OpI::Take),
            3 => idx.clone().prop_map(OpI::Find),
            2 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Walk),
            1 => Just(OpI::CloneSet),
            1 => Just(OpI::Clear),
            1 => (0usize..64).prop_map(OpI::Reserve),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn walk_keys<S>(sut: &ChainedSet<Key, S>) -> Vec<Key> {
    let mut out = Vec::new();
    let mut c = sut.begin();
    while c != sut.end() {
        out.push(c.key(sut).expect("valid cursor resolves").clone());
        c = sut.advance(c);
    }
    out
}

// Drives one scenario against a std HashSet model. Invariants exercised after
// every operation:
// - `insert` reports `true` exactly when the key was absent; the returned
//   cursor resolves to that key.
// - `find`/`contains`/`count` parity with the model.
// - `erase`/`take` remove exactly the model's key; cursors to erased keys
//   never resolve again, across later growth and slot reuse.
// - iteration and the cursor walk both visit each key exactly once.
// - clones are independent of the original.
// - `len`/`is_empty` parity; placement and load-factor invariants hold.
fn run_scenario<S>(
    mut sut: ChainedSet<Key, S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: BuildHasher + Clone,
{
    let mut model: HashSet<Key> = HashSet::new();
    let mut stale: Vec<Cursor> = Vec::new();

    for op in ops {
        match op {
            OpI::Insert(i) => {
                let k = key_from(pool, i);
                let already = model.contains(&k);
                let (c, inserted) = sut.insert(k.clone());
                prop_assert_eq!(inserted, !already, "inserted iff absent");
                prop_assert_eq!(c.key(&sut), Some(&k));
                model.insert(k);
            }
            OpI::Erase(i) => {
                let k = key_from(pool, i);
                let c = sut.find(&k);
                let n = sut.erase(&k);
                prop_assert_eq!(n, usize::from(model.remove(&k)));
                if n == 1 {
                    stale.push(c);
                }
                prop_assert_eq!(sut.count(&k), 0);
            }
            OpI::Take(i) => {
                let k = key_from(pool, i);
                let taken = sut.take(k.0.as_str());
                prop_assert_eq!(taken.is_some(), model.remove(&k));
                if let Some(t) = taken {
                    prop_assert!(t == k);
                }
            }
            OpI::Find(i) => {
                let k = key_from(pool, i);
                let c = sut.find(&k);
                prop_assert_eq!(!c.is_end(), model.contains(&k));
                prop_assert_eq!(sut.count(&k), usize::from(model.contains(&k)));
                if !c.is_end() {
                    prop_assert_eq!(c.key(&sut), Some(&k));
                }
            }
            OpI::Contains(s) => {
                let has = sut.contains(s.as_str());
                let has_model = model.iter().any(|k| k.0 == s);
                prop_assert_eq!(has, has_model);
            }
            OpI::Iterate => {
                let s_keys: Vec<Key> = sut.iter().cloned().collect();
                prop_assert_eq!(s_keys.len(), model.len());
                let s_set: BTreeSet<Key> = s_keys.into_iter().collect();
                let m_set: BTreeSet<Key> = model.iter().cloned().collect();
                prop_assert_eq!(s_set, m_set);
            }
            OpI::Walk => {
                let walked = walk_keys(&sut);
                let iterated: Vec<Key> = sut.iter().cloned().collect();
                prop_assert_eq!(walked, iterated);
            }
            OpI::CloneSet => {
                let mut copy = sut.clone();
                prop_assert!(copy == sut);
                copy.insert(Key("#not-in-pool".to_string()));
                if let Some(k) = model.iter().next() {
                    copy.erase(k);
                }
                prop_assert!(copy != sut);
                prop_assert_eq!(sut.len(), model.len());
                for k in &model {
                    prop_assert!(sut.contains(k));
                }
            }
            OpI::Clear => {
                sut.clear();
                model.clear();
                stale.clear();
                prop_assert_eq!(sut.begin(), sut.end());
            }
            OpI::Reserve(n) => {
                sut.reserve(n);
                let room = sut.capacity() as f64 * sut.max_load_factor();
                prop_assert!(room >= (sut.len() + n) as f64);
            }
        }

        // Post-conditions after each op
        for c in &stale {
            prop_assert!(c.key(&sut).is_none());
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        sut.assert_consistent();
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(ChainedSet::new(), &pool, ops)?;
    }
}

// Tiny tables and aggressive load factors force a rehash every few inserts.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_small_tables(
        (pool, ops) in arb_scenario(),
        buckets in 1usize..4,
        lf in prop_oneof![Just(0.25), Just(0.7), Just(1.0), Just(3.0)]
    ) {
        let config = SetConfig::new(buckets, lf).unwrap();
        run_scenario(ChainedSet::with_config(config), &pool, ops)?;
    }
}

// Property: Same state-machine invariants as above, under worst-case
// collision behavior (constant hasher). Every key shares one chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(ChainedSet::with_hasher(ConstBuildHasher), &pool, ops)?;
    }
}

// Property: equality ignores insertion order and detects a single extra key.
proptest! {
    #[test]
    fn prop_equality_is_order_independent(keys in proptest::collection::vec(any::<u16>(), 0..200), extra in any::<u16>()) {
        let a: ChainedSet<u16> = keys.iter().copied().collect();
        let b: ChainedSet<u16> = keys.iter().rev().copied().collect();
        prop_assert!(a == b);

        let distinct: HashSet<u16> = keys.iter().copied().collect();
        prop_assert_eq!(a.len(), distinct.len());

        let mut c = b.clone();
        let added = c.insert(extra).1;
        prop_assert_eq!(a == c, !added);
    }
}
