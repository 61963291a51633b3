// ChainedSet property tests (public API).
//
// Property 1: membership parity with std::collections::HashSet.
//  - Model: HashSet<u8> driven by the same insert/erase sequence.
//  - Invariant: insert reports freshness like HashSet::insert; erase returns
//    1 exactly when the model removed the key; len() matches after each step.
//  - Final: iteration yields the model's key set, each key once.
//
// Property 2: rehash transparency under arbitrary configurations.
//  - Any initial bucket count and load factor; every distinct inserted key
//    remains findable and the load factor bound holds.
use chained_set::{ChainedSet, SetConfig};
use proptest::prelude::*;
use std::collections::HashSet;

// Property 1: insert/erase sequences agree with HashSet.
proptest! {
    #[test]
    fn prop_matches_std_hashset(ops in proptest::collection::vec((any::<bool>(), any::<u8>()), 1..300)) {
        let mut s: ChainedSet<u8> = ChainedSet::new();
        let mut model: HashSet<u8> = HashSet::new();

        for (insert, k) in ops {
            if insert {
                let (c, fresh) = s.insert(k);
                prop_assert_eq!(fresh, model.insert(k));
                prop_assert_eq!(c.key(&s), Some(&k));
            } else {
                prop_assert_eq!(s.erase(&k), usize::from(model.remove(&k)));
            }
            prop_assert_eq!(s.len(), model.len());
            prop_assert_eq!(s.count(&k), usize::from(model.contains(&k)));
        }

        let mut seen: Vec<u8> = s.iter().copied().collect();
        seen.sort_unstable();
        let mut expected: Vec<u8> = model.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }
}

// Property 2: every key survives growth, whatever the configuration.
proptest! {
    #[test]
    fn prop_rehash_transparency(
        keys in proptest::collection::vec(any::<u32>(), 0..500),
        buckets in 1usize..64,
        lf in 0.1f64..4.0
    ) {
        let config = SetConfig::new(buckets, lf).unwrap();
        let mut s: ChainedSet<u32> = ChainedSet::with_config(config);
        for &k in &keys {
            s.insert(k);
            prop_assert!(s.len() as f64 <= s.capacity() as f64 * lf);
        }
        let distinct: HashSet<u32> = keys.iter().copied().collect();
        prop_assert_eq!(s.len(), distinct.len());
        for k in &distinct {
            prop_assert!(!s.find(k).is_end());
        }
        prop_assert!(s.capacity() >= buckets);
    }
}
