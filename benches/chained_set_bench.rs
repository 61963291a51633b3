use chained_set::{ChainedSet, SetConfig};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (ChainedSet<String>, Vec<String>) {
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    let mut s = ChainedSet::new();
    for k in &keys {
        s.insert(k.clone());
    }
    (s, keys)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_fresh_100k", |b| {
        b.iter_batched(
            ChainedSet::<String>::new,
            |mut s| {
                for x in lcg(1).take(100_000) {
                    s.insert(key(x));
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_reserved_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_reserved_100k", |b| {
        b.iter_batched(
            || {
                let mut s = ChainedSet::<String>::new();
                s.reserve(100_000);
                s
            },
            |mut s| {
                for x in lcg(3).take(100_000) {
                    s.insert(key(x));
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        )
    });
}

// Growth cost as a function of the load factor threshold.
fn bench_insert_by_load_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained::insert_10k_by_load_factor");
    for lf in [0.5, 0.7, 1.0, 2.0] {
        group.bench_function(format!("lf_{lf}"), |b| {
            b.iter_batched(
                || ChainedSet::<u64>::with_config(SetConfig::new(7, lf).unwrap()),
                |mut s| {
                    for x in lcg(5).take(10_000) {
                        s.insert(x);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_erase_random_10k(c: &mut Criterion) {
    c.bench_function("chained::erase_random_10k_of_110k", |b| {
        b.iter_batched(
            || {
                let (s, keys) = filled(5, 110_000);
                // Precompute 10k unique indices via LCG
                let n = keys.len();
                let mut sel = std::collections::HashSet::with_capacity(10_000);
                let mut st = 0x9e3779b97f4a7c15u64;
                while sel.len() < 10_000 {
                    st = st.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                    sel.insert((st as usize) % n);
                }
                let to_erase: Vec<String> = sel.into_iter().map(|i| keys[i].clone()).collect();
                (s, to_erase)
            },
            |(mut s, to_erase)| {
                for k in &to_erase {
                    s.erase(k.as_str());
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit_10k(c: &mut Criterion) {
    c.bench_function("chained::find_hit_10k_on_100k", |b| {
        let (s, keys) = filled(7, 100_000);
        // Precompute 10k random query keys using LCG
        let n = keys.len();
        let mut st = 0x9e3779b97f4a7c15u64;
        let queries: Vec<String> = (0..10_000)
            .map(|_| {
                st = st.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                keys[(st as usize) % n].clone()
            })
            .collect();
        b.iter(|| {
            for k in &queries {
                black_box(s.find(k.as_str()));
            }
        })
    });
}

fn bench_find_miss_10k(c: &mut Criterion) {
    c.bench_function("chained::find_miss_10k_on_100k", |b| {
        let (s, _) = filled(11, 100_000);
        let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
        b.iter(|| {
            for k in &misses {
                black_box(s.contains(k.as_str()));
            }
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    let (s, _) = filled(999, 100_000);
    c.bench_function("chained::iter_all_100k", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for k in s.iter() {
                total = total.wrapping_add(k.len());
            }
            black_box(total)
        })
    });

    c.bench_function("chained::cursor_walk_100k", |b| {
        b.iter(|| {
            let mut n = 0usize;
            let mut cur = s.begin();
            while !cur.is_end() {
                n += 1;
                cur = s.advance(cur);
            }
            black_box(n)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_100k,
              bench_insert_reserved_100k,
              bench_insert_by_load_factor
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_erase_random_10k,
              bench_find_hit_10k,
              bench_find_miss_10k,
              bench_iterate
}
criterion_main!(benches_insert, benches_ops);
