use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordered_hash_tree::OrderedMap;
use std::collections::{BTreeMap, HashMap};

const N: usize = 10_000;

// Sorted input degenerates the tree into a list, so each insert is O(n).
const SORTED_N: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(SORTED_N);
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("OrderedMap", SORTED_N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", SORTED_N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.entry(k).or_insert(k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.entry(k).or_insert(k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for &k in &keys {
                map.entry(k).or_insert(k);
            }
            map
        });
    });

    group.finish();
}

// ─── Contains ───────────────────────────────────────────────────────────────

fn bench_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let oh_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let hs_map: HashMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| keys.iter().filter(|k| oh_map.contains_key(k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| keys.iter().filter(|k| bt_map.contains_key(k)).count());
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| keys.iter().filter(|k| hs_map.contains_key(k)).count());
    });

    group.finish();
}

fn bench_contains_degenerate(c: &mut Criterion) {
    let keys = ordered_keys(SORTED_N);
    let oh_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("contains_degenerate");

    group.bench_function(BenchmarkId::new("OrderedMap", SORTED_N), |b| {
        b.iter(|| keys.iter().filter(|k| oh_map.contains_key(k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", SORTED_N), |b| {
        b.iter(|| keys.iter().filter(|k| bt_map.contains_key(k)).count());
    });

    group.finish();
}

// ─── Erase ──────────────────────────────────────────────────────────────────

fn bench_erase_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("erase_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.erase(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_erase_ordered(c: &mut Criterion) {
    let keys = ordered_keys(SORTED_N);
    let mut group = c.benchmark_group("erase_ordered");

    group.bench_function(BenchmarkId::new("OrderedMap", SORTED_N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.erase(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", SORTED_N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Ordered walk ───────────────────────────────────────────────────────────

fn bench_for_each_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let oh_map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("for_each_random");

    group.bench_function(BenchmarkId::new("OrderedMap::for_each", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            oh_map.for_each(|_, &v| sum = sum.wrapping_add(v));
            sum
        });
    });

    group.bench_function(BenchmarkId::new("OrderedMap::iter", N), |b| {
        b.iter(|| oh_map.iter().fold(0i64, |sum, (_, &v)| sum.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().fold(0i64, |sum, (_, &v)| sum.wrapping_add(v)));
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_ordered, bench_insert_random);

criterion_group!(contains_benches, bench_contains_random, bench_contains_degenerate);

criterion_group!(erase_benches, bench_erase_random, bench_erase_ordered);

criterion_group!(walk_benches, bench_for_each_random);

criterion_main!(insert_benches, contains_benches, erase_benches, walk_benches);
