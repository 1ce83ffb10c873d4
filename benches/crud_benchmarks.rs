use avl_map::{AvlTreeMap, FnComparator};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Deterministic LCG so runs are comparable.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn missing_keys(n: usize) -> Vec<i64> {
    (n as i64..2 * n as i64).collect()
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::new();
            for &k in keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "map_insert_ordered", &ordered_keys(N));
}

fn bench_map_insert_reverse(c: &mut Criterion) {
    let mut keys = ordered_keys(N);
    keys.reverse();
    bench_insert(c, "map_insert_reverse", &keys);
}

fn bench_map_insert_random(c: &mut Criterion) {
    bench_insert(c, "map_insert_random", &random_keys(N));
}

fn bench_map_update_existing(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("map_update_existing");

    group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, 0i64)).collect::<AvlTreeMap<_, _>>(),
            |mut map| {
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, 0i64)).collect::<BTreeMap<_, _>>(),
            |mut map| {
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_map_insert_comparator(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("map_insert_comparator");

    group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
        b.iter(|| {
            let mut map = AvlTreeMap::with_comparator(FnComparator(|a: &i64, b: &i64| b.cmp(a)));
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Lookup Benchmarks ──────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion, name: &str, keys: &[i64], probes: &[i64]) {
    let avl_map: AvlTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in probes {
                if let Some(&v) = avl_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for k in probes {
                if let Some(&v) = bt_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_map_get_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N);
    bench_get(c, "map_get_ordered", &keys, &keys);
}

fn bench_map_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    bench_get(c, "map_get_random", &keys, &keys);
}

fn bench_map_get_missing(c: &mut Criterion) {
    bench_get(c, "map_get_missing", &ordered_keys(N), &missing_keys(N));
}

// ─── Iteration Benchmarks ───────────────────────────────────────────────────

fn bench_map_iter(c: &mut Criterion) {
    let keys = random_keys(N);
    let avl_map: AvlTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_iter");

    group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
        b.iter(|| avl_map.iter().fold(0i64, |sum, (_, &v)| sum.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().fold(0i64, |sum, (_, &v)| sum.wrapping_add(v)));
    });

    group.finish();
}

fn bench_map_iter_rev(c: &mut Criterion) {
    let keys = random_keys(N);
    let avl_map: AvlTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_iter_rev");

    group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
        b.iter(|| avl_map.keys().rev().fold(0i64, |sum, &k| sum.wrapping_add(k)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.keys().rev().fold(0i64, |sum, &k| sum.wrapping_add(k)));
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(
    map_insert_benches,
    bench_map_insert_ordered,
    bench_map_insert_reverse,
    bench_map_insert_random,
    bench_map_update_existing,
    bench_map_insert_comparator,
);

criterion_group!(map_get_benches, bench_map_get_ordered, bench_map_get_random, bench_map_get_missing,);

criterion_group!(map_iter_benches, bench_map_iter, bench_map_iter_rev,);

criterion_main!(map_insert_benches, map_get_benches, map_iter_benches,);
