use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use chaintable::strategy::{int_eq, int_hash};
use chaintable::{HashTable, Value};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> Value {
    Value::Int((n % 100_000) as i64)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chaintable_insert_10k_range_1k", |b| {
        b.iter_batched(
            || HashTable::new(1024, int_hash),
            |mut t| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    t.insert(key(x), Value::Uint(i as u64), int_eq);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lookup_hit(c: &mut Criterion) {
    c.bench_function("chaintable_lookup_hit", |b| {
        let mut t = HashTable::new(1024, int_hash);
        let keys: Vec<Value> = lcg(7).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k.clone(), Value::Uint(i as u64), int_eq);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.lookup(k, int_eq));
        })
    });
}

fn bench_lookup_miss(c: &mut Criterion) {
    c.bench_function("chaintable_lookup_miss", |b| {
        let mut t = HashTable::new(1024, int_hash);
        for (i, x) in lcg(11).take(10_000).enumerate() {
            t.insert(key(x), Value::Uint(i as u64), int_eq);
        }
        // Keys from a disjoint region of the key space.
        let miss = Value::Int(200_000);
        b.iter(|| black_box(t.lookup(&miss, int_eq)))
    });
}

fn bench_merge(c: &mut Criterion) {
    c.bench_function("chaintable_merge_2x5k", |b| {
        b.iter_batched(
            || {
                let mut a = HashTable::new(512, int_hash);
                let mut bt = HashTable::new(512, int_hash);
                for (i, x) in lcg(3).take(5_000).enumerate() {
                    a.insert(key(x), Value::Uint(i as u64), int_eq);
                }
                for (i, x) in lcg(5).take(5_000).enumerate() {
                    bt.insert(key(x), Value::Uint(i as u64), int_eq);
                }
                (a, bt)
            },
            |(mut a, mut bt)| {
                a.merge(&mut bt, int_eq).unwrap();
                black_box(a)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_lookup_hit,
    bench_lookup_miss,
    bench_merge
);
criterion_main!(benches);
