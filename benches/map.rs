use chunked_seq::SortedMap;
use criterion::{criterion_group, criterion_main, Criterion};
use nanoid::nanoid;

fn insert(c: &mut Criterion) {
    c.bench_function("map insert 10k random keys", |b| {
        let keys: Vec<String> = (0..10_000).map(|_| nanoid!()).collect();

        b.iter(|| {
            let mut map = SortedMap::<String, u64>::new();
            for (value, key) in keys.iter().enumerate() {
                map.insert(key.clone(), value as u64);
            }
            map
        });
    });
}

fn get(c: &mut Criterion) {
    c.bench_function("map get", |b| {
        let keys: Vec<String> = (0..10_000).map(|_| nanoid!()).collect();
        let map: SortedMap<String, u64> = keys
            .iter()
            .enumerate()
            .map(|(value, key)| (key.clone(), value as u64))
            .collect();
        let mut index = 1usize;

        b.iter(|| {
            index = (index * 31) % keys.len();
            map.get(&keys[index])
        });
    });
}

criterion_group!(benches, insert, get);
criterion_main!(benches);
