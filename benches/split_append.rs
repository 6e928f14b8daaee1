use chunked_seq::Deque;
use criterion::{criterion_group, criterion_main, Criterion};

fn split_and_append(c: &mut Criterion) {
    c.bench_function("split_off + append, 100k elements", |b| {
        let template: Deque<u64> = (0..100_000).collect();
        let mut at = 1usize;

        b.iter(|| {
            let mut deque = template.clone();
            at = (at * 31) % 100_000;
            let mut tail = deque.split_off(at).expect("split position in range");
            deque.append(&mut tail);
            deque
        });
    });
}

fn random_access(c: &mut Criterion) {
    c.bench_function("get, 100k elements", |b| {
        let deque: Deque<u64> = (0..100_000).collect();
        let mut index = 1usize;

        b.iter(|| {
            index = (index * 31) % 100_000;
            deque.get(index)
        });
    });
}

fn segment_sum(c: &mut Criterion) {
    c.bench_function("segment-wise sum, 100k elements", |b| {
        let deque: Deque<u64> = (0..100_000).collect();

        b.iter(|| {
            let mut total = 0u64;
            deque.for_each_segment(|run| total += run.iter().sum::<u64>());
            total
        });
    });
}

criterion_group!(benches, split_and_append, random_access, segment_sum);
criterion_main!(benches);
