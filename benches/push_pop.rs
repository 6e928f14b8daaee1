use chunked_seq::Deque;
use criterion::{criterion_group, criterion_main, Criterion};

fn push_back(c: &mut Criterion) {
    c.bench_function("deque push_back 10k", |b| {
        b.iter(|| {
            let mut deque = Deque::<u64>::new();
            for x in 0..10_000 {
                deque.push_back(x);
            }
            deque
        });
    });
}

fn push_both_ends(c: &mut Criterion) {
    c.bench_function("deque push both ends 10k", |b| {
        b.iter(|| {
            let mut deque = Deque::<u64>::new();
            for x in 0..5_000 {
                deque.push_front(x);
                deque.push_back(x);
            }
            deque
        });
    });
}

fn drain_front(c: &mut Criterion) {
    c.bench_function("deque drain 10k from front", |b| {
        let template: Deque<u64> = (0..10_000).collect();

        b.iter(|| {
            let mut deque = template.clone();
            while deque.pop_front().is_some() {}
            deque
        });
    });
}

fn bulk_push(c: &mut Criterion) {
    c.bench_function("deque push_n_back 10k", |b| {
        let items: Vec<u64> = (0..10_000).collect();

        b.iter(|| {
            let mut deque = Deque::<u64>::new();
            deque.push_n_back(&items);
            deque
        });
    });
}

criterion_group!(benches, push_back, push_both_ends, drain_front, bulk_push);
criterion_main!(benches);
