use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;
use strqueue::{SortStrategy, StringQueue, cmp_ignore_ascii_case};

fn words(n: usize) -> Vec<String> {
    let mut state: u32 = 0x9E37_79B9;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            format!("{:08x}", state)
        })
        .collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let n = 256;
    let input = words(n);
    let mut group = c.benchmark_group("VecDeque<String> vs StringQueue (InsertTail/RemoveHead 256)");

    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::new();
            for s in &input {
                d.push_back(black_box(s.clone()));
            }
            while let Some(s) = d.pop_front() {
                black_box(s);
            }
        })
    });

    group.bench_function("StringQueue<usize>", |b| {
        b.iter(|| {
            let mut q: StringQueue = StringQueue::new();
            for s in &input {
                q.insert_tail(black_box(s)).unwrap();
            }
            while let Ok(s) = q.remove_head() {
                black_box(s);
            }
        })
    });

    group.bench_function("StringQueue<u16>", |b| {
        b.iter(|| {
            let mut q: StringQueue<u16> = StringQueue::new();
            for s in &input {
                q.insert_tail(black_box(s)).unwrap();
            }
            while let Ok(s) = q.remove_head() {
                black_box(s);
            }
        })
    });
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let n = 4096;
    let input = words(n);
    let mut group = c.benchmark_group("Sort 4096 strings (case-insensitive)");

    group.bench_function("Vec::sort_by", |b| {
        b.iter_batched(
            || input.clone(),
            |mut v| {
                v.sort_by(|a, b| cmp_ignore_ascii_case(a, b));
                v
            },
            BatchSize::SmallInput,
        )
    });

    for strategy in [SortStrategy::Recursive, SortStrategy::BottomUp] {
        group.bench_function(format!("StringQueue {:?}", strategy), |b| {
            b.iter_batched(
                || {
                    let mut q: StringQueue = StringQueue::new();
                    for s in &input {
                        q.insert_tail(s).unwrap();
                    }
                    q
                },
                |mut q| {
                    q.sort_with(strategy);
                    q
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut q: StringQueue = StringQueue::new();
    for s in &words(4096) {
        q.insert_tail(s).unwrap();
    }
    c.bench_function("StringQueue reverse 4096", |b| b.iter(|| black_box(&mut q).reverse()));
}

criterion_group!(benches, bench_push_pop, bench_sort, bench_reverse);
criterion_main!(benches);
