use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::collections::LinkedList;

use forward_list::ForwardList;

const LEN: usize = 10_000;

fn criterion_benchmark(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("push_front");
        group.throughput(Throughput::Elements(LEN as u64));

        group.bench_function("forward_list", move |b| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for i in 0..LEN {
                    list.push_front(i);
                }
                list.len()
            });
        });

        group.bench_function("std_linked_list", move |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..LEN {
                    list.push_front(i);
                }
                list.len()
            });
        });
    }

    {
        let mut group = c.benchmark_group("iterate_sum");
        group.throughput(Throughput::Elements(LEN as u64));

        group.bench_function("forward_list", move |b| {
            let list: ForwardList<usize> = (0..LEN).collect();
            b.iter(|| list.iter().sum::<usize>());
        });

        group.bench_function("std_linked_list", move |b| {
            let list: LinkedList<usize> = (0..LEN).collect();
            b.iter(|| list.iter().sum::<usize>());
        });
    }

    {
        let mut group = c.benchmark_group("clone");
        group.throughput(Throughput::Elements(LEN as u64));

        group.bench_function("forward_list", move |b| {
            let list: ForwardList<usize> = (0..LEN).collect();
            b.iter(|| list.clone().len());
        });

        group.bench_function("std_linked_list", move |b| {
            let list: LinkedList<usize> = (0..LEN).collect();
            b.iter(|| list.clone().len());
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
