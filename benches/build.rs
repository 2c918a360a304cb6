use criterion::*;
use heap_queue::{BuildStrategy, NaturalOrder, PriorityQueue, QueueConfig};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

fn values(len: usize) -> Vec<u64> {
    let mut rng = Pcg64::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen()).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    for len in [100, 10_000, 1_000_000] {
        let input = values(len);
        for build in [BuildStrategy::Sequential, BuildStrategy::Heapify] {
            let config = QueueConfig {
                initial_capacity: 0,
                build,
            };
            c.bench_with_input(
                BenchmarkId::new(format!("build_{build}"), len),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |input| PriorityQueue::from_config(&config, input, NaturalOrder),
                        BatchSize::LargeInput,
                    )
                },
            );
        }

        let queue = PriorityQueue::from_vec(input);
        c.bench_with_input(BenchmarkId::new("iter_sorted", len), &queue, |b, queue| {
            b.iter(|| queue.iter().fold(0u64, |acc, v| acc.wrapping_add(v)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
