use coinchange::{dynamic, greedy, Denominations};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn bench_by_amount(c: &mut Criterion) {
    let coins = Denominations::default();
    let mut group = c.benchmark_group("coin_change");

    for amount in [10, 100, 500, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| greedy::make_change(black_box(amount), &coins))
        });
        group.bench_with_input(
            BenchmarkId::new("dynamic", amount),
            &amount,
            |b, &amount| b.iter(|| dynamic::make_change(black_box(amount), &coins)),
        );
    }

    group.finish();
}

fn bench_random_amounts(c: &mut Criterion) {
    let coins = Denominations::default();
    let mut rng = StdRng::seed_from_u64(42);
    let amounts: Vec<usize> = (0..100).map(|_| rng.gen_range(1..=500)).collect();

    c.bench_function("greedy_random_100", |b| {
        b.iter(|| {
            for &amount in &amounts {
                let _ = greedy::make_change(black_box(amount), &coins);
            }
        })
    });

    c.bench_function("dynamic_random_100", |b| {
        b.iter(|| {
            for &amount in &amounts {
                let _ = dynamic::make_change(black_box(amount), &coins);
            }
        })
    });
}

fn bench_count_ways(c: &mut Criterion) {
    let coins = Denominations::default();
    c.bench_function("count_ways_500", |b| {
        b.iter(|| dynamic::count_ways(black_box(500), &coins))
    });
}

criterion_group!(benches, bench_by_amount, bench_random_amounts, bench_count_ways);
criterion_main!(benches);
