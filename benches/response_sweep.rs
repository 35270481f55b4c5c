use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rc_response::filter::{RcFilter, ResponseTap};
use rc_response::sweep::sweep_response;

fn build_reference_filter() -> RcFilter {
    RcFilter::new(1_000.0, 1.0e-6).expect("positive parts")
}

fn bench_response_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_sweep");
    let freqs: Vec<f64> = (0..10_000).map(|i| 0.1 + i as f64 * 10.0).collect();

    group.bench_function(BenchmarkId::new("rc_highpass", freqs.len()), |b| {
        b.iter_batched(
            build_reference_filter,
            |filter| {
                let _ = sweep_response(&filter, ResponseTap::HighPass, freqs.iter().copied());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_response_sweep);
criterion_main!(benches);
