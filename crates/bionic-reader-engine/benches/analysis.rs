use bionic_reader_engine::analyze;
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for sections in [10, 100, 1000] {
        let content = common::generate_document(sections);
        group.bench_function(format!("analyze_{sections}_sections"), |b| {
            b.iter(|| analyze(std::hint::black_box(&content)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
