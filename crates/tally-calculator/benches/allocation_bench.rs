use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use tally_calculator::{AmountParser, allocate, suggest};
use tally_types::AllocationRequest;

fn generate_request(count: usize) -> AllocationRequest {
    let amounts: Vec<f64> = (0..count).map(|i| 1_000.0 + (i % 97) as f64 * 125.0).collect();
    AllocationRequest::from_amounts(&amounts, 19_000.0, 49_000.0)
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");
    group.measurement_time(Duration::from_secs(5));

    for size in [3, 100, 10_000].iter() {
        let request = generate_request(*size);
        group.bench_with_input(BenchmarkId::new("allocate", size), &request, |b, request| {
            b.iter(|| black_box(allocate(black_box(request)).unwrap()));
        });
    }
    group.finish();
}

fn bench_amount_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_parsing");
    let parser = AmountParser::default();

    for (name, input) in [
        ("plain", "1.250.000"),
        ("expression", "(120+80)*3÷4"),
        ("invalid", "(3+4"),
    ] {
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, input| {
            b.iter(|| black_box(parser.parse(black_box(input))));
        });
    }
    group.finish();
}

fn bench_suggestions(c: &mut Criterion) {
    c.bench_function("suggest", |b| b.iter(|| black_box(suggest(black_box(250.0)))));
}

criterion_group!(benches, bench_allocation, bench_amount_parsing, bench_suggestions);
criterion_main!(benches);
