use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hwe::critical_values::CriticalValueTable;
use hwe::expansion::squared_expansion;
use hwe::testing::{chi_squared_test, reject_null_hypothesis};
use hwe::{Allele, Gene, DEFAULT_SIGNIFICANCE_LEVEL};
use std::fs;

pub fn hwe_benchmarks(c: &mut Criterion) {
    let frequencies = [0.954, 0.046];
    c.bench_function("squared_expansion", |b| {
        b.iter(|| squared_expansion(black_box(&frequencies)))
    });

    c.bench_function("gene_construction", |b| {
        b.iter(|| {
            Gene::new(
                [
                    Allele::new(0, "A", 1, black_box(0.954)),
                    Allele::new(1, "a", 0, black_box(0.046)),
                ],
                1612,
            )
        })
    });

    let gene = Gene::new(
        [Allele::new(0, "A", 1, 0.954), Allele::new(1, "a", 0, 0.046)],
        1612,
    )
    .unwrap();
    let expected = gene.expected_counts();
    let observed = [1469.0, 138.0, 5.0];
    c.bench_function("chi_squared_test", |b| {
        b.iter(|| chi_squared_test(black_box(&expected), black_box(&observed)))
    });

    let file = fs::read_to_string("resources/chi_square_critical_values.txt")
        .expect("Something went wrong reading the file");
    let table = CriticalValueTable::parse(&file).unwrap();
    c.bench_function("reject_null_hypothesis", |b| {
        b.iter(|| {
            reject_null_hypothesis(
                black_box(&expected),
                black_box(&observed),
                1,
                DEFAULT_SIGNIFICANCE_LEVEL,
                &table,
            )
        })
    });
}

criterion_group!(benches, hwe_benchmarks);
criterion_main!(benches);
