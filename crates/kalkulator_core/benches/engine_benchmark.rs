//! Benchmark for engine transitions.
//!
//! Run with: cargo bench --package kalkulator_core --bench engine_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kalkulator_core::{number, Digit, Engine, Operator, Precision, ScientificFn};

fn benchmark_chained_calculation(c: &mut Criterion) {
    let digits: Vec<Digit> = (0..10u8).filter_map(Digit::new).collect();

    c.bench_function("chain_20_operations", |b| {
        b.iter(|| {
            let mut engine = Engine::with_precision(Precision::Four);
            for (i, op) in Operator::ALL.iter().cycle().take(20).enumerate() {
                engine.append_digit(digits[i % digits.len()]);
                engine.append_decimal();
                engine.append_digit(digits[(i + 3) % digits.len()]);
                engine.choose_operator(*op);
            }
            engine.append_digit(digits[1]);
            black_box(engine.calculate())
        });
    });
}

fn benchmark_scientific(c: &mut Criterion) {
    c.bench_function("scientific_functions", |b| {
        let mut engine = Engine::with_precision(Precision::Six);
        b.iter(|| {
            engine.clear();
            engine.append_digit(Digit::new(2).unwrap());
            for function in ScientificFn::ALL {
                engine.apply_function(black_box(function));
            }
            black_box(engine.display().len())
        });
    });
}

fn benchmark_parse_format(c: &mut Criterion) {
    let inputs = ["0", "12.", "3.14159", "-0.001", "1e21", "NaN5", "  42abc"];

    c.bench_function("parse_and_format", |b| {
        b.iter(|| {
            for input in &inputs {
                let value = number::parse(black_box(input));
                black_box(number::to_fixed(value, 4));
                black_box(number::format(value));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_chained_calculation,
    benchmark_scientific,
    benchmark_parse_format
);
criterion_main!(benches);
