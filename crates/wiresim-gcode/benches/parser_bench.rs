use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wiresim_gcode::parse_program;

fn synthetic_program(lines: usize) -> String {
    let mut text = String::from("; synthetic benchmark program\nG90\n");
    for i in 0..lines {
        match i % 4 {
            0 => text.push_str(&format!("G01 X{} Y{}\n", i % 100, (i * 3) % 100)),
            1 => text.push_str(&format!("G02 X{} Y{} I5 J0\n", i % 100, i % 50)),
            2 => text.push_str("; toolpath section\n"),
            _ => text.push_str(&format!("G03 X{} Y0 I0 J{}\n", i % 80, i % 20)),
        }
    }
    text.push_str("M02\n");
    text
}

fn parser_benchmark(c: &mut Criterion) {
    let small = synthetic_program(100);
    let large = synthetic_program(10_000);

    c.bench_function("parse_100_lines", |b| {
        b.iter(|| parse_program(black_box(&small)))
    });
    c.bench_function("parse_10000_lines", |b| {
        b.iter(|| parse_program(black_box(&large)))
    });
}

criterion_group!(benches, parser_benchmark);
criterion_main!(benches);
