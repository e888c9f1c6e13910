use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use tenweek::{build_grid, render_pages_read, render_workouts, PageConfig};

fn bench_build_grid(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
    c.bench_function("build_grid", |b| b.iter(|| build_grid(start).unwrap()));
}

fn bench_render(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let config = PageConfig::default();
    let labels = ["4 Miles", "Weights", "Rest", "4 Miles", "Weights", "Rest", "Rest"];

    c.bench_function("render_pages_read", |b| {
        b.iter(|| render_pages_read(start, 100, &config).unwrap())
    });

    c.bench_function("render_workouts_to_pdf", |b| {
        b.iter(|| render_workouts(start, &labels, &config).unwrap().to_pdf())
    });
}

criterion_group!(benches, bench_build_grid, bench_render);
criterion_main!(benches);
