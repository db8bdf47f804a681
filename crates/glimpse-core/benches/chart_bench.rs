use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use glimpse_core::{build_chart_data, classify_columns, compute_statistics, tokenize, ChartKind, Dataset};

fn gen_dataset(n: usize) -> Dataset {
    let mut s = String::from("t,category,value\n");
    for i in 0..n {
        let v = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        s.push_str(&format!("{i},c{},{v:.4}\n", i % 37));
    }
    tokenize(&s, ',')
}

fn bench_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chart_data");
    for &n in &[10_000usize, 50_000usize] {
        let ds = gen_dataset(n);
        let cls = classify_columns(&ds, None);
        let cases = [
            ("group_mean", ChartKind::Bar, "category"),
            ("histogram", ChartKind::Bar, "value"),
            ("line", ChartKind::Line, "t"),
        ];
        for (name, kind, x) in cases {
            group.bench_with_input(BenchmarkId::new(name, n), &x, |b, &x| {
                b.iter(|| black_box(build_chart_data(&ds, kind, Some(x), Some("value"), &cls.numeric, &cls.categorical)));
            });
        }
    }
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let ds = gen_dataset(50_000);
    let cls = classify_columns(&ds, None);
    c.bench_function("compute_statistics_50k", |b| {
        b.iter(|| black_box(compute_statistics(&ds, &cls.numeric, Some("value"))));
    });
}

criterion_group!(benches, bench_chart, bench_stats);
criterion_main!(benches);
