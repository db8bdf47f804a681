use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use glimpse_core::{detect_delimiter, ingest};

fn gen_csv(n: usize) -> String {
    let mut s = String::with_capacity(n * 40);
    s.push_str("date,region,\"label, quoted\",value\n");
    for i in 0..n {
        let day = 1 + (i % 28);
        let region = ["north", "south", "east", "west"][i % 4];
        // simple waveform with drift
        let v = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        s.push_str(&format!("2024-02-{day:02},{region},\"row {i}, \"\"q\"\"\",{v:.4}\n"));
    }
    s
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_csv");
    for &n in &[10_000usize, 50_000usize] {
        let text = gen_csv(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("rows{n}")), &text, |b, t| {
            b.iter(|| black_box(ingest(t, "bench.csv").expect("csv ingests")));
        });
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let text = gen_csv(1_000);
    c.bench_function("detect_delimiter", |b| b.iter(|| black_box(detect_delimiter(&text))));
}

criterion_group!(benches, bench_ingest, bench_detect);
criterion_main!(benches);
