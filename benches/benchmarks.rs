use criterion::{black_box, criterion_group, criterion_main, Criterion};
use firord::{firdes, spectrum, windows};
use rand::Rng;

fn random_signal(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()
}

fn bench_firpmord(c: &mut Criterion) {
    let mut group = c.benchmark_group("firpmord");
    group.bench_function("lowpass", |b| {
        b.iter(|| {
            firdes::firpmord(
                black_box(&[0.18, 0.22]),
                black_box(&[1.0, 0.0]),
                black_box(&[0.01, 0.001]),
                black_box(1.0),
            )
        })
    });
    group.bench_function("multiband", |b| {
        b.iter(|| {
            firdes::firpmord(
                black_box(&[0.1, 0.12, 0.2, 0.22, 0.3, 0.33]),
                black_box(&[0.0, 1.0, 0.0, 1.0]),
                black_box(&[0.001, 0.05, 0.0001, 0.01]),
                black_box(1.0),
            )
        })
    });
    group.finish();
}

fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("windows");
    for len in [64, 1024] {
        group.bench_function(format!("hamming_{len}"), |b| {
            b.iter(|| windows::hamming(black_box(len)))
        });
        group.bench_function(format!("kaiser_{len}"), |b| {
            b.iter(|| windows::kaiser(black_box(len), black_box(8.6)))
        });
    }
    group.finish();
}

fn bench_dtft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtft");
    for (len, m) in [(64, 1024), (1000, 8192)] {
        let x = random_signal(len);
        group.bench_function(format!("dtft_{len}_{m}"), |b| {
            b.iter(|| spectrum::dtft_real(black_box(&x), black_box(m)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_firpmord, bench_windows, bench_dtft);
criterion_main!(benches);
