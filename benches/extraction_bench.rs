//! Performance benchmarks for frequency extraction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domfreq::{extract_frequencies, Algorithm, ExtractionConfig};

fn bench_extract_frequencies(c: &mut Criterion) {
    // Synthetic audio (30 seconds at 44.1kHz)
    let samples: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.5)
        .collect();

    for algorithm in [
        Algorithm::SpectralPeak,
        Algorithm::Autocorrelation,
        Algorithm::ZeroCrossing,
        Algorithm::Cepstral,
    ] {
        let config = ExtractionConfig {
            samples_per_group: 1024,
            algorithm,
        };
        c.bench_function(&format!("extract_30s_{}", algorithm.name()), |b| {
            b.iter(|| {
                let _ = extract_frequencies(black_box(&samples), black_box(44100), &config);
            });
        });
    }
}

criterion_group!(benches, bench_extract_frequencies);
criterion_main!(benches);
