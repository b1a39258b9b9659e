//! Cepstral frequency estimation
//!
//! The cepstrum is the inverse transform of the log-magnitude spectrum;
//! a periodic waveform shows up as a peak at the quefrency (in samples)
//! of its period.
//!
//! # Algorithm
//!
//! 1. Subtract the window mean.
//! 2. Forward DFT, then `ln(|X| + 1e-10)`; the small constant keeps the
//!    logarithm finite at zero-magnitude bins.
//! 3. Inverse DFT of the log-magnitude sequence; the real part is the
//!    cepstrum.
//! 4. Skip the leading `floor(sample_rate / 1000)` quefrencies. These are
//!    dominated by spurious low-quefrency artifacts corresponding to
//!    frequencies above 1000 Hz.
//! 5. The remaining maximum sits at the period in samples: return
//!    `sample_rate / peak_quefrency`.
//!
//! Silent or constant windows have no spectral structure for the log to
//! expose; they are answered with the 0.0 sentinel before any transform
//! runs, as is a window too short to reach past the excluded quefrencies.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::remove_mean;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Estimate the dominant frequency from the cepstral peak
///
/// Callers guarantee `chunk.len() >= 2` (see [`super::Algorithm::estimate`]).
pub(crate) fn estimate(chunk: &[f32], sample_rate: u32) -> f32 {
    let centered = remove_mean(chunk);
    if !centered.iter().any(|&x| x.abs() > EPSILON) {
        return 0.0;
    }

    let n = centered.len();
    let mut planner = FftPlanner::new();

    let mut buffer: Vec<Complex<f32>> =
        centered.iter().map(|&x| Complex::new(x, 0.0)).collect();
    planner.plan_fft_forward(n).process(&mut buffer);

    for value in &mut buffer {
        *value = Complex::new((value.norm() + EPSILON).ln(), 0.0);
    }
    planner.plan_fft_inverse(n).process(&mut buffer);

    let scale = 1.0 / n as f32;
    let cepstrum: Vec<f32> = buffer.iter().map(|value| value.re * scale).collect();

    let min_quefrency = (sample_rate / 1000) as usize;
    if min_quefrency >= cepstrum.len() {
        return 0.0;
    }

    // Quefrency of maximum cepstral value past the excluded region; the
    // first occurrence wins on ties.
    let mut peak_quefrency = min_quefrency;
    let mut peak_value = cepstrum[min_quefrency];
    for (quefrency, &value) in cepstrum.iter().enumerate().skip(min_quefrency + 1) {
        if value > peak_value {
            peak_value = value;
            peak_quefrency = quefrency;
        }
    }

    if peak_quefrency == 0 {
        return 0.0;
    }
    sample_rate as f32 / peak_quefrency as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmonic_tone_period_recovered() {
        // Harmonic-rich waveform with a period of exactly 44 samples at
        // 44100 Hz, analyzed over 2 periods. The excluded region ends at
        // quefrency 44, exactly where the period peak sits.
        let period = 44.0f32;
        let chunk: Vec<f32> = (0..88)
            .map(|i| {
                (1..=21)
                    .map(|h| {
                        (2.0 * std::f32::consts::PI * h as f32 * i as f32 / period).sin()
                            / h as f32
                    })
                    .sum()
            })
            .collect();

        let freq = estimate(&chunk, 44100);
        let expected = 44100.0 / 44.0;
        assert!(
            (freq - expected).abs() < 0.01,
            "expected {:.2} Hz, got {:.4}",
            expected,
            freq
        );
    }

    #[test]
    fn test_silence_returns_sentinel() {
        assert_eq!(estimate(&[0.0; 128], 44100), 0.0);
    }

    #[test]
    fn test_constant_returns_sentinel() {
        assert_eq!(estimate(&[0.25; 128], 44100), 0.0);
    }

    #[test]
    fn test_window_shorter_than_excluded_region_returns_sentinel() {
        // floor(44100 / 1000) = 44 excluded quefrencies exhaust a
        // 32-sample cepstrum.
        let chunk: Vec<f32> = (0..32).map(|i| (i as f32 * 0.3).sin()).collect();
        assert_eq!(estimate(&chunk, 44100), 0.0);
    }

    #[test]
    fn test_low_rate_searches_from_quefrency_zero() {
        // At sample rates under 1000 Hz nothing is excluded; the estimator
        // must still return a finite, non-negative value.
        let chunk: Vec<f32> = (0..64)
            .map(|i| (2.0 * std::f32::consts::PI * i as f32 / 16.0).sin())
            .collect();
        let freq = estimate(&chunk, 800);
        assert!(freq.is_finite());
        assert!(freq >= 0.0);
    }
}
