//! Spectral-peak frequency estimation
//!
//! Picks the strongest bin of the magnitude spectrum. Only the
//! non-negative-frequency half of the spectrum is searched; bin k maps to
//! k * sample_rate / chunk_len Hz.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::remove_mean;

/// Estimate the dominant frequency as the peak of the magnitude spectrum
///
/// The window mean is subtracted first so a DC offset cannot masquerade as
/// the strongest component. On exact magnitude ties the lowest-frequency
/// bin wins.
///
/// Callers guarantee `chunk.len() >= 2` (see [`super::Algorithm::estimate`]).
pub(crate) fn estimate(chunk: &[f32], sample_rate: u32) -> f32 {
    let centered = remove_mean(chunk);
    let n = centered.len();

    let mut spectrum: Vec<Complex<f32>> =
        centered.iter().map(|&x| Complex::new(x, 0.0)).collect();
    FftPlanner::new().plan_fft_forward(n).process(&mut spectrum);

    // Non-negative frequency bins only: k = 0 ..= floor(n / 2)
    let mut peak_bin = 0;
    let mut peak_magnitude = 0.0f32;
    for (bin, value) in spectrum.iter().take(n / 2 + 1).enumerate() {
        let magnitude = value.norm();
        if magnitude > peak_magnitude {
            peak_magnitude = magnitude;
            peak_bin = bin;
        }
    }

    peak_bin as f32 * sample_rate as f32 / n as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_pure_tone_within_one_bin() {
        // Bin spacing is 44100 / 1024 ~ 43.07 Hz, so the estimate must land
        // within half a bin of the true frequency.
        let chunk = sine(1000.0, 44100, 1024);
        let freq = estimate(&chunk, 44100);
        assert!(
            (freq - 1000.0).abs() <= 21.6,
            "expected ~1000 Hz, got {:.2}",
            freq
        );
    }

    #[test]
    fn test_dc_offset_does_not_win() {
        let chunk: Vec<f32> = sine(1000.0, 44100, 1024)
            .iter()
            .map(|x| x * 0.1 + 0.9)
            .collect();
        let freq = estimate(&chunk, 44100);
        assert!(
            (freq - 1000.0).abs() <= 21.6,
            "DC offset skewed the estimate to {:.2}",
            freq
        );
    }

    #[test]
    fn test_stronger_tone_wins() {
        let weak = sine(500.0, 44100, 1024);
        let strong = sine(2000.0, 44100, 1024);
        let chunk: Vec<f32> = weak
            .iter()
            .zip(&strong)
            .map(|(a, b)| 0.2 * a + 0.8 * b)
            .collect();
        let freq = estimate(&chunk, 44100);
        assert!(
            (freq - 2000.0).abs() <= 21.6,
            "expected ~2000 Hz, got {:.2}",
            freq
        );
    }

    #[test]
    fn test_silence_returns_sentinel() {
        assert_eq!(estimate(&vec![0.0; 512], 44100), 0.0);
    }
}
