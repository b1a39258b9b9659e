//! Zero-crossing-rate frequency estimation
//!
//! A coarse periodicity proxy: crossings are sample positions where the
//! sign of consecutive samples differs, and the estimate is the sample
//! rate divided by the mean spacing between consecutive crossings. Note
//! that a sign-alternating waveform crosses zero twice per cycle, so the
//! reading tracks the crossing rate rather than the waveform fundamental.

/// Estimate the dominant frequency from the mean zero-crossing spacing
///
/// Returns 0.0 when fewer than 2 crossings exist. The raw samples are used
/// as-is; an asymmetric signal that never changes sign simply reports no
/// periodicity.
///
/// Callers guarantee `chunk.len() >= 2` (see [`super::Algorithm::estimate`]).
pub(crate) fn estimate(chunk: &[f32], sample_rate: u32) -> f32 {
    let crossings: Vec<usize> = chunk
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| sign(pair[0]) != sign(pair[1]))
        .map(|(i, _)| i)
        .collect();

    if crossings.len() < 2 {
        return 0.0;
    }

    let spacing_total: usize = crossings.windows(2).map(|pair| pair[1] - pair[0]).sum();
    let mean_spacing = spacing_total as f32 / (crossings.len() - 1) as f32;

    if mean_spacing == 0.0 {
        return 0.0;
    }
    sample_rate as f32 / mean_spacing
}

/// Three-valued sign; exact zero is its own class
fn sign(x: f32) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_blocks_exact_spacing() {
        // +1 for 10 samples, -1 for 10 samples, repeated: sign changes every
        // 10 samples exactly, so the estimate is sample_rate / 10.
        let chunk: Vec<f32> = (0..400)
            .map(|i| if (i / 10) % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let freq = estimate(&chunk, 44100);
        assert!(
            (freq - 4410.0).abs() < 0.01,
            "expected 4410 Hz, got {:.4}",
            freq
        );
    }

    #[test]
    fn test_sine_reads_crossing_rate() {
        // A 1000 Hz sine crosses zero every half period (~22.05 samples),
        // so the crossing-rate reading is ~2000 Hz.
        let chunk: Vec<f32> = (0..1024)
            .map(|i| (2.0 * std::f32::consts::PI * 1000.0 * i as f32 / 44100.0).sin())
            .collect();
        let freq = estimate(&chunk, 44100);
        assert!(
            (freq - 2000.0).abs() < 50.0,
            "expected ~2000 Hz, got {:.2}",
            freq
        );
    }

    #[test]
    fn test_single_crossing_returns_sentinel() {
        let chunk = [1.0, 1.0, -1.0, -1.0];
        assert_eq!(estimate(&chunk, 44100), 0.0);
    }

    #[test]
    fn test_positive_signal_returns_sentinel() {
        let chunk = [0.5, 0.7, 0.6, 0.8, 0.5];
        assert_eq!(estimate(&chunk, 44100), 0.0);
    }

    #[test]
    fn test_silence_returns_sentinel() {
        assert_eq!(estimate(&[0.0; 64], 44100), 0.0);
    }
}
