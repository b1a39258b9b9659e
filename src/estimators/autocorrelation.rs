//! Autocorrelation frequency estimation
//!
//! Finds the waveform period as the lag of the strongest autocorrelation
//! peak past the zero-lag descent.
//!
//! # Algorithm
//!
//! 1. Subtract the window mean.
//! 2. Compute the autocorrelation over all non-negative lags:
//!    `acf[lag] = sum(x[i] * x[i + lag])`.
//! 3. Walk the first discrete differences of the lag sequence to the first
//!    index where the difference turns positive, i.e. the first point that
//!    leaves the zero-lag peak's descent. A sequence that never turns
//!    upward carries no periodicity.
//! 4. From that index onward, take the lag of maximum autocorrelation and
//!    return `sample_rate / lag`.
//!
//! The direct O(n * lags) evaluation keeps the lag values exact, which the
//! difference walk in step 3 depends on: the "never turns upward" case must
//! see true zeros and true monotone descents, not transform round-off.

use super::remove_mean;

/// Estimate the dominant frequency from the autocorrelation peak
///
/// Returns 0.0 when the autocorrelation never turns upward after the
/// zero-lag peak, or when the peak search lands back on lag 0.
///
/// Callers guarantee `chunk.len() >= 2` (see [`super::Algorithm::estimate`]).
pub(crate) fn estimate(chunk: &[f32], sample_rate: u32) -> f32 {
    let centered = remove_mean(chunk);
    let acf = autocorrelate(&centered);

    // First index where the first difference turns positive.
    let start = match acf
        .windows(2)
        .position(|pair| pair[1] - pair[0] > 0.0)
    {
        Some(index) => index,
        None => return 0.0,
    };

    // Lag of maximum autocorrelation from the upturn to the end; the first
    // occurrence wins on ties.
    let mut peak_lag = start;
    let mut peak_value = acf[start];
    for (lag, &value) in acf.iter().enumerate().skip(start + 1) {
        if value > peak_value {
            peak_value = value;
            peak_lag = lag;
        }
    }

    if peak_lag == 0 {
        return 0.0;
    }
    sample_rate as f32 / peak_lag as f32
}

/// Autocorrelation over all non-negative lags, zero-lag first
fn autocorrelate(signal: &[f32]) -> Vec<f32> {
    let n = signal.len();
    (0..n)
        .map(|lag| {
            signal[..n - lag]
                .iter()
                .zip(&signal[lag..])
                .map(|(a, b)| a * b)
                .sum()
        })
        .collect()
}
