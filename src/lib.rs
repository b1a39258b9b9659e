//! # domfreq
//!
//! A dominant-frequency extraction engine for offline audio analysis:
//! one frequency estimate per fixed-length window, using one of four
//! interchangeable estimation strategies.
//!
//! ## Features
//!
//! - **Spectral peak**: strongest bin of the magnitude spectrum
//! - **Autocorrelation**: periodicity peak past the zero-lag descent
//! - **Zero-crossing rate**: mean spacing between sign changes
//! - **Cepstral**: quefrency peak of the log-magnitude spectrum
//!
//! ## Quick Start
//!
//! ```
//! use domfreq::{extract_frequencies, ExtractionConfig};
//!
//! // Mono samples at 44.1 kHz (here: a 440 Hz tone)
//! let samples: Vec<f32> = (0..4096)
//!     .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 44100.0).sin())
//!     .collect();
//!
//! let config = ExtractionConfig::default();
//! let frequencies = extract_frequencies(&samples, 44100, &config)?;
//!
//! // One estimate per 1024-sample window, in time order
//! assert_eq!(frequencies.len(), 4);
//! # Ok::<(), domfreq::ExtractionError>(())
//! ```
//!
//! ## Architecture
//!
//! The extraction pipeline follows this flow:
//!
//! ```text
//! Audio Input → Windowing → Per-Window Estimation → Frequency Series → Output
//! ```
//!
//! Decoding audio containers ([`io`]), settings resolution ([`config`]),
//! file selection ([`select`]) and artifact writing ([`output`]) wrap the
//! pure core ([`segment`], [`estimators`]).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod estimators;
pub mod io;
pub mod output;
pub mod segment;
pub mod select;

// Re-export main types
pub use config::ExtractionConfig;
pub use error::ExtractionError;
pub use estimators::Algorithm;

/// Extract one dominant-frequency estimate per window of a signal
///
/// Partitions `samples` into sequential, non-overlapping windows of
/// `config.samples_per_group` samples (the last window may be shorter) and
/// applies the configured estimator to each, in time order. Two runs over
/// identical inputs produce identical output.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Validated extraction parameters
///
/// # Returns
///
/// One frequency estimate in Hz per window, in window (hence time) order;
/// 0.0 entries mean "no determinable periodicity". An empty signal yields
/// an empty series.
///
/// # Errors
///
/// Returns `ExtractionError` when the configuration or sample rate is
/// invalid. Estimation itself never fails: the estimators are total over
/// all window contents.
///
/// # Example
///
/// ```
/// use domfreq::{extract_frequencies, Algorithm, ExtractionConfig};
///
/// let samples = vec![0.0f32; 2048]; // silence
/// let config = ExtractionConfig {
///     samples_per_group: 1024,
///     algorithm: Algorithm::Autocorrelation,
/// };
/// let frequencies = extract_frequencies(&samples, 44100, &config)?;
/// assert_eq!(frequencies, vec![0.0, 0.0]);
/// # Ok::<(), domfreq::ExtractionError>(())
/// ```
pub fn extract_frequencies(
    samples: &[f32],
    sample_rate: u32,
    config: &ExtractionConfig,
) -> Result<Vec<f32>, ExtractionError> {
    config.validate()?;

    if sample_rate == 0 {
        return Err(ExtractionError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    log::debug!(
        "Extracting frequencies: {} samples at {} Hz, window={}, algorithm={}",
        samples.len(),
        sample_rate,
        config.samples_per_group,
        config.algorithm.name()
    );

    let frequencies: Vec<f32> = segment::chunk_ranges(samples.len(), config.samples_per_group)
        .map(|range| config.algorithm.estimate(&samples[range], sample_rate))
        .collect();

    log::debug!("Extracted {} window estimates", frequencies.len());

    Ok(frequencies)
}
