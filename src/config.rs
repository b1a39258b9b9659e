//! Extraction configuration and settings-file resolution
//!
//! Runs are configured through a JSON settings file with two optional
//! fields:
//!
//! ```json
//! {
//!     "samples_per_group": 1024,
//!     "algorithm": "autocorrelation"
//! }
//! ```
//!
//! Resolution is strict: an unrecognized algorithm name or a window size
//! below 2 samples is a validation failure raised before any audio is
//! touched, never silently replaced by a default.

use std::path::Path;

use serde::Deserialize;

use crate::error::ExtractionError;
use crate::estimators::Algorithm;

/// Window size used when the settings file does not specify one
pub const DEFAULT_SAMPLES_PER_GROUP: usize = 1024;

/// Raw settings-file shape; both fields optional
#[derive(Debug, Deserialize)]
struct RawSettings {
    samples_per_group: Option<i64>,
    algorithm: Option<String>,
}

/// Validated extraction parameters, immutable for an entire run
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Analysis window size in samples (>= 2)
    pub samples_per_group: usize,

    /// Estimation strategy applied to every window
    pub algorithm: Algorithm,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            samples_per_group: DEFAULT_SAMPLES_PER_GROUP,
            algorithm: Algorithm::SpectralPeak,
        }
    }
}

impl ExtractionConfig {
    /// Load and resolve a settings file
    ///
    /// A missing or unreadable file is a fatal configuration error; the
    /// caller is expected to abort before processing any audio.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` when the file cannot be
    /// read, is not valid JSON, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ExtractionError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_settings_str(&text)
    }

    /// Resolve settings from a JSON string
    ///
    /// Absent fields fall back to their defaults (1024 samples per group,
    /// spectral_peak). Algorithm names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` when the JSON is invalid,
    /// `samples_per_group` is below 2, or the algorithm name is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use domfreq::{Algorithm, ExtractionConfig};
    ///
    /// let config = ExtractionConfig::from_settings_str(r#"{"algorithm": "cepstral"}"#)?;
    /// assert_eq!(config.algorithm, Algorithm::Cepstral);
    /// assert_eq!(config.samples_per_group, 1024);
    /// # Ok::<(), domfreq::ExtractionError>(())
    /// ```
    pub fn from_settings_str(text: &str) -> Result<Self, ExtractionError> {
        let raw: RawSettings = serde_json::from_str(text)
            .map_err(|e| ExtractionError::InvalidConfig(format!("invalid settings JSON: {}", e)))?;

        let samples_per_group = raw
            .samples_per_group
            .unwrap_or(DEFAULT_SAMPLES_PER_GROUP as i64);
        if samples_per_group < 2 {
            return Err(ExtractionError::InvalidConfig(format!(
                "'samples_per_group' must be at least 2, got {}",
                samples_per_group
            )));
        }

        let name = raw.algorithm.as_deref().unwrap_or("spectral_peak");
        let algorithm = Algorithm::from_name(name).ok_or_else(|| {
            ExtractionError::InvalidConfig(format!(
                "unknown algorithm '{}', supported algorithms are: {}",
                name,
                Algorithm::KNOWN_NAMES.join(", ")
            ))
        })?;

        let config = Self {
            samples_per_group: samples_per_group as usize,
            algorithm,
        };
        log::debug!(
            "Resolved settings: samples_per_group={}, algorithm={}",
            config.samples_per_group,
            config.algorithm.name()
        );
        Ok(config)
    }

    /// Check the run invariants
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` when `samples_per_group`
    /// is below 2.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.samples_per_group < 2 {
            return Err(ExtractionError::InvalidConfig(format!(
                "'samples_per_group' must be at least 2, got {}",
                self.samples_per_group
            )));
        }
        Ok(())
    }
}
