//! Frequency-series artifact writing
//!
//! Each extraction run produces a plain-text file: one comment line naming
//! the algorithm, then one frequency per line with 2 decimal places, in
//! window order. Output names are disambiguated (`name.txt`, `name1.txt`,
//! `name2.txt`, ...) so repeated runs never overwrite earlier results.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::estimators::Algorithm;

/// Render the output artifact for a frequency series
///
/// # Example
///
/// ```
/// use domfreq::{output::format_report, Algorithm};
///
/// let text = format_report(Algorithm::SpectralPeak, &[440.0, 0.0]);
/// assert_eq!(text, "# Algorithm used: spectral_peak\n440.00\n0.00\n");
/// ```
pub fn format_report(algorithm: Algorithm, frequencies: &[f32]) -> String {
    let mut text = format!("# Algorithm used: {}\n", algorithm.name());
    for freq in frequencies {
        text.push_str(&format!("{:.2}\n", freq));
    }
    text
}

/// Claim the next free output path for a base name
///
/// Tries `<base>.txt`, then `<base>1.txt`, `<base>2.txt`, ... and creates
/// the first name that does not exist yet. Creation uses `create_new`
/// semantics, so concurrent runs racing for the same base name each claim
/// a distinct file.
///
/// # Errors
///
/// Returns an error when the file cannot be created for any reason other
/// than the name being taken.
pub fn claim_output_path(dir: &Path, base: &str) -> io::Result<(File, PathBuf)> {
    let mut counter = 0u32;
    loop {
        let candidate = if counter == 0 {
            dir.join(format!("{}.txt", base))
        } else {
            dir.join(format!("{}{}.txt", base, counter))
        };

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((file, candidate)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(e),
        }
    }
}

/// Write a frequency series to the next free output path
///
/// Creates `dir` if needed and returns the path actually written.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created or
/// written.
pub fn write_report(
    dir: &Path,
    base: &str,
    algorithm: Algorithm,
    frequencies: &[f32],
) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let (mut file, path) = claim_output_path(dir, base)?;
    file.write_all(format_report(algorithm, frequencies).as_bytes())?;
    log::debug!(
        "Wrote {} estimates to {}",
        frequencies.len(),
        path.display()
    );
    Ok(path)
}
