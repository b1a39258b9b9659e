//! Command-line front-end: extract per-window dominant frequencies from
//! the audio files in the current directory.
//!
//! Reads `settings.json` for the window size and algorithm, lets the
//! operator pick which files to process (automatically when only one
//! candidate exists), and writes one text artifact per file into
//! `output/`. Files are processed in parallel; a file that fails to decode
//! is reported and skipped.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use domfreq::io::{decode_audio, find_audio_files};
use domfreq::output::write_report;
use domfreq::select::{ConsoleSelector, FileSelector};
use domfreq::{extract_frequencies, ExtractionConfig};

const SETTINGS_PATH: &str = "settings.json";
const OUTPUT_DIR: &str = "output";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExtractionConfig::load(Path::new(SETTINGS_PATH))?;

    let candidates = find_audio_files(Path::new("."))?;
    if candidates.is_empty() {
        return Err("no supported audio files found in the current directory".into());
    }

    let selected = if candidates.len() == 1 {
        println!(
            "Found only one audio file: {}. Processing automatically.",
            candidates[0].display()
        );
        candidates
    } else {
        ConsoleSelector.select(&candidates)?
    };

    let output_dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(output_dir)?;

    let outcomes: Vec<(PathBuf, Result<PathBuf, String>)> = selected
        .par_iter()
        .map(|path| (path.clone(), process_file(path, &config, output_dir)))
        .collect();

    for (path, outcome) in &outcomes {
        match outcome {
            Ok(written) => println!(
                "File '{}' processed. Output: '{}' (Algorithm: {})",
                path.display(),
                written.display(),
                config.algorithm.name()
            ),
            Err(e) => eprintln!("Error processing '{}': {}", path.display(), e),
        }
    }

    Ok(())
}

/// Decode, extract and write one file; errors are reported per file so the
/// remaining files keep processing.
fn process_file(
    path: &Path,
    config: &ExtractionConfig,
    output_dir: &Path,
) -> Result<PathBuf, String> {
    let (samples, sample_rate) = decode_audio(path).map_err(|e| e.to_string())?;

    let frequencies =
        extract_frequencies(&samples, sample_rate, config).map_err(|e| e.to_string())?;

    let base = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("cannot derive an output name for '{}'", path.display()))?;

    write_report(output_dir, base, config.algorithm, &frequencies).map_err(|e| e.to_string())
}
