//! Audio input: container decoding and candidate-file discovery

pub mod decoder;

pub use decoder::decode_audio;

use std::io;
use std::path::{Path, PathBuf};

/// File extensions the decoder accepts
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["wav", "flac", "ogg", "aiff"];

/// List the supported audio files in a directory
///
/// Matches extensions case-insensitively and returns plain files only,
/// sorted by name so listings are deterministic.
///
/// # Errors
///
/// Returns an error when the directory cannot be read.
pub fn find_audio_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.iter().any(|&s| s == ext)
            })
            .unwrap_or(false);
        if supported {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("domfreq-io-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_audio_files_filters_and_sorts() {
        let dir = scratch_dir("filter");
        for name in ["b.wav", "a.FLAC", "notes.txt", "c.ogg", "d.aiff", "e.mp3"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let files = find_audio_files(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.FLAC", "b.wav", "c.ogg", "d.aiff"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_find_audio_files_ignores_directories() {
        let dir = scratch_dir("dirs");
        fs::create_dir_all(dir.join("nested.wav")).unwrap();

        let files = find_audio_files(&dir).unwrap();
        assert!(files.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_find_audio_files_empty_directory() {
        let dir = scratch_dir("empty");
        assert!(find_audio_files(&dir).unwrap().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }
}
