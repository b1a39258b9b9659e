//! Audio decoding using Symphonia
//!
//! Decodes `.wav`, `.flac`, `.ogg` and `.aiff` containers into f32 PCM.
//! Multi-channel sources contribute only their first channel; all integer
//! sample formats are scaled to [-1.0, 1.0].

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::i24;
use symphonia::default::get_probe;

/// Convert i24 to f32 in [-1.0, 1.0].
fn i24_to_f32(sample: i24) -> f32 {
    sample.inner() as f32 / 8388608.0
}

/// Decode an audio file into mono samples
///
/// # Arguments
///
/// * `path` - Path to a supported audio file
///
/// # Returns
///
/// Tuple of (first-channel samples, sample rate)
///
/// # Errors
///
/// Returns `ExtractionError::DecodingError` when the file cannot be
/// opened, probed, or decoded. Individual corrupted packets are skipped.
pub fn decode_audio(path: &Path) -> Result<(Vec<f32>, u32), crate::error::ExtractionError> {
    log::debug!("Decoding audio file: {}", path.display());

    let decode_err = |e: String| crate::error::ExtractionError::DecodingError(e);

    let src = File::open(path).map_err(|e| decode_err(format!("{}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| decode_err(format!("{}: unsupported format: {}", path.display(), e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or_else(|| decode_err(format!("{}: no supported audio tracks", path.display())))?;

    let track_id = track.id;
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| decode_err(format!("{}: cannot create decoder: {}", path.display(), e)))?;

    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => append_first_channel(&decoded, &mut samples)
                .map_err(|e| decode_err(format!("{}: {}", path.display(), e)))?,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                // Corrupted packets are skipped; the rest of the stream is
                // still usable.
                log::warn!("{}: skipping corrupted packet: {}", path.display(), e);
                continue;
            }
            Err(e) => return Err(decode_err(format!("{}: {}", path.display(), e))),
        }
    }

    log::debug!(
        "Decoded {}: {} samples at {} Hz",
        path.display(),
        samples.len(),
        sample_rate
    );

    Ok((samples, sample_rate))
}

/// Append channel 0 of a decoded buffer as f32 samples
fn append_first_channel(
    decoded: &AudioBufferRef<'_>,
    samples: &mut Vec<f32>,
) -> Result<(), String> {
    match decoded {
        AudioBufferRef::F32(buf) => samples.extend_from_slice(buf.chan(0)),
        AudioBufferRef::F64(buf) => samples.extend(buf.chan(0).iter().map(|&s| s as f32)),
        AudioBufferRef::S16(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 32768.0));
        }
        AudioBufferRef::S24(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| i24_to_f32(s)));
        }
        AudioBufferRef::S32(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| s as f32 / 2147483648.0));
        }
        AudioBufferRef::U8(buf) => {
            samples.extend(buf.chan(0).iter().map(|&s| (s as f32 - 128.0) / 128.0));
        }
        _ => return Err("unsupported sample format".to_string()),
    }
    Ok(())
}
