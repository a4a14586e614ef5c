// Integration tests for uploaded-blob decoding
//
// WAV fixtures are synthesised on the fly; decoding must land on engine
// PCM (16 kHz mono f32) whatever the input rate and channel count.

use anyhow::Result;
use habla::audio::{decode_for_engine, ENGINE_SAMPLE_RATE};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_wav(
    dir: &TempDir,
    name: &str,
    channels: u16,
    sample_rate: u32,
    samples: &[i16],
) -> Result<PathBuf> {
    let path = dir.path().join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec)?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;

    Ok(path)
}

fn sine(len: usize, amplitude: f64) -> Vec<i16> {
    (0..len)
        .map(|i| ((i as f64 * 0.03).sin() * amplitude) as i16)
        .collect()
}

#[test]
fn decodes_engine_rate_mono_unchanged_in_length() -> Result<()> {
    let dir = TempDir::new()?;
    let samples = sine(ENGINE_SAMPLE_RATE as usize, 10_000.0); // 1 second
    let path = write_wav(&dir, "mono16k.wav", 1, ENGINE_SAMPLE_RATE, &samples)?;

    let pcm = decode_for_engine(&path)?;

    assert_eq!(pcm.len(), samples.len());
    assert!(pcm.iter().all(|s| (-1.0..=1.0).contains(s)));

    Ok(())
}

#[test]
fn resamples_44k_stereo_to_one_second_of_engine_pcm() -> Result<()> {
    let dir = TempDir::new()?;
    // 1 second of interleaved stereo at 44.1 kHz.
    let frames = 44_100usize;
    let mono = sine(frames, 10_000.0);
    let mut interleaved = Vec::with_capacity(frames * 2);
    for s in mono {
        interleaved.push(s);
        interleaved.push(s);
    }
    let path = write_wav(&dir, "stereo44k.wav", 2, 44_100, &interleaved)?;

    let pcm = decode_for_engine(&path)?;

    let expected = ENGINE_SAMPLE_RATE as i64;
    assert!(
        (pcm.len() as i64 - expected).abs() < 50,
        "expected ~{} samples, got {}",
        expected,
        pcm.len()
    );

    Ok(())
}

#[test]
fn silence_decodes_to_near_zero_pcm() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_wav(
        &dir,
        "silence.wav",
        1,
        ENGINE_SAMPLE_RATE,
        &vec![0i16; ENGINE_SAMPLE_RATE as usize],
    )?;

    let pcm = decode_for_engine(&path)?;

    assert!(!pcm.is_empty());
    assert!(pcm.iter().all(|s| s.abs() < 1e-4));

    Ok(())
}

#[test]
fn nonexistent_file_fails() {
    let result = decode_for_engine("/nonexistent/path/recording.wav");
    assert!(result.is_err());
}

#[test]
fn garbage_bytes_fail_to_decode() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("garbage.wav");
    std::fs::write(&path, b"definitely not a RIFF container")?;

    assert!(decode_for_engine(&path).is_err());

    Ok(())
}
