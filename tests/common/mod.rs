use std::{
    f64::consts::PI,
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::Result;
use lofty::{file::FileType, probe::Probe};
use tempfile::{tempdir, TempDir};

const SAMPLE_RATE: u32 = 44100;
const CHANNELS: u16 = 2;
const BITS_PER_SAMPLE: u16 = 16;

/// Encodes `value` as an 80 bit IEEE 754 extended precision number.
fn to_extended(value: u32) -> [u8; 10] {
    let mut bytes = [0u8; 10];

    if value == 0 {
        return bytes;
    }

    let highest_bit = 31 - value.leading_zeros();
    let exponent = 16383 + highest_bit as u16;
    let mantissa = (value as u64) << (63 - highest_bit);

    bytes[..2].copy_from_slice(&exponent.to_be_bytes());
    bytes[2..].copy_from_slice(&mantissa.to_be_bytes());

    bytes
}

/// Creates the content of an AIFF file with a 440 Hz sine wave.
pub fn create_aiff(duration_in_milliseconds: u32) -> Vec<u8> {
    let frame_count = SAMPLE_RATE * duration_in_milliseconds / 1000;

    let mut sound_data = Vec::with_capacity(frame_count as usize * CHANNELS as usize * 2);
    for frame in 0..frame_count {
        let time = frame as f64 / SAMPLE_RATE as f64;
        let sample = ((2.0 * PI * 440.0 * time).sin() * i16::MAX as f64 * 0.5) as i16;

        for _ in 0..CHANNELS {
            sound_data.extend_from_slice(&sample.to_be_bytes());
        }
    }

    let mut common_chunk = Vec::with_capacity(18);
    common_chunk.extend_from_slice(&CHANNELS.to_be_bytes());
    common_chunk.extend_from_slice(&frame_count.to_be_bytes());
    common_chunk.extend_from_slice(&BITS_PER_SAMPLE.to_be_bytes());
    common_chunk.extend_from_slice(&to_extended(SAMPLE_RATE));

    let sound_chunk_size = 8 + sound_data.len() as u32;
    let form_size = 4 + (8 + common_chunk.len() as u32) + (8 + sound_chunk_size);

    let mut aiff = Vec::with_capacity(8 + form_size as usize);
    aiff.extend_from_slice(b"FORM");
    aiff.extend_from_slice(&form_size.to_be_bytes());
    aiff.extend_from_slice(b"AIFF");

    aiff.extend_from_slice(b"COMM");
    aiff.extend_from_slice(&(common_chunk.len() as u32).to_be_bytes());
    aiff.extend_from_slice(&common_chunk);

    aiff.extend_from_slice(b"SSND");
    aiff.extend_from_slice(&sound_chunk_size.to_be_bytes());
    // Offset and block size.
    aiff.extend_from_slice(&0u32.to_be_bytes());
    aiff.extend_from_slice(&0u32.to_be_bytes());
    aiff.extend_from_slice(&sound_data);

    aiff
}

/// Writes an AIFF file named `filename` into a new temporary directory.
#[allow(dead_code)]
pub fn prepare_aiff_file(filename: &str) -> Result<(PathBuf, TempDir)> {
    let directory = tempdir()?;
    let path = directory.path().join(filename);

    fs::write(&path, create_aiff(500))?;

    Ok((path, directory))
}

/// Writes a file that has the name of an AIFF file but not its content.
#[allow(dead_code)]
pub fn prepare_invalid_file(filename: &str) -> Result<(PathBuf, TempDir)> {
    let directory = tempdir()?;
    let path = directory.path().join(filename);

    fs::write(&path, "This is not an AIFF file.\n")?;

    Ok((path, directory))
}

#[allow(dead_code)]
pub fn is_mp3(path: &Path) -> Result<bool> {
    let probe = Probe::open(path)?.guess_file_type()?;

    Ok(probe.file_type() == Some(FileType::Mpeg))
}

fn command_output(command: &str, arguments: &[&str]) -> Option<Output> {
    let command_path = which::which(command).ok()?;

    Command::new(command_path)
        .args(arguments)
        .stdin(Stdio::null())
        .output()
        .ok()
}

/// Whether FFmpeg is installed and can encode MP3 files.
#[allow(dead_code)]
pub fn ffmpeg_can_encode_mp3() -> bool {
    let available = command_output("ffmpeg", &["-hide_banner", "-encoders"])
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("libmp3lame"))
        .unwrap_or(false);

    if !available {
        eprintln!("FFmpeg with libmp3lame is not found. Skipped.");
    }

    available
}

/// Whether LAME is installed along with FFmpeg.
#[allow(dead_code)]
pub fn lame_is_available() -> bool {
    let available = which::which("ffmpeg").is_ok()
        && command_output("lame", &["--version"])
            .map(|output| output.status.success())
            .unwrap_or(false);

    if !available {
        eprintln!("FFmpeg or LAME is not found. Skipped.");
    }

    available
}
