// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! A codec for FFmpeg.

use std::{path::Path, process::Command};

use super::{common, mp3, AudioBuffer, AudioCodec, AudioFormat, ElementError};

const COMMAND_NAME: &str = "ffmpeg";

/// Adds the arguments that transcode `source_file` read as `source_format` to
/// `destination_file` written as `destination_format`.
///
/// Formats are always given explicitly so that FFmpeg does not guess them from the
/// extensions. An existing `destination_file` is overwritten.
pub fn build_transcode_command(
    ffmpeg: &mut Command,
    source_file: &Path,
    source_format: AudioFormat,
    destination_file: &Path,
    destination_format: AudioFormat,
) {
    ffmpeg
        .arg("-nostdin")
        .arg("-loglevel")
        .arg("error")
        .arg("-y")
        .arg("-f")
        .arg(source_format.ffmpeg_name())
        .arg("-i")
        .arg(common::path_argument(source_file))
        .arg("-f")
        .arg(destination_format.ffmpeg_name())
        .arg(common::path_argument(destination_file));
}

fn transcode_with(
    command_name: &str,
    source_file: &Path,
    source_format: AudioFormat,
    destination_file: &Path,
    destination_format: AudioFormat,
) -> Result<(), ElementError> {
    let mut ffmpeg = common::get_command(command_name)?;

    build_transcode_command(
        &mut ffmpeg,
        source_file,
        source_format,
        destination_file,
        destination_format,
    );

    common::run_command(&mut ffmpeg, command_name)
}

/// Transcodes `source_file` to `destination_file` with FFmpeg.
pub fn transcode(
    source_file: &Path,
    source_format: AudioFormat,
    destination_file: &Path,
    destination_format: AudioFormat,
) -> Result<(), ElementError> {
    transcode_with(
        COMMAND_NAME,
        source_file,
        source_format,
        destination_file,
        destination_format,
    )
}

/// Decodes `source_file` to a WAV [`AudioBuffer`].
pub fn decode_to_wav(source_file: &Path, format: AudioFormat) -> Result<AudioBuffer, ElementError> {
    let buffer = AudioBuffer::create(AudioFormat::Wav)?;

    transcode(source_file, format, buffer.path(), buffer.format())?;

    Ok(buffer)
}

/// Fails when `destination_file` should be MP3 but is not.
fn verify_encoded(destination_file: &Path, format: AudioFormat) -> Result<(), ElementError> {
    if format == AudioFormat::Mp3 {
        mp3::ensure_mp3(destination_file)
    } else {
        Ok(())
    }
}

fn encode_with(
    command_name: &str,
    buffer: AudioBuffer,
    destination_file: &Path,
    format: AudioFormat,
) -> Result<(), ElementError> {
    transcode_with(
        command_name,
        buffer.path(),
        buffer.format(),
        destination_file,
        format,
    )?;

    verify_encoded(destination_file, format)
}

/// An [`AudioCodec`] that uses FFmpeg for both directions.
pub struct FfmpegCodec;

impl AudioCodec for FfmpegCodec {
    fn decode(&self, source_file: &Path, format: AudioFormat) -> Result<AudioBuffer, ElementError> {
        decode_to_wav(source_file, format)
    }

    fn encode(
        &self,
        buffer: AudioBuffer,
        destination_file: &Path,
        format: AudioFormat,
    ) -> Result<(), ElementError> {
        encode_with(COMMAND_NAME, buffer, destination_file, format)
    }
}
