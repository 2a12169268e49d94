use std::{path::Path, process::Command};

use super::{common, ffmpeg, mp3, AudioBuffer, AudioCodec, AudioFormat, ElementError};

const COMMAND_NAME: &str = "lame";

// WAV to MP3 with LAME's default settings.

pub fn build_mp3_command(lame: &mut Command, source_file: &Path, destination_file: &Path) {
    lame.arg("--silent")
        .arg(common::path_argument(source_file))
        .arg(common::path_argument(destination_file));
}

pub fn convert_to_mp3(source_file: &Path, destination_file: &Path) -> Result<(), ElementError> {
    let mut lame = common::get_command(COMMAND_NAME)?;

    build_mp3_command(&mut lame, source_file, destination_file);

    common::run_command(&mut lame, COMMAND_NAME)
}

/// An [`AudioCodec`] that decodes with FFmpeg and encodes with LAME.
pub struct LameCodec;

impl AudioCodec for LameCodec {
    fn decode(&self, source_file: &Path, format: AudioFormat) -> Result<AudioBuffer, ElementError> {
        ffmpeg::decode_to_wav(source_file, format)
    }

    fn encode(
        &self,
        buffer: AudioBuffer,
        destination_file: &Path,
        format: AudioFormat,
    ) -> Result<(), ElementError> {
        if format != AudioFormat::Mp3 || buffer.format() != AudioFormat::Wav {
            return Err(ElementError::NotSupported {
                codec: COMMAND_NAME,
                format,
            });
        }

        convert_to_mp3(buffer.path(), destination_file)?;

        mp3::ensure_mp3(destination_file)
    }
}
