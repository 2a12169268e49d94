// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conversion of an AIFF file to an MP3 file.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    conversion_error::ConversionError,
    element::{AudioCodec, AudioFormat, FfmpegCodec},
};

/// A converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// The path of the source AIFF file.
    pub source: PathBuf,

    /// The path of the written MP3 file.
    pub destination: PathBuf,
}

/// Returns `source_file` with its last extension replaced by `.mp3`.
pub fn get_output_mp3_path<P: AsRef<Path>>(source_file: P) -> PathBuf {
    source_file.as_ref().with_extension("mp3")
}

/// Converts `source_file` to an MP3 file with FFmpeg.
///
/// See [`convert_with_codec`].
pub fn convert(
    source_file: &Path,
    destination_file: Option<&Path>,
) -> Result<ConvertedFile, ConversionError> {
    convert_with_codec(source_file, destination_file, &FfmpegCodec)
}

/// Converts `source_file`, read as AIFF, to an MP3 file.
///
/// When `destination_file` is `None`, the MP3 file is written next to the source with
/// the extension `.mp3`. An existing destination is overwritten.
pub fn convert_with_codec(
    source_file: &Path,
    destination_file: Option<&Path>,
    codec: &dyn AudioCodec,
) -> Result<ConvertedFile, ConversionError> {
    if !source_file.is_file() {
        return Err(ConversionError::SourceFileNotFound {
            path: source_file.to_path_buf(),
        });
    }

    let destination_file = destination_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| get_output_mp3_path(source_file));

    debug!(
        "Converts {} to {}",
        source_file.display(),
        destination_file.display()
    );

    let buffer = codec
        .decode(source_file, AudioFormat::Aiff)
        .map_err(|cause| ConversionError::decode_failure(source_file, cause))?;

    info!("Decoded {}.", source_file.display());

    codec
        .encode(buffer, &destination_file, AudioFormat::Mp3)
        .map_err(|cause| ConversionError::encode_failure(&destination_file, cause))?;

    Ok(ConvertedFile {
        source: source_file.to_path_buf(),
        destination: destination_file,
    })
}
