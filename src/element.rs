mod common;
mod ffmpeg;
mod lame;
mod mp3;

use std::{
    fmt,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use clap::ValueEnum;
use tempfile::{tempdir, TempDir};
use thiserror::Error;

pub use self::{ffmpeg::FfmpegCodec, lame::LameCodec, mp3::is_mp3};

/// Error about an external codec.
#[derive(Error, Debug)]
pub enum ElementError {
    #[error("Command {command} is not found: {error}")]
    CommandNotFound {
        command: String,
        error: which::Error,
    },

    #[error("Command {command} is failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Command {command} cannot be executed: {error}")]
    CommandCannotExecuted {
        command: String,
        error: std::io::Error,
    },

    #[error("{} is not an MP3 file.", path.display())]
    NotMp3 { path: PathBuf },

    #[error("{format} is not supported by {codec}.")]
    NotSupported {
        codec: &'static str,
        format: AudioFormat,
    },

    #[error("I/O error: {error}")]
    IoError { error: std::io::Error },
}

/// Container formats passed to a codec as explicit hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Aiff,
    Wav,
    Mp3,
}

impl AudioFormat {
    /// The format name understood by FFmpeg's `-f` option.
    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            AudioFormat::Aiff => "aiff",
            AudioFormat::Wav => "wav",
            AudioFormat::Mp3 => "mp3",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Aiff => write!(f, "AIFF"),
            AudioFormat::Wav => write!(f, "WAV"),
            AudioFormat::Mp3 => write!(f, "MP3"),
        }
    }
}

/// Decoded audio owned by a single conversion.
///
/// The samples live in a file inside a private temporary directory, which is removed
/// when the buffer is dropped.
#[derive(Debug)]
pub struct AudioBuffer {
    path: PathBuf,
    format: AudioFormat,
    _directory: TempDir,
}

impl AudioBuffer {
    /// Creates an empty buffer that a decoder fills in `format`.
    pub fn create(format: AudioFormat) -> Result<Self, ElementError> {
        let directory = tempdir().map_err(|error| ElementError::IoError { error })?;
        let path = directory
            .path()
            .join(format!("decoded.{}", format.ffmpeg_name()));

        Ok(AudioBuffer {
            path,
            format,
            _directory: directory,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }
}

/// Decodes and encodes audio files.
#[cfg_attr(test, mockall::automock)]
pub trait AudioCodec {
    /// Decodes `source_file`, which is read as `format`.
    fn decode(&self, source_file: &Path, format: AudioFormat) -> Result<AudioBuffer, ElementError>;

    /// Encodes `buffer` to `destination_file` as `format`.
    ///
    /// An existing `destination_file` is overwritten.
    fn encode(
        &self,
        buffer: AudioBuffer,
        destination_file: &Path,
        format: AudioFormat,
    ) -> Result<(), ElementError>;
}

/// Backends which produce MP3 files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoder {
    /// FFmpeg decodes and encodes.
    #[default]
    Ffmpeg,

    /// FFmpeg decodes and LAME encodes.
    Lame,
}

impl Encoder {
    pub fn create_codec(&self) -> Box<dyn AudioCodec> {
        match self {
            Encoder::Ffmpeg => Box::new(FfmpegCodec),
            Encoder::Lame => Box::new(LameCodec),
        }
    }
}
