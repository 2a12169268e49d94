// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Checks for MP3 files.

use std::path::Path;

use lofty::{file::FileType, probe::Probe};
use log::debug;

use super::ElementError;

/// Whether a file is an MPEG audio stream, judged by its content.
pub fn is_mp3<P: AsRef<Path>>(file: P) -> Result<bool, ElementError> {
    let file = file.as_ref();
    let probe = Probe::open(file)
        .map_err(|error| ElementError::IoError {
            error: std::io::Error::other(error.to_string()),
        })?
        .guess_file_type()
        .map_err(|error| ElementError::IoError { error })?;

    debug!("{} is probed as {:?}", file.display(), probe.file_type());

    Ok(probe.file_type() == Some(FileType::Mpeg))
}

/// Fails unless `file` is an MPEG audio stream.
pub fn ensure_mp3(file: &Path) -> Result<(), ElementError> {
    if is_mp3(file)? {
        Ok(())
    } else {
        Err(ElementError::NotMp3 {
            path: file.to_path_buf(),
        })
    }
}
