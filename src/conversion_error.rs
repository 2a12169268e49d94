// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::element::ElementError;

/// Error about conversion.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("File '{}' does not exist.", path.display())]
    SourceFileNotFound { path: PathBuf },

    #[error("{} cannot be decoded: {cause}", path.display())]
    DecodeFailure { path: PathBuf, cause: ElementError },

    #[error("{} cannot be encoded: {cause}", path.display())]
    EncodeFailure { path: PathBuf, cause: ElementError },

    #[error("I/O error: {error}")]
    IoFailure { error: std::io::Error },
}

impl ConversionError {
    pub(crate) fn decode_failure(path: &std::path::Path, cause: ElementError) -> Self {
        match cause {
            ElementError::IoError { error } => ConversionError::IoFailure { error },
            cause => ConversionError::DecodeFailure {
                path: path.to_path_buf(),
                cause,
            },
        }
    }

    pub(crate) fn encode_failure(path: &std::path::Path, cause: ElementError) -> Self {
        match cause {
            ElementError::IoError { error } => ConversionError::IoFailure { error },
            cause => ConversionError::EncodeFailure {
                path: path.to_path_buf(),
                cause,
            },
        }
    }
}
