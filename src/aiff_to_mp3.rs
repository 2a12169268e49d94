// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! This module has the function that called by the main function.

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;
use log::{debug, info};

use crate::{
    conversion_error::ConversionError,
    converter::{self, ConvertedFile},
    element::Encoder,
};

/// The struct for setting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Convert an AIFF file to an MP3 file.")]
pub struct Setting {
    #[arg(
        long,
        value_enum,
        default_value_t = Encoder::Ffmpeg,
        help = "A backend that encodes the MP3 file."
    )]
    encoder: Encoder,

    #[arg(
        required = true,
        value_name = "INPUT_FILE",
        help = "An AIFF file to be converted."
    )]
    input_file: PathBuf,

    #[arg(
        value_name = "OUTPUT_FILE",
        allow_hyphen_values = true,
        help = "A destination MP3 file. The input file with the extension .mp3 when omitted."
    )]
    output_file: Option<PathBuf>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored_arguments: Vec<OsString>,
}

/// Converts the AIFF file given by `setting` to an MP3 file.
pub fn aiff_to_mp3(setting: &Setting) -> Result<ConvertedFile, ConversionError> {
    info!("Converts {}.", setting.input_file.display());

    if !setting.ignored_arguments.is_empty() {
        debug!("Ignored arguments: {:?}", setting.ignored_arguments);
    }
    debug!("Encoder: {:?}", setting.encoder);

    let codec = setting.encoder.create_codec();

    converter::convert_with_codec(
        &setting.input_file,
        setting.output_file.as_deref(),
        codec.as_ref(),
    )
}
