// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::process::exit;

use clap::Parser;

use aiff_to_mp3::{
    aiff_to_mp3::{aiff_to_mp3, Setting},
    conversion_error::ConversionError,
};
use env_logger::{Env, Target};
use log::debug;

fn initialize_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn parse_setting() -> Setting {
    match Setting::try_parse() {
        Ok(setting) => setting,
        Err(error) if error.use_stderr() => {
            println!("{}", error.render());

            exit(1);
        }
        // --help and --version
        Err(error) => error.exit(),
    }
}

fn main() {
    initialize_logging();

    let setting = parse_setting();

    match aiff_to_mp3(&setting) {
        Ok(converted_file) => {
            println!(
                "Successfully converted '{}' to '{}'.",
                converted_file.source.display(),
                converted_file.destination.display()
            );
        }
        Err(error) => {
            match error {
                ConversionError::SourceFileNotFound { .. } => {
                    println!("Error: {error}");
                }
                ConversionError::DecodeFailure { .. }
                | ConversionError::EncodeFailure { .. }
                | ConversionError::IoFailure { .. } => {
                    println!("Conversion failed: {error}");
                }
            }

            debug!("Detail: {error:?}");

            exit(1);
        }
    }
}
