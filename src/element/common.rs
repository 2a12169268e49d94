use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::debug;
use which::which;

use super::ElementError;

pub fn get_command(command: &str) -> Result<Command, ElementError> {
    let command_path = which(command);

    match command_path {
        Ok(command_path) => {
            debug!("{command} is found at {}", command_path.display());

            Ok(Command::new(command_path))
        }

        Err(error) => Err(ElementError::CommandNotFound {
            command: command.to_string(),
            error,
        }),
    }
}

/// Returns `path` in a form that a command does not read as an option.
///
/// A relative path starting with `-` is prefixed with `./`.
pub fn path_argument(path: &Path) -> PathBuf {
    if path.to_string_lossy().starts_with('-') {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

pub fn run_command(command: &mut Command, command_name: &str) -> Result<(), ElementError> {
    debug!("Runs {command:?}");

    let result = command.stdin(Stdio::null()).status();

    match result {
        Ok(exit_status) => {
            if exit_status.success() {
                Ok(())
            } else {
                Err(ElementError::CommandFailed {
                    command: command_name.to_string(),
                    status: exit_status,
                })
            }
        }
        Err(error) => Err(ElementError::CommandCannotExecuted {
            command: command_name.to_string(),
            error,
        }),
    }
}
